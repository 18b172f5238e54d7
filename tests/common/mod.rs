#![allow(dead_code)]

use axum_test::TestServer;
use pokemon_review::core::AppState;
use sqlx::SqlitePool;
use std::sync::Arc;

/// Crea un AppState per i test
///
/// # Arguments
/// * `pool` - Connection pool SQLite creato da `#[sqlx::test]`
pub fn create_test_state(pool: SqlitePool) -> Arc<AppState> {
    Arc::new(AppState::new(pool))
}

/// Crea un TestServer per i test
///
/// # Returns
/// TestServer configurato e pronto per eseguire richieste
pub fn create_test_server(pool: SqlitePool) -> TestServer {
    let app = pokemon_review::create_router(create_test_state(pool));
    TestServer::new(app).expect("Failed to create test server")
}

/// Conta le righe di una tabella, per verificare che una richiesta fallita non abbia scritto nulla
pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    let query = format!("SELECT COUNT(*) FROM {}", table);
    sqlx::query_scalar::<_, i64>(&query)
        .fetch_one(pool)
        .await
        .expect("Failed to count rows")
}
