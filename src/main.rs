use pokemon_review::{AppState, config::Config, create_router};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::{str::FromStr, sync::Arc, time::Duration};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env prima del logger, così anche RUST_LOG può stare nel file
    dotenv::dotenv().ok();

    // Logging: RUST_LOG sovrascrive il filtro di default
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokemon_review=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Inizializza la configurazione
    let config = Config::from_env()?;
    config.print_info();

    // Pool di connessioni, con i vincoli di chiave esterna sempre attivi
    let connect_options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .max_lifetime(Duration::from_secs(config.connection_lifetime_secs))
        .connect_with(connect_options)
        .await?;

    sqlx::migrate!().run(&pool).await?;
    info!("Database migrations applied");

    let state = Arc::new(AppState::new(pool));
    let app = create_router(state);

    let addr = format!("{}:{}", config.server_host, config.server_port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
