//! Server library - espone i moduli principali per i test

pub mod core;
pub mod dtos;
pub mod entities;
pub mod repositories;
pub mod services;

// Re-export dei tipi principali per facilitare l'import
pub use core::{AppError, AppState, config};
pub use services::root;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Crea il router principale dell'applicazione
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/categories", configure_category_routes())
        .nest("/countries", configure_country_routes())
        .nest("/owners", configure_owner_routes())
        .nest("/pokemons", configure_pokemon_routes())
        .nest("/reviews", configure_review_routes())
        .nest("/reviewers", configure_reviewer_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Configura le routes per la gestione delle categorie
fn configure_category_routes() -> Router<Arc<AppState>> {
    use services::*;
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route(
            "/{category_id}",
            get(get_category).put(update_category).delete(delete_category),
        )
        .route("/name/{name}", get(get_category_by_name))
        .route("/{category_id}/pokemons", get(get_pokemons_of_category))
}

/// Configura le routes per la gestione dei paesi
fn configure_country_routes() -> Router<Arc<AppState>> {
    use services::*;
    Router::new()
        .route("/", get(list_countries).post(create_country))
        .route(
            "/{country_id}",
            get(get_country).put(update_country).delete(delete_country),
        )
        .route("/{country_id}/owners", get(get_owners_of_country))
        .route("/owner/{owner_id}", get(get_country_of_owner))
}

/// Configura le routes per la gestione degli owner
fn configure_owner_routes() -> Router<Arc<AppState>> {
    use services::*;
    Router::new()
        .route("/", get(list_owners).post(create_owner))
        .route(
            "/{owner_id}",
            get(get_owner).put(update_owner).delete(delete_owner),
        )
        .route("/{owner_id}/pokemons", get(get_pokemons_of_owner))
        .route("/pokemon/{pokemon_id}", get(get_owner_of_pokemon))
}

/// Configura le routes per la gestione dei pokemon
fn configure_pokemon_routes() -> Router<Arc<AppState>> {
    use services::*;
    Router::new()
        .route("/", get(list_pokemons).post(create_pokemon))
        .route(
            "/{pokemon_id}",
            get(get_pokemon).put(update_pokemon).delete(delete_pokemon),
        )
        .route("/name/{name}", get(get_pokemon_by_name))
        .route("/{pokemon_id}/rating", get(get_pokemon_rating))
        .route("/{pokemon_id}/categories", get(get_categories_of_pokemon))
}

/// Configura le routes per la gestione delle recensioni
fn configure_review_routes() -> Router<Arc<AppState>> {
    use services::*;
    Router::new()
        .route("/", get(list_reviews).post(create_review))
        .route(
            "/{review_id}",
            get(get_review).put(update_review).delete(delete_review),
        )
        .route("/pokemon/{pokemon_id}", get(get_reviews_of_pokemon))
}

/// Configura le routes per la gestione dei recensori
fn configure_reviewer_routes() -> Router<Arc<AppState>> {
    use services::*;
    Router::new()
        .route("/", get(list_reviewers).post(create_reviewer))
        .route(
            "/{reviewer_id}",
            get(get_reviewer).put(update_reviewer).delete(delete_reviewer),
        )
        .route("/{reviewer_id}/reviews", get(get_reviews_of_reviewer))
}
