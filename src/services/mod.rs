//! Services module - Coordinatore per tutti i service handler HTTP
//!
//! Questo modulo organizza i service handlers in sotto-moduli separati per una migliore manutenibilità.
//! Ogni modulo gestisce gli endpoint HTTP per una specifica entità.
//!
//! Convenzioni di risposta:
//! - letture: DTO (singolo o lista ordinata per id) come JSON
//! - scritture: messaggio di conferma in chiaro, mai la risorsa
//! - delete: 200 OK con messaggio di conferma (non 204 No Content)

pub mod category;
pub mod country;
pub mod owner;
pub mod pokemon;
pub mod review;
pub mod reviewer;

// Re-exports per facilitare l'import
pub use category::{
    create_category, delete_category, get_category, get_category_by_name,
    get_pokemons_of_category, list_categories, update_category,
};
pub use country::{
    create_country, delete_country, get_country, get_country_of_owner, get_owners_of_country,
    list_countries, update_country,
};
pub use owner::{
    create_owner, delete_owner, get_owner, get_owner_of_pokemon, get_pokemons_of_owner,
    list_owners, update_owner,
};
pub use pokemon::{
    create_pokemon, delete_pokemon, get_categories_of_pokemon, get_pokemon, get_pokemon_by_name,
    get_pokemon_rating, list_pokemons, update_pokemon,
};
pub use review::{
    create_review, delete_review, get_review, get_reviews_of_pokemon, list_reviews, update_review,
};
pub use reviewer::{
    create_reviewer, delete_reviewer, get_reviewer, get_reviews_of_reviewer, list_reviewers,
    update_reviewer,
};

use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

pub const CREATED: &str = "Successfully Created";
pub const UPDATED: &str = "Successfully Updated";
pub const DELETED: &str = "Successfully Deleted";

/// Root endpoint - health check
pub async fn root(State(_state): State<Arc<AppState>>) -> impl IntoResponse {
    (StatusCode::OK, "Server is running!")
}
