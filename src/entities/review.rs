//! Review entity - Entità recensione

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Review {
    pub id: i32,
    pub title: String,
    pub text: String,
    pub rating: i32,
    pub pokemon_id: i32,
    pub reviewer_id: i32,
}
