//! Query DTOs - Data Transfer Objects per i query parameters

use serde::{Deserialize, Serialize};

/// Query parameters per POST /owners?country_id=
#[derive(Serialize, Deserialize, Debug)]
pub struct OwnerCreateQuery {
    pub country_id: i32,
}

/// Query parameters per POST /pokemons?owner_id=&category_id=
#[derive(Serialize, Deserialize, Debug)]
pub struct PokemonCreateQuery {
    pub owner_id: i32,
    pub category_id: i32,
}

/// Query parameters per POST /reviews?reviewer_id=&pokemon_id=
#[derive(Serialize, Deserialize, Debug)]
pub struct ReviewCreateQuery {
    pub reviewer_id: i32,
    pub pokemon_id: i32,
}
