//! Pokemon DTOs - Data Transfer Objects per pokemon

use crate::entities::Pokemon;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use super::{not_blank, trimmed};
use validator::Validate;

/// Struct per gestire io col client
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Validate)]
pub struct PokemonDTO {
    pub id: Option<i32>,

    #[validate(length(min = 1, max = 100, message = "Pokemon name must be between 1 and 100 characters"), custom(function = "not_blank"))]
    pub name: String,

    pub birth_date: DateTime<Utc>,
}

impl From<Pokemon> for PokemonDTO {
    fn from(value: Pokemon) -> Self {
        Self {
            id: Some(value.id),
            name: value.name,
            birth_date: value.birth_date,
        }
    }
}

/// DTO per creare un nuovo pokemon: oltre ai campi del pokemon porta
/// l'owner e la categoria da collegare tramite le tabelle di giunzione
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreatePokemonDTO {
    pub owner_id: i32,
    pub category_id: i32,
    pub name: String,
    pub birth_date: DateTime<Utc>,
}

impl CreatePokemonDTO {
    pub fn new(owner_id: i32, category_id: i32, dto: PokemonDTO) -> Self {
        Self {
            owner_id,
            category_id,
            name: trimmed(dto.name),
            birth_date: dto.birth_date,
        }
    }
}

/// DTO per aggiornare un pokemon
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UpdatePokemonDTO {
    pub name: String,
    pub birth_date: DateTime<Utc>,
}

impl From<PokemonDTO> for UpdatePokemonDTO {
    fn from(value: PokemonDTO) -> Self {
        Self {
            name: trimmed(value.name),
            birth_date: value.birth_date,
        }
    }
}
