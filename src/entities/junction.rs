//! Junction entities - Tabelle di giunzione per le relazioni molti-a-molti
//!
//! Le righe di giunzione non vengono mai esposte al client: servono solo a
//! materializzare le relazioni pokemon <-> categoria e pokemon <-> owner.

use serde::{Deserialize, Serialize};

/// Chiave composta (pokemon_id, category_id)
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, sqlx::FromRow)]
pub struct PokemonCategory {
    pub pokemon_id: i32,
    pub category_id: i32,
}

/// Chiave composta (pokemon_id, owner_id)
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, sqlx::FromRow)]
pub struct PokemonOwner {
    pub pokemon_id: i32,
    pub owner_id: i32,
}
