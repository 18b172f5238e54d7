//! Country entity - Entità paese

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Country {
    pub id: i32,
    pub name: String,
}
