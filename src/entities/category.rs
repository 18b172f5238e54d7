//! Category entity - Entità categoria

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Category {
    pub id: i32,
    pub name: String,
}
