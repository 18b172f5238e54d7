//! Reviewer entity - Entità recensore

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Reviewer {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}
