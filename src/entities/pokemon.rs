//! Pokemon entity - Entità pokemon

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Pokemon {
    pub id: i32,
    pub name: String,
    pub birth_date: DateTime<Utc>,
}
