//! Owner entity - Entità allenatore

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Owner {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub gym: String,
    // ogni owner appartiene a esattamente un paese
    pub country_id: i32,
}
