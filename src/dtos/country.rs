//! Country DTOs - Data Transfer Objects per paesi

use crate::entities::Country;
use serde::{Deserialize, Serialize};
use super::{not_blank, trimmed};
use validator::Validate;

/// Struct per gestire io col client
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Validate)]
pub struct CountryDTO {
    pub id: Option<i32>,

    #[validate(length(min = 1, max = 100, message = "Country name must be between 1 and 100 characters"), custom(function = "not_blank"))]
    pub name: String,
}

impl From<Country> for CountryDTO {
    fn from(value: Country) -> Self {
        Self {
            id: Some(value.id),
            name: value.name,
        }
    }
}

/// DTO per creare un nuovo paese (senza id)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreateCountryDTO {
    pub name: String,
}

impl From<CountryDTO> for CreateCountryDTO {
    fn from(value: CountryDTO) -> Self {
        Self {
            name: trimmed(value.name),
        }
    }
}

/// DTO per aggiornare un paese
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UpdateCountryDTO {
    pub name: String,
}

impl From<CountryDTO> for UpdateCountryDTO {
    fn from(value: CountryDTO) -> Self {
        Self {
            name: trimmed(value.name),
        }
    }
}
