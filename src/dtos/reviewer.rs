//! Reviewer DTOs - Data Transfer Objects per recensori

use crate::entities::Reviewer;
use serde::{Deserialize, Serialize};
use super::{not_blank, trimmed};
use validator::Validate;

/// Struct per gestire io col client
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Validate)]
pub struct ReviewerDTO {
    pub id: Option<i32>,

    #[validate(length(min = 1, max = 100, message = "First name must be between 1 and 100 characters"), custom(function = "not_blank"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100, message = "Last name must be between 1 and 100 characters"), custom(function = "not_blank"))]
    pub last_name: String,
}

impl From<Reviewer> for ReviewerDTO {
    fn from(value: Reviewer) -> Self {
        Self {
            id: Some(value.id),
            first_name: value.first_name,
            last_name: value.last_name,
        }
    }
}

/// DTO per creare un nuovo reviewer (senza id)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreateReviewerDTO {
    pub first_name: String,
    pub last_name: String,
}

impl From<ReviewerDTO> for CreateReviewerDTO {
    fn from(value: ReviewerDTO) -> Self {
        Self {
            first_name: trimmed(value.first_name),
            last_name: trimmed(value.last_name),
        }
    }
}

/// DTO per aggiornare un reviewer
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UpdateReviewerDTO {
    pub first_name: String,
    pub last_name: String,
}

impl From<ReviewerDTO> for UpdateReviewerDTO {
    fn from(value: ReviewerDTO) -> Self {
        Self {
            first_name: trimmed(value.first_name),
            last_name: trimmed(value.last_name),
        }
    }
}
