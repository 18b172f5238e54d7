//! Review DTOs - Data Transfer Objects per recensioni

use crate::entities::Review;
use serde::{Deserialize, Serialize};
use super::not_blank;
use validator::Validate;

/// Struct per gestire io col client
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Validate)]
pub struct ReviewDTO {
    pub id: Option<i32>,

    #[validate(length(min = 1, max = 100, message = "Title must be between 1 and 100 characters"), custom(function = "not_blank"))]
    pub title: String,

    #[validate(length(min = 1, max = 1000, message = "Text must be between 1 and 1000 characters"), custom(function = "not_blank"))]
    pub text: String,

    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i32,
}

impl From<Review> for ReviewDTO {
    fn from(value: Review) -> Self {
        Self {
            id: Some(value.id),
            title: value.title,
            text: value.text,
            rating: value.rating,
        }
    }
}

/// DTO per creare una nuova recensione (senza id)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreateReviewDTO {
    pub pokemon_id: i32,
    pub reviewer_id: i32,
    pub title: String,
    pub text: String,
    pub rating: i32,
}

impl CreateReviewDTO {
    pub fn new(pokemon_id: i32, reviewer_id: i32, dto: ReviewDTO) -> Self {
        Self {
            pokemon_id,
            reviewer_id,
            title: dto.title,
            text: dto.text,
            rating: dto.rating,
        }
    }
}

/// DTO per aggiornare una recensione (pokemon e reviewer restano invariati)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UpdateReviewDTO {
    pub title: String,
    pub text: String,
    pub rating: i32,
}

impl From<ReviewDTO> for UpdateReviewDTO {
    fn from(value: ReviewDTO) -> Self {
        Self {
            title: value.title,
            text: value.text,
            rating: value.rating,
        }
    }
}
