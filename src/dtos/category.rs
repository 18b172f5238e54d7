//! Category DTOs - Data Transfer Objects per categorie

use crate::entities::Category;
use serde::{Deserialize, Serialize};
use super::{not_blank, trimmed};
use validator::Validate;

/// Struct per gestire io col client
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Validate)]
pub struct CategoryDTO {
    /// Ignorato in input: l'id lo assegna il database
    pub id: Option<i32>,

    #[validate(length(min = 1, max = 100, message = "Category name must be between 1 and 100 characters"), custom(function = "not_blank"))]
    pub name: String,
}

impl From<Category> for CategoryDTO {
    fn from(value: Category) -> Self {
        Self {
            id: Some(value.id),
            name: value.name,
        }
    }
}

/// DTO per creare una nuova categoria (senza id)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreateCategoryDTO {
    pub name: String,
}

impl From<CategoryDTO> for CreateCategoryDTO {
    fn from(value: CategoryDTO) -> Self {
        Self {
            name: trimmed(value.name),
        }
    }
}

/// DTO per aggiornare una categoria (sostituzione completa dei campi modificabili)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UpdateCategoryDTO {
    pub name: String,
}

impl From<CategoryDTO> for UpdateCategoryDTO {
    fn from(value: CategoryDTO) -> Self {
        Self {
            name: trimmed(value.name),
        }
    }
}
