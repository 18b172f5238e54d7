//! DTOs module - Data Transfer Objects
//!
//! Questo modulo contiene tutti i DTOs usati per la comunicazione client-server.
//! I DTOs separano la rappresentazione esterna (API) dalla rappresentazione interna (entities).
//!
//! Per ogni entità:
//! - `XDTO` è l'oggetto esposto al client (in lettura e come body in scrittura)
//! - `CreateXDTO` / `UpdateXDTO` sono i modelli di scrittura passati ai repository,
//!   senza id: l'id lo assegna il database (create) o arriva dal path (update)

pub mod category;
pub mod country;
pub mod owner;
pub mod pokemon;
pub mod query;
pub mod review;
pub mod reviewer;

// Re-exports per mantenere la compatibilità con il codice esistente
pub use category::{CategoryDTO, CreateCategoryDTO, UpdateCategoryDTO};
pub use country::{CountryDTO, CreateCountryDTO, UpdateCountryDTO};
pub use owner::{CreateOwnerDTO, OwnerDTO, UpdateOwnerDTO};
pub use pokemon::{CreatePokemonDTO, PokemonDTO, UpdatePokemonDTO};
pub use query::{OwnerCreateQuery, PokemonCreateQuery, ReviewCreateQuery};
pub use review::{CreateReviewDTO, ReviewDTO, UpdateReviewDTO};
pub use reviewer::{CreateReviewerDTO, ReviewerDTO, UpdateReviewerDTO};

use validator::ValidationError;

/// Validatore custom: un campo fatto di soli spazi conta come vuoto
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("Field must not be blank".into()));
    }
    Ok(())
}

/// I nomi si salvano senza spazi esterni
pub(crate) fn trimmed(value: String) -> String {
    value.trim().to_string()
}
