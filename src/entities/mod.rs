//! Entities module - Entità del dominio applicativo
//!
//! Questo modulo contiene tutte le entità (models) che rappresentano i dati persistiti nel database.
//! Ogni entity corrisponde a una tabella nel database.

pub mod category;
pub mod country;
pub mod junction;
pub mod owner;
pub mod pokemon;
pub mod review;
pub mod reviewer;

// Re-exports per facilitare l'import
pub use category::Category;
pub use country::Country;
pub use junction::{PokemonCategory, PokemonOwner};
pub use owner::Owner;
pub use pokemon::Pokemon;
pub use review::Review;
pub use reviewer::Reviewer;
