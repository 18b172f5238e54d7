//! Application State - Stato dell'applicazione
//!
//! Contiene tutti i repository, costruiti a partire dal pool di connessioni
//! passato dal chiamante (niente stato globale).

use crate::repositories::{
    CategoryRepository, CountryRepository, OwnerRepository, PokemonRepository, ReviewRepository,
    ReviewerRepository,
};
use sqlx::SqlitePool;

/// Stato condiviso tra tutte le route
pub struct AppState {
    /// Repository per la gestione delle categorie
    pub category: CategoryRepository,

    /// Repository per la gestione dei paesi
    pub country: CountryRepository,

    /// Repository per la gestione degli owner
    pub owner: OwnerRepository,

    /// Repository per la gestione dei pokemon
    pub pokemon: PokemonRepository,

    /// Repository per la gestione delle recensioni
    pub review: ReviewRepository,

    /// Repository per la gestione dei recensori
    pub reviewer: ReviewerRepository,
}

impl AppState {
    /// Crea una nuova istanza di AppState inizializzando tutti i repository
    /// con il pool di connessioni fornito.
    ///
    /// # Arguments
    /// * `pool` - Pool di connessioni SQLite condiviso
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            category: CategoryRepository::new(pool.clone()),
            country: CountryRepository::new(pool.clone()),
            owner: OwnerRepository::new(pool.clone()),
            pokemon: PokemonRepository::new(pool.clone()),
            review: ReviewRepository::new(pool.clone()),
            reviewer: ReviewerRepository::new(pool),
        }
    }
}
