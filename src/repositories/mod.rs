//! Repositories module - Coordinatore per tutti i repository del progetto
//!
//! Questo modulo organizza i repository in sotto-moduli separati per una migliore manutenibilità.
//! Ogni repository gestisce le operazioni di database per una specifica entità,
//! comprese le query che attraversano le relazioni (tabelle di giunzione e foreign key).

// ************************* NOTA SU SQLX ************************* //

/*
   Le query sono scritte con le funzioni runtime di sqlx:
   sqlx::query_as::<_, Category>("SELECT id, name FROM categories WHERE id = ?")
       .bind(id)
       .fetch_optional(&self.connection_pool)
       .await?;
   Il parsing nella entity lo fa la derive sqlx::FromRow, quindi i nomi delle colonne
   nella SELECT devono coincidere con i campi della struct (usare alias nelle JOIN!).
   Non servono DATABASE_URL né un database acceso in fase di compilazione.

   Quante righe vogliamo?
   None         .execute(...)           -> QueryResult (rows_affected, last_insert_rowid)
   Zero o una   .fetch_optional(...)    -> Option<T>
   Esattamente  .fetch_one(...)         -> T (errore RowNotFound se vuoto, usare per COUNT/AVG)
   Molte        .fetch_all(...)         -> Vec<T>

   Gli errori si propagano con ? fino al service, che li trasforma in AppError.
*/

// ************************* MODULI REPOSITORY ************************* //

pub mod category;
pub mod country;
pub mod owner;
pub mod pokemon;
pub mod review;
pub mod reviewer;
pub mod traits;

// Re-esportazione dei trait per facilitare l'import
pub use traits::{Create, Delete, Exists, Read, ReadAll, Update, row_id, saved};

// Re-esportazione delle struct dei repository per facilitare l'import
pub use category::CategoryRepository;
pub use country::CountryRepository;
pub use owner::OwnerRepository;
pub use pokemon::PokemonRepository;
pub use review::ReviewRepository;
pub use reviewer::ReviewerRepository;

/// Normalizza una chiave naturale per il confronto dei duplicati:
/// whitespace esterno rimosso (anche tab e newline), minuscolo Unicode.
/// Calcolata qui e salvata nelle colonne *_key: lower()/trim() di SQLite
/// gestiscono solo ASCII e spazi.
pub(crate) fn natural_key(value: &str) -> String {
    value.trim().to_lowercase()
}
