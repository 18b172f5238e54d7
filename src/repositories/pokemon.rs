//! PokemonRepository - Repository per la gestione dei pokemon
//!
//! Oltre alle CRUD contiene le query che attraversano le relazioni del pokemon:
//! rating medio dalle recensioni e categorie tramite la tabella di giunzione.
//! La creazione scrive pokemon + due righe di giunzione in un'unica transazione.

use super::{Create, Delete, Exists, Read, ReadAll, Update, natural_key, row_id, saved};
use crate::dtos::{CreatePokemonDTO, UpdatePokemonDTO};
use crate::entities::{Category, Pokemon, PokemonCategory, PokemonOwner};
use sqlx::{Error, SqliteConnection, SqlitePool};
use tracing::{debug, info, instrument, warn};

/// Rating di un pokemon senza recensioni
pub const NEUTRAL_RATING: f64 = 0.0;

// POKEMON REPOSITORY
pub struct PokemonRepository {
    connection_pool: SqlitePool,
}

impl PokemonRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// Find pokemon by exact (case-sensitive) name
    #[instrument(skip(self))]
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Pokemon>, Error> {
        debug!("Finding pokemon by name");
        let pokemon = sqlx::query_as::<_, Pokemon>(
            "SELECT id, name, birth_date FROM pokemons WHERE name = ?",
        )
        .bind(name)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(pokemon)
    }

    /// Find pokemon whose name matches ignoring case and surrounding whitespace
    #[instrument(skip(self))]
    pub async fn find_by_natural_key(&self, name: &str) -> Result<Option<Pokemon>, Error> {
        let pokemon = sqlx::query_as::<_, Pokemon>(
            r#"
            SELECT id, name, birth_date
            FROM pokemons
            WHERE name_key = ?
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(natural_key(name))
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(pokemon)
    }

    /// Average rating of the reviews of a pokemon.
    /// A pokemon without reviews has rating `NEUTRAL_RATING`, not an error.
    #[instrument(skip(self), fields(pokemon_id = %pokemon_id))]
    pub async fn rating(&self, pokemon_id: &i32) -> Result<f64, Error> {
        debug!("Computing pokemon rating");
        // AVG su zero righe restituisce NULL
        let average = sqlx::query_scalar::<_, Option<f64>>(
            "SELECT AVG(rating) FROM reviews WHERE pokemon_id = ?",
        )
        .bind(pokemon_id)
        .fetch_one(&self.connection_pool)
        .await?;

        Ok(average.unwrap_or(NEUTRAL_RATING))
    }

    /// Get all categories of a pokemon through the pokemon_categories junction
    #[instrument(skip(self), fields(pokemon_id = %pokemon_id))]
    pub async fn find_categories(&self, pokemon_id: &i32) -> Result<Vec<Category>, Error> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT c.id, c.name
            FROM pokemon_categories pc
            INNER JOIN categories c ON c.id = pc.category_id
            WHERE pc.pokemon_id = ?
            ORDER BY c.id
            "#,
        )
        .bind(pokemon_id)
        .fetch_all(&self.connection_pool)
        .await?;

        debug!("Found {} categories", categories.len());
        Ok(categories)
    }

    async fn link_owner(conn: &mut SqliteConnection, link: &PokemonOwner) -> Result<(), Error> {
        sqlx::query("INSERT INTO pokemon_owners (pokemon_id, owner_id) VALUES (?, ?)")
            .bind(link.pokemon_id)
            .bind(link.owner_id)
            .execute(conn)
            .await?;
        Ok(())
    }

    async fn link_category(
        conn: &mut SqliteConnection,
        link: &PokemonCategory,
    ) -> Result<(), Error> {
        sqlx::query("INSERT INTO pokemon_categories (pokemon_id, category_id) VALUES (?, ?)")
            .bind(link.pokemon_id)
            .bind(link.category_id)
            .execute(conn)
            .await?;
        Ok(())
    }
}

impl Exists<i32> for PokemonRepository {
    async fn exists(&self, id: &i32) -> Result<bool, Error> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM pokemons WHERE id = ?")
            .bind(id)
            .fetch_one(&self.connection_pool)
            .await?;

        Ok(count > 0)
    }
}

impl Create<Pokemon, CreatePokemonDTO> for PokemonRepository {
    /// Inserts the pokemon and links it to its owner and category.
    ///
    /// The three inserts share one transaction: either all of them are
    /// committed or none. Owner and category are re-checked inside the
    /// transaction; if either is missing the transaction is rolled back and
    /// `Error::RowNotFound` is returned.
    #[instrument(skip(self, data), fields(name = %data.name, owner_id = %data.owner_id, category_id = %data.category_id))]
    async fn create(&self, data: &CreatePokemonDTO) -> Result<Pokemon, Error> {
        debug!("Creating new pokemon");
        let mut tx = self.connection_pool.begin().await?;

        let owner_found = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM owners WHERE id = ?")
            .bind(data.owner_id)
            .fetch_one(&mut *tx)
            .await?
            > 0;
        let category_found =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM categories WHERE id = ?")
                .bind(data.category_id)
                .fetch_one(&mut *tx)
                .await?
                > 0;

        if !owner_found || !category_found {
            // il drop della transazione fa rollback
            warn!(
                owner_found,
                category_found, "Refusing to create pokemon with missing references"
            );
            return Err(Error::RowNotFound);
        }

        let result = sqlx::query("INSERT INTO pokemons (name, birth_date, name_key) VALUES (?, ?, ?)")
            .bind(&data.name)
            .bind(data.birth_date)
            .bind(natural_key(&data.name))
            .execute(&mut *tx)
            .await?;

        let new_id = row_id(result.last_insert_rowid())?;

        Self::link_owner(
            &mut tx,
            &PokemonOwner {
                pokemon_id: new_id,
                owner_id: data.owner_id,
            },
        )
        .await?;
        Self::link_category(
            &mut tx,
            &PokemonCategory {
                pokemon_id: new_id,
                category_id: data.category_id,
            },
        )
        .await?;

        tx.commit().await?;

        info!("Pokemon created with id {}", new_id);

        Ok(Pokemon {
            id: new_id,
            name: data.name.clone(),
            birth_date: data.birth_date,
        })
    }
}

impl Read<Pokemon, i32> for PokemonRepository {
    #[instrument(skip(self), fields(pokemon_id = %id))]
    async fn read(&self, id: &i32) -> Result<Option<Pokemon>, Error> {
        debug!("Reading pokemon by id");
        let pokemon = sqlx::query_as::<_, Pokemon>(
            "SELECT id, name, birth_date FROM pokemons WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(pokemon)
    }
}

impl ReadAll<Pokemon> for PokemonRepository {
    async fn read_all(&self) -> Result<Vec<Pokemon>, Error> {
        sqlx::query_as::<_, Pokemon>("SELECT id, name, birth_date FROM pokemons ORDER BY id")
            .fetch_all(&self.connection_pool)
            .await
    }
}

impl Update<UpdatePokemonDTO, i32> for PokemonRepository {
    #[instrument(skip(self, data), fields(pokemon_id = %id))]
    async fn update(&self, id: &i32, data: &UpdatePokemonDTO) -> Result<bool, Error> {
        debug!("Updating pokemon");
        let result = sqlx::query(
            "UPDATE pokemons SET name = ?, birth_date = ?, name_key = ? WHERE id = ?",
        )
        .bind(&data.name)
        .bind(data.birth_date)
        .bind(natural_key(&data.name))
        .bind(id)
        .execute(&self.connection_pool)
        .await?;

        Ok(saved(&result))
    }
}

impl Delete<i32> for PokemonRepository {
    #[instrument(skip(self), fields(pokemon_id = %id))]
    async fn delete(&self, id: &i32) -> Result<bool, Error> {
        debug!("Deleting pokemon");
        // reviews, pokemon_owners e pokemon_categories: ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM pokemons WHERE id = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        Ok(saved(&result))
    }
}
