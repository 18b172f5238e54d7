//! CategoryRepository - Repository per la gestione delle categorie

use super::{Create, Delete, Exists, Read, ReadAll, Update, natural_key, row_id, saved};
use crate::dtos::{CreateCategoryDTO, UpdateCategoryDTO};
use crate::entities::{Category, Pokemon};
use sqlx::{Error, SqlitePool};
use tracing::{debug, info, instrument};

// CATEGORY REPOSITORY
pub struct CategoryRepository {
    connection_pool: SqlitePool,
}

impl CategoryRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// Find category by exact (case-sensitive) name
    #[instrument(skip(self))]
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Category>, Error> {
        debug!("Finding category by name");
        let category = sqlx::query_as::<_, Category>(
            "SELECT id, name FROM categories WHERE name = ?",
        )
        .bind(name)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(category)
    }

    /// Find category whose name matches ignoring case and surrounding whitespace.
    /// Used for the duplicate check on create/update.
    #[instrument(skip(self))]
    pub async fn find_by_natural_key(&self, name: &str) -> Result<Option<Category>, Error> {
        let category = sqlx::query_as::<_, Category>(
            "SELECT id, name FROM categories WHERE name_key = ? ORDER BY id LIMIT 1",
        )
        .bind(natural_key(name))
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(category)
    }

    /// Get all pokemons linked to a category through the pokemon_categories junction
    #[instrument(skip(self), fields(category_id = %category_id))]
    pub async fn find_pokemons(&self, category_id: &i32) -> Result<Vec<Pokemon>, Error> {
        debug!("Finding pokemons of category");
        let pokemons = sqlx::query_as::<_, Pokemon>(
            r#"
            SELECT p.id, p.name, p.birth_date
            FROM pokemon_categories pc
            INNER JOIN pokemons p ON p.id = pc.pokemon_id
            WHERE pc.category_id = ?
            ORDER BY p.id
            "#,
        )
        .bind(category_id)
        .fetch_all(&self.connection_pool)
        .await?;

        debug!("Found {} pokemons", pokemons.len());
        Ok(pokemons)
    }
}

impl Exists<i32> for CategoryRepository {
    async fn exists(&self, id: &i32) -> Result<bool, Error> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM categories WHERE id = ?")
            .bind(id)
            .fetch_one(&self.connection_pool)
            .await?;

        Ok(count > 0)
    }
}

impl Create<Category, CreateCategoryDTO> for CategoryRepository {
    #[instrument(skip(self, data), fields(name = %data.name))]
    async fn create(&self, data: &CreateCategoryDTO) -> Result<Category, Error> {
        debug!("Creating new category");
        let result = sqlx::query("INSERT INTO categories (name, name_key) VALUES (?, ?)")
            .bind(&data.name)
            .bind(natural_key(&data.name))
            .execute(&self.connection_pool)
            .await?;

        let new_id = row_id(result.last_insert_rowid())?;

        info!("Category created with id {}", new_id);

        Ok(Category {
            id: new_id,
            name: data.name.clone(),
        })
    }
}

impl Read<Category, i32> for CategoryRepository {
    #[instrument(skip(self), fields(category_id = %id))]
    async fn read(&self, id: &i32) -> Result<Option<Category>, Error> {
        debug!("Reading category by id");
        let category = sqlx::query_as::<_, Category>("SELECT id, name FROM categories WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.connection_pool)
            .await?;

        Ok(category)
    }
}

impl ReadAll<Category> for CategoryRepository {
    async fn read_all(&self) -> Result<Vec<Category>, Error> {
        sqlx::query_as::<_, Category>("SELECT id, name FROM categories ORDER BY id")
            .fetch_all(&self.connection_pool)
            .await
    }
}

impl Update<UpdateCategoryDTO, i32> for CategoryRepository {
    #[instrument(skip(self, data), fields(category_id = %id))]
    async fn update(&self, id: &i32, data: &UpdateCategoryDTO) -> Result<bool, Error> {
        debug!("Updating category");
        let result = sqlx::query("UPDATE categories SET name = ?, name_key = ? WHERE id = ?")
            .bind(&data.name)
            .bind(natural_key(&data.name))
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        Ok(saved(&result))
    }
}

impl Delete<i32> for CategoryRepository {
    #[instrument(skip(self), fields(category_id = %id))]
    async fn delete(&self, id: &i32) -> Result<bool, Error> {
        debug!("Deleting category");
        // le righe in pokemon_categories vengono eliminate da ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM categories WHERE id = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        Ok(saved(&result))
    }
}
