//! CountryRepository - Repository per la gestione dei paesi

use super::{Create, Delete, Exists, Read, ReadAll, Update, natural_key, row_id, saved};
use crate::dtos::{CreateCountryDTO, UpdateCountryDTO};
use crate::entities::{Country, Owner};
use sqlx::{Error, SqlitePool};
use tracing::{debug, info, instrument};

// COUNTRY REPOSITORY
pub struct CountryRepository {
    connection_pool: SqlitePool,
}

impl CountryRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// Find country whose name matches ignoring case and surrounding whitespace
    #[instrument(skip(self))]
    pub async fn find_by_natural_key(&self, name: &str) -> Result<Option<Country>, Error> {
        let country = sqlx::query_as::<_, Country>(
            "SELECT id, name FROM countries WHERE name_key = ? ORDER BY id LIMIT 1",
        )
        .bind(natural_key(name))
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(country)
    }

    /// Get the country of an owner (direct foreign key projection)
    #[instrument(skip(self), fields(owner_id = %owner_id))]
    pub async fn find_by_owner(&self, owner_id: &i32) -> Result<Option<Country>, Error> {
        debug!("Finding country of owner");
        let country = sqlx::query_as::<_, Country>(
            r#"
            SELECT c.id, c.name
            FROM owners o
            INNER JOIN countries c ON c.id = o.country_id
            WHERE o.id = ?
            "#,
        )
        .bind(owner_id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(country)
    }

    /// Get all owners living in a country
    #[instrument(skip(self), fields(country_id = %country_id))]
    pub async fn find_owners(&self, country_id: &i32) -> Result<Vec<Owner>, Error> {
        debug!("Finding owners of country");
        let owners = sqlx::query_as::<_, Owner>(
            r#"
            SELECT id, first_name, last_name, gym, country_id
            FROM owners
            WHERE country_id = ?
            ORDER BY id
            "#,
        )
        .bind(country_id)
        .fetch_all(&self.connection_pool)
        .await?;

        debug!("Found {} owners", owners.len());
        Ok(owners)
    }
}

impl Exists<i32> for CountryRepository {
    async fn exists(&self, id: &i32) -> Result<bool, Error> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM countries WHERE id = ?")
            .bind(id)
            .fetch_one(&self.connection_pool)
            .await?;

        Ok(count > 0)
    }
}

impl Create<Country, CreateCountryDTO> for CountryRepository {
    #[instrument(skip(self, data), fields(name = %data.name))]
    async fn create(&self, data: &CreateCountryDTO) -> Result<Country, Error> {
        debug!("Creating new country");
        let result = sqlx::query("INSERT INTO countries (name, name_key) VALUES (?, ?)")
            .bind(&data.name)
            .bind(natural_key(&data.name))
            .execute(&self.connection_pool)
            .await?;

        let new_id = row_id(result.last_insert_rowid())?;

        info!("Country created with id {}", new_id);

        Ok(Country {
            id: new_id,
            name: data.name.clone(),
        })
    }
}

impl Read<Country, i32> for CountryRepository {
    #[instrument(skip(self), fields(country_id = %id))]
    async fn read(&self, id: &i32) -> Result<Option<Country>, Error> {
        debug!("Reading country by id");
        let country = sqlx::query_as::<_, Country>("SELECT id, name FROM countries WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.connection_pool)
            .await?;

        Ok(country)
    }
}

impl ReadAll<Country> for CountryRepository {
    async fn read_all(&self) -> Result<Vec<Country>, Error> {
        sqlx::query_as::<_, Country>("SELECT id, name FROM countries ORDER BY id")
            .fetch_all(&self.connection_pool)
            .await
    }
}

impl Update<UpdateCountryDTO, i32> for CountryRepository {
    #[instrument(skip(self, data), fields(country_id = %id))]
    async fn update(&self, id: &i32, data: &UpdateCountryDTO) -> Result<bool, Error> {
        debug!("Updating country");
        let result = sqlx::query("UPDATE countries SET name = ?, name_key = ? WHERE id = ?")
            .bind(&data.name)
            .bind(natural_key(&data.name))
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        Ok(saved(&result))
    }
}

impl Delete<i32> for CountryRepository {
    /// Fails with a foreign key violation while owners still reference the country
    #[instrument(skip(self), fields(country_id = %id))]
    async fn delete(&self, id: &i32) -> Result<bool, Error> {
        debug!("Deleting country");
        let result = sqlx::query("DELETE FROM countries WHERE id = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        Ok(saved(&result))
    }
}
