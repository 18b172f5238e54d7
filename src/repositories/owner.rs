//! OwnerRepository - Repository per la gestione degli owner

use super::{Create, Delete, Exists, Read, ReadAll, Update, natural_key, row_id, saved};
use crate::dtos::{CreateOwnerDTO, UpdateOwnerDTO};
use crate::entities::{Owner, Pokemon};
use sqlx::{Error, SqlitePool};
use tracing::{debug, info, instrument};

// OWNER REPOSITORY
pub struct OwnerRepository {
    connection_pool: SqlitePool,
}

impl OwnerRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// Find owner by the compound natural key (first name, last name, gym),
    /// ignoring case and surrounding whitespace of each part
    #[instrument(skip(self))]
    pub async fn find_by_natural_key(
        &self,
        first_name: &str,
        last_name: &str,
        gym: &str,
    ) -> Result<Option<Owner>, Error> {
        let owner = sqlx::query_as::<_, Owner>(
            r#"
            SELECT id, first_name, last_name, gym, country_id
            FROM owners
            WHERE first_name_key = ?
            AND last_name_key = ?
            AND gym_key = ?
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(natural_key(first_name))
        .bind(natural_key(last_name))
        .bind(natural_key(gym))
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(owner)
    }

    /// Get the owner of a pokemon (first match in the pokemon_owners junction)
    #[instrument(skip(self), fields(pokemon_id = %pokemon_id))]
    pub async fn find_by_pokemon(&self, pokemon_id: &i32) -> Result<Option<Owner>, Error> {
        debug!("Finding owner of pokemon");
        let owner = sqlx::query_as::<_, Owner>(
            r#"
            SELECT o.id, o.first_name, o.last_name, o.gym, o.country_id
            FROM pokemon_owners po
            INNER JOIN owners o ON o.id = po.owner_id
            WHERE po.pokemon_id = ?
            ORDER BY o.id
            LIMIT 1
            "#,
        )
        .bind(pokemon_id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(owner)
    }

    /// Get all pokemons of an owner through the pokemon_owners junction
    #[instrument(skip(self), fields(owner_id = %owner_id))]
    pub async fn find_pokemons(&self, owner_id: &i32) -> Result<Vec<Pokemon>, Error> {
        debug!("Finding pokemons of owner");
        let pokemons = sqlx::query_as::<_, Pokemon>(
            r#"
            SELECT p.id, p.name, p.birth_date
            FROM pokemon_owners po
            INNER JOIN pokemons p ON p.id = po.pokemon_id
            WHERE po.owner_id = ?
            ORDER BY p.id
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.connection_pool)
        .await?;

        debug!("Found {} pokemons", pokemons.len());
        Ok(pokemons)
    }
}

impl Exists<i32> for OwnerRepository {
    async fn exists(&self, id: &i32) -> Result<bool, Error> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM owners WHERE id = ?")
            .bind(id)
            .fetch_one(&self.connection_pool)
            .await?;

        Ok(count > 0)
    }
}

impl Create<Owner, CreateOwnerDTO> for OwnerRepository {
    #[instrument(skip(self, data), fields(country_id = %data.country_id))]
    async fn create(&self, data: &CreateOwnerDTO) -> Result<Owner, Error> {
        debug!("Creating new owner");
        let result = sqlx::query(
            r#"
            INSERT INTO owners
                (first_name, last_name, gym, country_id, first_name_key, last_name_key, gym_key)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.gym)
        .bind(data.country_id)
        .bind(natural_key(&data.first_name))
        .bind(natural_key(&data.last_name))
        .bind(natural_key(&data.gym))
        .execute(&self.connection_pool)
        .await?;

        let new_id = row_id(result.last_insert_rowid())?;

        info!("Owner created with id {}", new_id);

        Ok(Owner {
            id: new_id,
            first_name: data.first_name.clone(),
            last_name: data.last_name.clone(),
            gym: data.gym.clone(),
            country_id: data.country_id,
        })
    }
}

impl Read<Owner, i32> for OwnerRepository {
    #[instrument(skip(self), fields(owner_id = %id))]
    async fn read(&self, id: &i32) -> Result<Option<Owner>, Error> {
        debug!("Reading owner by id");
        let owner = sqlx::query_as::<_, Owner>(
            "SELECT id, first_name, last_name, gym, country_id FROM owners WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(owner)
    }
}

impl ReadAll<Owner> for OwnerRepository {
    async fn read_all(&self) -> Result<Vec<Owner>, Error> {
        sqlx::query_as::<_, Owner>(
            "SELECT id, first_name, last_name, gym, country_id FROM owners ORDER BY id",
        )
        .fetch_all(&self.connection_pool)
        .await
    }
}

impl Update<UpdateOwnerDTO, i32> for OwnerRepository {
    #[instrument(skip(self, data), fields(owner_id = %id))]
    async fn update(&self, id: &i32, data: &UpdateOwnerDTO) -> Result<bool, Error> {
        debug!("Updating owner");
        let result = sqlx::query(
            r#"
            UPDATE owners
            SET first_name = ?, last_name = ?, gym = ?,
                first_name_key = ?, last_name_key = ?, gym_key = ?
            WHERE id = ?
            "#,
        )
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.gym)
        .bind(natural_key(&data.first_name))
        .bind(natural_key(&data.last_name))
        .bind(natural_key(&data.gym))
        .bind(id)
        .execute(&self.connection_pool)
        .await?;

        Ok(saved(&result))
    }
}

impl Delete<i32> for OwnerRepository {
    #[instrument(skip(self), fields(owner_id = %id))]
    async fn delete(&self, id: &i32) -> Result<bool, Error> {
        debug!("Deleting owner");
        let result = sqlx::query("DELETE FROM owners WHERE id = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        Ok(saved(&result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::SqlitePool;

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("countries")))]
    async fn test_create_then_read(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = OwnerRepository::new(pool);

        let created = repo
            .create(&CreateOwnerDTO {
                country_id: 3,
                first_name: "fn0".to_string(),
                last_name: "ln0".to_string(),
                gym: "g0".to_string(),
            })
            .await?;

        assert_eq!(repo.read(&created.id).await?, Some(created.clone()));
        assert_eq!(created.country_id, 3);

        Ok(())
    }

    /// Test: il paese deve esistere (foreign key)
    #[sqlx::test(fixtures(path = "../../fixtures", scripts("countries")))]
    async fn test_create_with_missing_country_fails(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = OwnerRepository::new(pool);

        let result = repo
            .create(&CreateOwnerDTO {
                country_id: 42,
                first_name: "No".to_string(),
                last_name: "Where".to_string(),
                gym: "Nowhere Gym".to_string(),
            })
            .await;

        match result {
            Err(Error::Database(db_err)) => assert!(db_err.is_foreign_key_violation()),
            other => panic!("expected foreign key violation, got {:?}", other),
        }
        assert!(repo.read_all().await?.is_empty());

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("countries", "owners")))]
    async fn test_find_by_natural_key(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = OwnerRepository::new(pool);

        let found = repo.find_by_natural_key(" ash", "KETCHUM ", "pallet gym").await?;
        assert_eq!(found.map(|o| o.id), Some(1));

        // stesso nome ma palestra diversa: non è un duplicato
        let other_gym = repo.find_by_natural_key("Ash", "Ketchum", "Viridian Gym").await?;
        assert!(other_gym.is_none());

        Ok(())
    }

    #[sqlx::test(fixtures(
        path = "../../fixtures",
        scripts("countries", "owners", "categories", "pokemons")
    ))]
    async fn test_find_pokemons_and_owner_of_pokemon(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = OwnerRepository::new(pool);

        let misty: Vec<i32> = repo.find_pokemons(&2).await?.into_iter().map(|p| p.id).collect();
        assert_eq!(misty, vec![2, 3]);

        // Falkner non ha pokemon
        assert!(repo.find_pokemons(&3).await?.is_empty());

        let owner = repo.find_by_pokemon(&1).await?;
        assert_eq!(owner.map(|o| o.first_name), Some("Ash".to_string()));

        assert!(repo.find_by_pokemon(&999).await?.is_none());

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("countries", "owners")))]
    async fn test_update_keeps_country(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = OwnerRepository::new(pool);

        let updated = repo
            .update(
                &3,
                &UpdateOwnerDTO {
                    first_name: "Falkner".to_string(),
                    last_name: "Hayabusa".to_string(),
                    gym: "Sky Gym".to_string(),
                },
            )
            .await?;
        assert!(updated);

        let owner = repo.read(&3).await?.expect("owner should exist");
        assert_eq!(owner.gym, "Sky Gym");
        assert_eq!(owner.country_id, 2);

        Ok(())
    }

    #[sqlx::test(fixtures(
        path = "../../fixtures",
        scripts("countries", "owners", "categories", "pokemons")
    ))]
    async fn test_delete_removes_only_that_row(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = OwnerRepository::new(pool);

        assert!(repo.delete(&1).await?);
        assert!(!repo.exists(&1).await?);
        assert!(repo.exists(&2).await?);
        assert!(repo.exists(&3).await?);

        // Pikachu non ha più un owner
        assert!(repo.find_by_pokemon(&1).await?.is_none());

        Ok(())
    }
}
