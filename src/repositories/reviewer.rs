//! ReviewerRepository - Repository per la gestione dei recensori

use super::{Create, Delete, Exists, Read, ReadAll, Update, natural_key, row_id, saved};
use crate::dtos::{CreateReviewerDTO, UpdateReviewerDTO};
use crate::entities::{Review, Reviewer};
use sqlx::{Error, SqlitePool};
use tracing::{debug, info, instrument};

// REVIEWER REPOSITORY
pub struct ReviewerRepository {
    connection_pool: SqlitePool,
}

impl ReviewerRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// Find reviewer by (first name, last name) ignoring case and surrounding whitespace
    #[instrument(skip(self))]
    pub async fn find_by_natural_key(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Reviewer>, Error> {
        let reviewer = sqlx::query_as::<_, Reviewer>(
            r#"
            SELECT id, first_name, last_name
            FROM reviewers
            WHERE first_name_key = ?
            AND last_name_key = ?
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(natural_key(first_name))
        .bind(natural_key(last_name))
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(reviewer)
    }

    /// Get all reviews written by a reviewer
    #[instrument(skip(self), fields(reviewer_id = %reviewer_id))]
    pub async fn find_reviews(&self, reviewer_id: &i32) -> Result<Vec<Review>, Error> {
        debug!("Finding reviews of reviewer");
        let reviews = sqlx::query_as::<_, Review>(
            r#"
            SELECT id, title, text, rating, pokemon_id, reviewer_id
            FROM reviews
            WHERE reviewer_id = ?
            ORDER BY id
            "#,
        )
        .bind(reviewer_id)
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(reviews)
    }
}

impl Exists<i32> for ReviewerRepository {
    async fn exists(&self, id: &i32) -> Result<bool, Error> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM reviewers WHERE id = ?")
            .bind(id)
            .fetch_one(&self.connection_pool)
            .await?;

        Ok(count > 0)
    }
}

impl Create<Reviewer, CreateReviewerDTO> for ReviewerRepository {
    #[instrument(skip(self, data))]
    async fn create(&self, data: &CreateReviewerDTO) -> Result<Reviewer, Error> {
        debug!("Creating new reviewer");
        let result = sqlx::query(
            r#"
            INSERT INTO reviewers (first_name, last_name, first_name_key, last_name_key)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(natural_key(&data.first_name))
        .bind(natural_key(&data.last_name))
        .execute(&self.connection_pool)
        .await?;

        let new_id = row_id(result.last_insert_rowid())?;

        info!("Reviewer created with id {}", new_id);

        Ok(Reviewer {
            id: new_id,
            first_name: data.first_name.clone(),
            last_name: data.last_name.clone(),
        })
    }
}

impl Read<Reviewer, i32> for ReviewerRepository {
    #[instrument(skip(self), fields(reviewer_id = %id))]
    async fn read(&self, id: &i32) -> Result<Option<Reviewer>, Error> {
        debug!("Reading reviewer by id");
        let reviewer = sqlx::query_as::<_, Reviewer>(
            "SELECT id, first_name, last_name FROM reviewers WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(reviewer)
    }
}

impl ReadAll<Reviewer> for ReviewerRepository {
    async fn read_all(&self) -> Result<Vec<Reviewer>, Error> {
        sqlx::query_as::<_, Reviewer>("SELECT id, first_name, last_name FROM reviewers ORDER BY id")
            .fetch_all(&self.connection_pool)
            .await
    }
}

impl Update<UpdateReviewerDTO, i32> for ReviewerRepository {
    #[instrument(skip(self, data), fields(reviewer_id = %id))]
    async fn update(&self, id: &i32, data: &UpdateReviewerDTO) -> Result<bool, Error> {
        debug!("Updating reviewer");
        let result = sqlx::query(
            r#"
            UPDATE reviewers
            SET first_name = ?, last_name = ?, first_name_key = ?, last_name_key = ?
            WHERE id = ?
            "#,
        )
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(natural_key(&data.first_name))
        .bind(natural_key(&data.last_name))
        .bind(id)
        .execute(&self.connection_pool)
        .await?;

        Ok(saved(&result))
    }
}

impl Delete<i32> for ReviewerRepository {
    #[instrument(skip(self), fields(reviewer_id = %id))]
    async fn delete(&self, id: &i32) -> Result<bool, Error> {
        debug!("Deleting reviewer");
        // le sue recensioni vengono eliminate da ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM reviewers WHERE id = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        Ok(saved(&result))
    }
}
