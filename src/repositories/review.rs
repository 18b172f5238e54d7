//! ReviewRepository - Repository per la gestione delle recensioni

use super::{Create, Delete, Exists, Read, ReadAll, Update, row_id, saved};
use crate::dtos::{CreateReviewDTO, UpdateReviewDTO};
use crate::entities::Review;
use sqlx::{Error, SqlitePool};
use tracing::{debug, info, instrument};

// REVIEW REPOSITORY
pub struct ReviewRepository {
    connection_pool: SqlitePool,
}

impl ReviewRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// Get all reviews written about a pokemon
    #[instrument(skip(self), fields(pokemon_id = %pokemon_id))]
    pub async fn find_many_by_pokemon_id(&self, pokemon_id: &i32) -> Result<Vec<Review>, Error> {
        debug!("Finding reviews of pokemon");
        let reviews = sqlx::query_as::<_, Review>(
            r#"
            SELECT id, title, text, rating, pokemon_id, reviewer_id
            FROM reviews
            WHERE pokemon_id = ?
            ORDER BY id
            "#,
        )
        .bind(pokemon_id)
        .fetch_all(&self.connection_pool)
        .await?;

        debug!("Found {} reviews", reviews.len());
        Ok(reviews)
    }
}

impl Exists<i32> for ReviewRepository {
    async fn exists(&self, id: &i32) -> Result<bool, Error> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM reviews WHERE id = ?")
            .bind(id)
            .fetch_one(&self.connection_pool)
            .await?;

        Ok(count > 0)
    }
}

impl Create<Review, CreateReviewDTO> for ReviewRepository {
    #[instrument(skip(self, data), fields(pokemon_id = %data.pokemon_id, reviewer_id = %data.reviewer_id))]
    async fn create(&self, data: &CreateReviewDTO) -> Result<Review, Error> {
        debug!("Creating new review");
        let result = sqlx::query(
            r#"
            INSERT INTO reviews (title, text, rating, pokemon_id, reviewer_id)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&data.title)
        .bind(&data.text)
        .bind(data.rating)
        .bind(data.pokemon_id)
        .bind(data.reviewer_id)
        .execute(&self.connection_pool)
        .await?;

        let new_id = row_id(result.last_insert_rowid())?;

        info!("Review created with id {}", new_id);

        Ok(Review {
            id: new_id,
            title: data.title.clone(),
            text: data.text.clone(),
            rating: data.rating,
            pokemon_id: data.pokemon_id,
            reviewer_id: data.reviewer_id,
        })
    }
}

impl Read<Review, i32> for ReviewRepository {
    #[instrument(skip(self), fields(review_id = %id))]
    async fn read(&self, id: &i32) -> Result<Option<Review>, Error> {
        debug!("Reading review by id");
        let review = sqlx::query_as::<_, Review>(
            r#"
            SELECT id, title, text, rating, pokemon_id, reviewer_id
            FROM reviews
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(review)
    }
}

impl ReadAll<Review> for ReviewRepository {
    async fn read_all(&self) -> Result<Vec<Review>, Error> {
        sqlx::query_as::<_, Review>(
            "SELECT id, title, text, rating, pokemon_id, reviewer_id FROM reviews ORDER BY id",
        )
        .fetch_all(&self.connection_pool)
        .await
    }
}

impl Update<UpdateReviewDTO, i32> for ReviewRepository {
    #[instrument(skip(self, data), fields(review_id = %id))]
    async fn update(&self, id: &i32, data: &UpdateReviewDTO) -> Result<bool, Error> {
        debug!("Updating review");
        let result = sqlx::query("UPDATE reviews SET title = ?, text = ?, rating = ? WHERE id = ?")
            .bind(&data.title)
            .bind(&data.text)
            .bind(data.rating)
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        Ok(saved(&result))
    }
}

impl Delete<i32> for ReviewRepository {
    #[instrument(skip(self), fields(review_id = %id))]
    async fn delete(&self, id: &i32) -> Result<bool, Error> {
        debug!("Deleting review");
        let result = sqlx::query("DELETE FROM reviews WHERE id = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        Ok(saved(&result))
    }
}
