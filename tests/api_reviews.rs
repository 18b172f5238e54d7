//! Integration tests per gli endpoints delle recensioni

mod common;

#[cfg(test)]
mod review_tests {
    use super::common::{count_rows, create_test_server};
    use serde_json::json;
    use sqlx::SqlitePool;

    #[sqlx::test(fixtures(
        path = "../fixtures",
        scripts("countries", "owners", "categories", "pokemons", "reviewers", "reviews")
    ))]
    async fn test_list_and_get_reviews(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(pool);

        let reviews: Vec<serde_json::Value> = server.get("/reviews").await.json();
        assert_eq!(reviews.len(), 4);

        let response = server.get("/reviews/4").await;
        response.assert_status_ok();
        response.assert_json(&json!({
            "id": 4,
            "title": "Squirtle",
            "text": "Solid starter",
            "rating": 4
        }));

        server.get("/reviews/999").await.assert_status_not_found();
        Ok(())
    }

    #[sqlx::test(fixtures(
        path = "../fixtures",
        scripts("countries", "owners", "categories", "pokemons", "reviewers", "reviews")
    ))]
    async fn test_get_reviews_of_pokemon(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(pool);

        let response = server.get("/reviews/pokemon/1").await;
        response.assert_status_ok();
        let reviews: Vec<serde_json::Value> = response.json();
        let ratings: Vec<i64> = reviews.iter().map(|r| r["rating"].as_i64().unwrap()).collect();
        assert_eq!(ratings, vec![5, 5, 1]);

        // pokemon esistente senza recensioni
        let reviews: Vec<serde_json::Value> = server.get("/reviews/pokemon/3").await.json();
        assert!(reviews.is_empty());

        server
            .get("/reviews/pokemon/999")
            .await
            .assert_status_not_found();
        Ok(())
    }

    #[sqlx::test(fixtures(
        path = "../fixtures",
        scripts("countries", "owners", "categories", "pokemons", "reviewers")
    ))]
    async fn test_create_review_updates_rating(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(pool);

        let response = server
            .post("/reviews")
            .add_query_param("reviewer_id", 4)
            .add_query_param("pokemon_id", 3)
            .json(&json!({ "title": "Psyduck", "text": "Always confused", "rating": 3 }))
            .await;

        response.assert_status_ok();
        response.assert_text("Successfully Created");

        let rating: f64 = server.get("/pokemons/3/rating").await.json();
        assert_eq!(rating, 3.0);

        let reviews: Vec<serde_json::Value> = server.get("/reviewers/4/reviews").await.json();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0]["text"], "Always confused");
        Ok(())
    }

    #[sqlx::test(fixtures(
        path = "../fixtures",
        scripts("countries", "owners", "categories", "pokemons", "reviewers")
    ))]
    async fn test_create_review_missing_references(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(pool.clone());
        let body = json!({ "title": "Ghost", "text": "Nobody wrote this", "rating": 2 });

        server
            .post("/reviews")
            .add_query_param("reviewer_id", 1)
            .add_query_param("pokemon_id", 999)
            .json(&body)
            .await
            .assert_status_unprocessable_entity();
        server
            .post("/reviews")
            .add_query_param("reviewer_id", 999)
            .add_query_param("pokemon_id", 1)
            .json(&body)
            .await
            .assert_status_unprocessable_entity();

        assert_eq!(count_rows(&pool, "reviews").await, 0);
        Ok(())
    }

    #[sqlx::test(fixtures(
        path = "../fixtures",
        scripts("countries", "owners", "categories", "pokemons", "reviewers")
    ))]
    async fn test_create_review_rating_out_of_range(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(pool.clone());

        for rating in [0, 6] {
            server
                .post("/reviews")
                .add_query_param("reviewer_id", 1)
                .add_query_param("pokemon_id", 1)
                .json(&json!({ "title": "Bad", "text": "Out of range", "rating": rating }))
                .await
                .assert_status_bad_request();
        }

        assert_eq!(count_rows(&pool, "reviews").await, 0);
        Ok(())
    }

    #[sqlx::test(fixtures(
        path = "../fixtures",
        scripts("countries", "owners", "categories", "pokemons", "reviewers", "reviews")
    ))]
    async fn test_update_review(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(pool);

        let response = server
            .put("/reviews/3")
            .json(&json!({ "title": "Pikachu", "text": "Changed my mind", "rating": 4 }))
            .await;

        response.assert_status_ok();
        response.assert_text("Successfully Updated");

        // [5, 5, 4]
        let rating: f64 = server.get("/pokemons/1/rating").await.json();
        assert!((rating - 14.0 / 3.0).abs() < 1e-9);

        server
            .put("/reviews/999")
            .json(&json!({ "title": "None", "text": "Missing", "rating": 4 }))
            .await
            .assert_status_not_found();
        Ok(())
    }

    #[sqlx::test(fixtures(
        path = "../fixtures",
        scripts("countries", "owners", "categories", "pokemons", "reviewers", "reviews")
    ))]
    async fn test_delete_review(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(pool.clone());

        let response = server.delete("/reviews/4").await;

        response.assert_status_ok();
        response.assert_text("Successfully Deleted");
        server.get("/reviews/4").await.assert_status_not_found();

        let rating: f64 = server.get("/pokemons/2/rating").await.json();
        assert_eq!(rating, 0.0);

        server.delete("/reviews/4").await.assert_status_not_found();
        assert_eq!(count_rows(&pool, "reviews").await, 3);
        Ok(())
    }
}
