//! Integration tests per gli endpoints dei pokemon
//!
//! Test per:
//! - GET/POST /pokemons
//! - GET/PUT/DELETE /pokemons/{pokemon_id}
//! - GET /pokemons/name/{name}
//! - GET /pokemons/{pokemon_id}/rating
//! - GET /pokemons/{pokemon_id}/categories

mod common;

#[cfg(test)]
mod pokemon_tests {
    use super::common::{count_rows, create_test_server};
    use serde_json::json;
    use sqlx::SqlitePool;

    // ============================================================
    // Letture
    // ============================================================

    #[sqlx::test(fixtures(
        path = "../fixtures",
        scripts("countries", "owners", "categories", "pokemons")
    ))]
    async fn test_list_pokemons(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(pool);

        let response = server.get("/pokemons").await;

        response.assert_status_ok();
        let pokemons: Vec<serde_json::Value> = response.json();
        let ids: Vec<i64> = pokemons.iter().map(|p| p["id"].as_i64().unwrap()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(pokemons[0]["name"], "Pikachu");
        assert_eq!(pokemons[0]["birth_date"], "1996-02-27T00:00:00Z");
        Ok(())
    }

    #[sqlx::test(fixtures(
        path = "../fixtures",
        scripts("countries", "owners", "categories", "pokemons")
    ))]
    async fn test_get_pokemon_by_id_and_name(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(pool);

        let by_id: serde_json::Value = server.get("/pokemons/2").await.json();
        assert_eq!(by_id["name"], "Squirtle");

        let response = server.get("/pokemons/name/Squirtle").await;
        response.assert_status_ok();
        let by_name: serde_json::Value = response.json();
        assert_eq!(by_name, by_id);

        server.get("/pokemons/999").await.assert_status_not_found();
        server
            .get("/pokemons/name/Mewtwo")
            .await
            .assert_status_not_found();
        Ok(())
    }

    #[sqlx::test(fixtures(
        path = "../fixtures",
        scripts("countries", "owners", "categories", "pokemons", "reviewers", "reviews")
    ))]
    async fn test_pokemon_rating_is_mean_of_reviews(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(pool);

        // Pikachu: [5, 5, 1]
        let response = server.get("/pokemons/1/rating").await;
        response.assert_status_ok();
        let rating: f64 = response.json();
        assert!((rating - 11.0 / 3.0).abs() < 1e-9);

        // Psyduck: nessuna recensione
        let rating: f64 = server.get("/pokemons/3/rating").await.json();
        assert_eq!(rating, 0.0);
        Ok(())
    }

    #[sqlx::test]
    async fn test_rating_of_missing_pokemon(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(pool);

        server
            .get("/pokemons/999/rating")
            .await
            .assert_status_not_found();
        Ok(())
    }

    #[sqlx::test(fixtures(
        path = "../fixtures",
        scripts("countries", "owners", "categories", "pokemons")
    ))]
    async fn test_get_categories_of_pokemon(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(pool);

        let response = server.get("/pokemons/1/categories").await;

        response.assert_status_ok();
        response.assert_json(&json!([{ "id": 1, "name": "Electric" }]));
        server
            .get("/pokemons/999/categories")
            .await
            .assert_status_not_found();
        Ok(())
    }

    // ============================================================
    // Creazione
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("countries", "owners")))]
    async fn test_create_pokemon_in_new_category(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(pool.clone());

        server
            .post("/categories")
            .json(&json!({ "name": "Electric" }))
            .await
            .assert_status_ok();
        let category: serde_json::Value = server.get("/categories/name/Electric").await.json();
        let category_id = category["id"].as_i64().unwrap();

        let response = server
            .post("/pokemons")
            .add_query_param("owner_id", 1)
            .add_query_param("category_id", category_id)
            .json(&json!({ "name": "Pikachu", "birth_date": "1996-02-27T00:00:00Z" }))
            .await;

        response.assert_status_ok();
        response.assert_text("Successfully Created");

        let pokemons: Vec<serde_json::Value> = server
            .get(&format!("/categories/{}/pokemons", category_id))
            .await
            .json();
        let pikachus = pokemons.iter().filter(|p| p["name"] == "Pikachu").count();
        assert_eq!(pikachus, 1);

        let owner: serde_json::Value = server.get("/owners/pokemon/1").await.json();
        assert_eq!(owner["first_name"], "Ash");
        assert_eq!(count_rows(&pool, "pokemon_owners").await, 1);
        assert_eq!(count_rows(&pool, "pokemon_categories").await, 1);
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("countries", "owners", "categories")))]
    async fn test_create_pokemon_missing_owner(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(pool.clone());

        let response = server
            .post("/pokemons")
            .add_query_param("owner_id", 999)
            .add_query_param("category_id", 1)
            .json(&json!({ "name": "Mew", "birth_date": "1996-02-27T00:00:00Z" }))
            .await;

        response.assert_status_unprocessable_entity();
        assert_eq!(count_rows(&pool, "pokemons").await, 0);
        assert_eq!(count_rows(&pool, "pokemon_owners").await, 0);
        assert_eq!(count_rows(&pool, "pokemon_categories").await, 0);
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("countries", "owners", "categories")))]
    async fn test_create_pokemon_missing_category(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(pool.clone());

        let response = server
            .post("/pokemons")
            .add_query_param("owner_id", 1)
            .add_query_param("category_id", 999)
            .json(&json!({ "name": "Mew", "birth_date": "1996-02-27T00:00:00Z" }))
            .await;

        response.assert_status_unprocessable_entity();
        assert_eq!(count_rows(&pool, "pokemons").await, 0);
        assert_eq!(count_rows(&pool, "pokemon_owners").await, 0);
        assert_eq!(count_rows(&pool, "pokemon_categories").await, 0);
        Ok(())
    }

    #[sqlx::test(fixtures(
        path = "../fixtures",
        scripts("countries", "owners", "categories", "pokemons")
    ))]
    async fn test_create_pokemon_duplicate_name(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(pool.clone());

        server
            .post("/pokemons")
            .add_query_param("owner_id", 1)
            .add_query_param("category_id", 1)
            .json(&json!({ "name": "PIKACHU ", "birth_date": "2000-01-01T00:00:00Z" }))
            .await
            .assert_status_unprocessable_entity();
        assert_eq!(count_rows(&pool, "pokemons").await, 3);
        assert_eq!(count_rows(&pool, "pokemon_owners").await, 3);
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("countries", "owners", "categories")))]
    async fn test_create_pokemon_invalid_name(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(pool.clone());

        server
            .post("/pokemons")
            .add_query_param("owner_id", 1)
            .add_query_param("category_id", 1)
            .json(&json!({ "name": "", "birth_date": "2000-01-01T00:00:00Z" }))
            .await
            .assert_status_bad_request();
        assert_eq!(count_rows(&pool, "pokemons").await, 0);
        Ok(())
    }

    // ============================================================
    // Aggiornamento ed eliminazione
    // ============================================================

    #[sqlx::test(fixtures(
        path = "../fixtures",
        scripts("countries", "owners", "categories", "pokemons")
    ))]
    async fn test_update_pokemon(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(pool);

        let response = server
            .put("/pokemons/3")
            .json(&json!({ "name": "Golduck", "birth_date": "1999-05-05T00:00:00Z" }))
            .await;

        response.assert_status_ok();
        response.assert_text("Successfully Updated");
        let pokemon: serde_json::Value = server.get("/pokemons/3").await.json();
        assert_eq!(pokemon["name"], "Golduck");
        assert_eq!(pokemon["birth_date"], "1999-05-05T00:00:00Z");

        server
            .put("/pokemons/3")
            .json(&json!({ "name": "Pikachu", "birth_date": "1999-05-05T00:00:00Z" }))
            .await
            .assert_status_unprocessable_entity();
        server
            .put("/pokemons/999")
            .json(&json!({ "name": "Ditto", "birth_date": "1999-05-05T00:00:00Z" }))
            .await
            .assert_status_not_found();
        Ok(())
    }

    #[sqlx::test(fixtures(
        path = "../fixtures",
        scripts("countries", "owners", "categories", "pokemons", "reviewers", "reviews")
    ))]
    async fn test_delete_pokemon_cascades(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(pool.clone());

        let response = server.delete("/pokemons/1").await;

        response.assert_status_ok();
        response.assert_text("Successfully Deleted");
        server.get("/pokemons/1").await.assert_status_not_found();

        assert_eq!(count_rows(&pool, "reviews").await, 1);
        assert_eq!(count_rows(&pool, "pokemon_owners").await, 2);
        assert_eq!(count_rows(&pool, "pokemon_categories").await, 2);
        assert_eq!(count_rows(&pool, "owners").await, 3);

        server.delete("/pokemons/1").await.assert_status_not_found();
        Ok(())
    }
}
