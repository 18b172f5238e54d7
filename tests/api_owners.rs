//! Integration tests per gli endpoints degli owner

mod common;

#[cfg(test)]
mod owner_tests {
    use super::common::{count_rows, create_test_server};
    use serde_json::json;
    use sqlx::SqlitePool;

    #[sqlx::test(fixtures(path = "../fixtures", scripts("countries", "owners")))]
    async fn test_list_owners(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(pool);

        let response = server.get("/owners").await;

        response.assert_status_ok();
        let owners: Vec<serde_json::Value> = response.json();
        assert_eq!(owners.len(), 3);
        assert_eq!(
            owners[0],
            json!({ "id": 1, "first_name": "Ash", "last_name": "Ketchum", "gym": "Pallet Gym" })
        );
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("countries", "owners")))]
    async fn test_get_owner_not_found(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(pool);

        server.get("/owners/999").await.assert_status_not_found();
        Ok(())
    }

    #[sqlx::test(fixtures(
        path = "../fixtures",
        scripts("countries", "owners", "categories", "pokemons")
    ))]
    async fn test_get_pokemons_of_owner(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(pool);

        let response = server.get("/owners/2/pokemons").await;

        response.assert_status_ok();
        let pokemons: Vec<serde_json::Value> = response.json();
        let names: Vec<&str> = pokemons
            .iter()
            .map(|p| p["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Squirtle", "Psyduck"]);

        server
            .get("/owners/999/pokemons")
            .await
            .assert_status_not_found();
        Ok(())
    }

    #[sqlx::test(fixtures(
        path = "../fixtures",
        scripts("countries", "owners", "categories", "pokemons")
    ))]
    async fn test_get_owner_of_pokemon(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(pool);

        let response = server.get("/owners/pokemon/1").await;

        response.assert_status_ok();
        let owner: serde_json::Value = response.json();
        assert_eq!(owner["first_name"], "Ash");

        server
            .get("/owners/pokemon/999")
            .await
            .assert_status_not_found();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("countries")))]
    async fn test_create_owner_success(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(pool.clone());

        let response = server
            .post("/owners")
            .add_query_param("country_id", 3)
            .json(&json!({ "first_name": "Brock", "last_name": "Harrison", "gym": "Pewter Gym" }))
            .await;

        response.assert_status_ok();
        response.assert_text("Successfully Created");

        let owners: Vec<serde_json::Value> = server.get("/countries/3/owners").await.json();
        assert_eq!(owners.len(), 1);
        assert_eq!(owners[0]["first_name"], "Brock");
        assert_eq!(count_rows(&pool, "owners").await, 1);
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("countries", "owners")))]
    async fn test_create_owner_duplicate(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(pool.clone());

        let response = server
            .post("/owners")
            .add_query_param("country_id", 2)
            .json(&json!({ "first_name": "ash", "last_name": " Ketchum", "gym": "PALLET GYM" }))
            .await;

        response.assert_status_unprocessable_entity();
        assert_eq!(count_rows(&pool, "owners").await, 3);
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("countries", "owners")))]
    async fn test_create_owner_same_name_other_gym(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(pool.clone());

        server
            .post("/owners")
            .add_query_param("country_id", 1)
            .json(&json!({ "first_name": "Ash", "last_name": "Ketchum", "gym": "Viridian Gym" }))
            .await
            .assert_status_ok();
        assert_eq!(count_rows(&pool, "owners").await, 4);
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("countries")))]
    async fn test_create_owner_missing_country(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(pool.clone());

        let response = server
            .post("/owners")
            .add_query_param("country_id", 999)
            .json(&json!({ "first_name": "Brock", "last_name": "Harrison", "gym": "Pewter Gym" }))
            .await;

        response.assert_status_unprocessable_entity();
        assert_eq!(count_rows(&pool, "owners").await, 0);
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("countries")))]
    async fn test_create_owner_invalid_body(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(pool.clone());

        server
            .post("/owners")
            .add_query_param("country_id", 1)
            .json(&json!({ "first_name": "", "last_name": "Harrison", "gym": "Pewter Gym" }))
            .await
            .assert_status_bad_request();
        assert_eq!(count_rows(&pool, "owners").await, 0);
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("countries", "owners")))]
    async fn test_update_owner_keeps_country(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(pool);

        let response = server
            .put("/owners/3")
            .json(&json!({ "first_name": "Falkner", "last_name": "Hayabusa", "gym": "Sky Gym" }))
            .await;

        response.assert_status_ok();
        response.assert_text("Successfully Updated");

        let owner: serde_json::Value = server.get("/owners/3").await.json();
        assert_eq!(owner["gym"], "Sky Gym");
        let country: serde_json::Value = server.get("/countries/owner/3").await.json();
        assert_eq!(country["name"], "Johto");
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("countries", "owners")))]
    async fn test_update_owner_errors(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(pool);

        server
            .put("/owners/999")
            .json(&json!({ "first_name": "Nobody", "last_name": "Here", "gym": "None" }))
            .await
            .assert_status_not_found();

        // stessa chiave naturale di Ash
        server
            .put("/owners/2")
            .json(&json!({ "first_name": "Ash", "last_name": "Ketchum", "gym": "Pallet Gym" }))
            .await
            .assert_status_unprocessable_entity();
        Ok(())
    }

    #[sqlx::test(fixtures(
        path = "../fixtures",
        scripts("countries", "owners", "categories", "pokemons")
    ))]
    async fn test_delete_owner(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(pool.clone());

        let response = server.delete("/owners/1").await;

        response.assert_status_ok();
        response.assert_text("Successfully Deleted");
        server.get("/owners/1").await.assert_status_not_found();
        server
            .get("/owners/pokemon/1")
            .await
            .assert_status_not_found();
        assert_eq!(count_rows(&pool, "pokemon_owners").await, 2);

        server.delete("/owners/1").await.assert_status_not_found();
        Ok(())
    }
}
