//! Pokemon services - Gestione pokemon

use super::{CREATED, DELETED, UPDATED};
use crate::core::{AppError, AppState};
use crate::dtos::{CategoryDTO, CreatePokemonDTO, PokemonCreateQuery, PokemonDTO, UpdatePokemonDTO};
use crate::repositories::{Create, Delete, Exists, Read, ReadAll, Update};
use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

#[instrument(skip(state))]
pub async fn list_pokemons(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PokemonDTO>>, AppError> {
    debug!("Listing pokemons");
    let pokemons = state.pokemon.read_all().await?;
    info!("Found {} pokemons", pokemons.len());
    Ok(Json(pokemons.into_iter().map(PokemonDTO::from).collect()))
}

#[instrument(skip(state), fields(pokemon_id = %pokemon_id))]
pub async fn get_pokemon(
    State(state): State<Arc<AppState>>,
    Path(pokemon_id): Path<i32>,
) -> Result<Json<PokemonDTO>, AppError> {
    debug!("Fetching pokemon by ID");
    let pokemon = state.pokemon.read(&pokemon_id).await?.ok_or_else(|| {
        warn!("Pokemon not found");
        AppError::not_found("Pokemon not found")
    })?;

    Ok(Json(PokemonDTO::from(pokemon)))
}

#[instrument(skip(state))]
pub async fn get_pokemon_by_name(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<PokemonDTO>, AppError> {
    debug!("Fetching pokemon by name");
    let pokemon = state.pokemon.find_by_name(&name).await?.ok_or_else(|| {
        warn!("Pokemon not found");
        AppError::not_found("Pokemon not found")
            .with_details(format!("Pokemon by name: {} does not exist", name))
    })?;

    Ok(Json(PokemonDTO::from(pokemon)))
}

#[instrument(skip(state), fields(pokemon_id = %pokemon_id))]
pub async fn get_pokemon_rating(
    State(state): State<Arc<AppState>>,
    Path(pokemon_id): Path<i32>,
) -> Result<Json<f64>, AppError> {
    debug!("Fetching pokemon rating");
    if !state.pokemon.exists(&pokemon_id).await? {
        warn!("Pokemon not found");
        return Err(AppError::not_found("Pokemon not found"));
    }

    let rating = state.pokemon.rating(&pokemon_id).await?;
    info!("Pokemon rating is {}", rating);
    Ok(Json(rating))
}

#[instrument(skip(state), fields(pokemon_id = %pokemon_id))]
pub async fn get_categories_of_pokemon(
    State(state): State<Arc<AppState>>,
    Path(pokemon_id): Path<i32>,
) -> Result<Json<Vec<CategoryDTO>>, AppError> {
    debug!("Listing categories of pokemon");
    if !state.pokemon.exists(&pokemon_id).await? {
        warn!("Pokemon not found");
        return Err(AppError::not_found("Pokemon not found"));
    }

    let categories = state.pokemon.find_categories(&pokemon_id).await?;
    Ok(Json(categories.into_iter().map(CategoryDTO::from).collect()))
}

#[instrument(skip(state, body), fields(owner_id = %params.owner_id, category_id = %params.category_id))]
pub async fn create_pokemon(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PokemonCreateQuery>, // query params /pokemons?owner_id=1&category_id=2
    Json(body): Json<PokemonDTO>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Creating pokemon");
    // 1. Validare il DTO
    // 2. Owner e categoria devono esistere PRIMA di scrivere qualsiasi riga
    // 3. Rifiutare id già esistente e nome duplicato
    // 4. Inserire pokemon + righe di giunzione in un'unica transazione
    body.validate()?;

    if !state.owner.exists(&params.owner_id).await? {
        warn!("Owner does not exist");
        return Err(AppError::unprocessable_entity("Owner does not exist")
            .with_details(format!("Owner by id: {} does not exist", params.owner_id)));
    }

    if !state.category.exists(&params.category_id).await? {
        warn!("Category does not exist");
        return Err(AppError::unprocessable_entity("Category does not exist").with_details(
            format!("Category by id: {} does not exist", params.category_id),
        ));
    }

    if let Some(id) = body.id {
        if state.pokemon.exists(&id).await? {
            warn!("Pokemon id {} already exists", id);
            return Err(AppError::unprocessable_entity("Pokemon already exists")
                .with_details(format!("Pokemon by id: {} already exists", id)));
        }
    }

    if state.pokemon.find_by_natural_key(&body.name).await?.is_some() {
        warn!("Duplicate pokemon name");
        return Err(AppError::unprocessable_entity("Pokemon already exists")
            .with_details(format!("Pokemon by name: {} already exists", body.name)));
    }

    state
        .pokemon
        .create(&CreatePokemonDTO::new(params.owner_id, params.category_id, body))
        .await
        .map_err(|err| match err {
            // owner o categoria eliminati tra il controllo e la transazione
            sqlx::Error::RowNotFound => {
                AppError::unprocessable_entity("Owner or category does not exist")
            }
            other => AppError::from(other),
        })?;

    info!("Pokemon created");
    Ok((StatusCode::OK, CREATED))
}

#[instrument(skip(state, body), fields(pokemon_id = %pokemon_id))]
pub async fn update_pokemon(
    State(state): State<Arc<AppState>>,
    Path(pokemon_id): Path<i32>,
    Json(body): Json<PokemonDTO>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Updating pokemon");
    body.validate()?;

    if !state.pokemon.exists(&pokemon_id).await? {
        warn!("Pokemon not found");
        return Err(AppError::not_found("Pokemon not found"));
    }

    let duplicate = state
        .pokemon
        .find_by_natural_key(&body.name)
        .await?
        .filter(|other| other.id != pokemon_id);
    if duplicate.is_some() {
        warn!("Duplicate pokemon name");
        return Err(AppError::unprocessable_entity("Pokemon already exists")
            .with_details(format!("Pokemon by name: {} already exists", body.name)));
    }

    if !state
        .pokemon
        .update(&pokemon_id, &UpdatePokemonDTO::from(body))
        .await?
    {
        return Err(AppError::internal_server_error(
            "Something went wrong during updating process",
        ));
    }

    info!("Pokemon updated");
    Ok((StatusCode::OK, UPDATED))
}

#[instrument(skip(state), fields(pokemon_id = %pokemon_id))]
pub async fn delete_pokemon(
    State(state): State<Arc<AppState>>,
    Path(pokemon_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Deleting pokemon");
    if !state.pokemon.exists(&pokemon_id).await? {
        warn!("Pokemon not found");
        return Err(AppError::not_found("Pokemon not found"));
    }

    // recensioni e giunzioni vengono eliminate in cascata
    if !state.pokemon.delete(&pokemon_id).await? {
        return Err(AppError::internal_server_error(
            "Something went wrong during deleting process",
        ));
    }

    info!("Pokemon deleted");
    Ok((StatusCode::OK, DELETED))
}
