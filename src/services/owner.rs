//! Owner services - Gestione owner

use super::{CREATED, DELETED, UPDATED};
use crate::core::{AppError, AppState};
use crate::dtos::{CreateOwnerDTO, OwnerCreateQuery, OwnerDTO, PokemonDTO, UpdateOwnerDTO};
use crate::repositories::{Create, Delete, Exists, Read, ReadAll, Update};
use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

fn duplicate_owner(body: &OwnerDTO) -> AppError {
    AppError::unprocessable_entity("Owner already exists").with_details(format!(
        "Owner by name: {} {} ({}) already exists",
        body.first_name, body.last_name, body.gym
    ))
}

#[instrument(skip(state))]
pub async fn list_owners(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<OwnerDTO>>, AppError> {
    debug!("Listing owners");
    let owners = state.owner.read_all().await?;
    info!("Found {} owners", owners.len());
    Ok(Json(owners.into_iter().map(OwnerDTO::from).collect()))
}

#[instrument(skip(state), fields(owner_id = %owner_id))]
pub async fn get_owner(
    State(state): State<Arc<AppState>>,
    Path(owner_id): Path<i32>,
) -> Result<Json<OwnerDTO>, AppError> {
    debug!("Fetching owner by ID");
    let owner = state.owner.read(&owner_id).await?.ok_or_else(|| {
        warn!("Owner not found");
        AppError::not_found("Owner not found")
    })?;

    Ok(Json(OwnerDTO::from(owner)))
}

#[instrument(skip(state), fields(pokemon_id = %pokemon_id))]
pub async fn get_owner_of_pokemon(
    State(state): State<Arc<AppState>>,
    Path(pokemon_id): Path<i32>,
) -> Result<Json<OwnerDTO>, AppError> {
    debug!("Fetching owner of pokemon");
    let owner = state.owner.find_by_pokemon(&pokemon_id).await?.ok_or_else(|| {
        warn!("No owner found for pokemon");
        AppError::not_found("Owner not found")
    })?;

    Ok(Json(OwnerDTO::from(owner)))
}

#[instrument(skip(state), fields(owner_id = %owner_id))]
pub async fn get_pokemons_of_owner(
    State(state): State<Arc<AppState>>,
    Path(owner_id): Path<i32>,
) -> Result<Json<Vec<PokemonDTO>>, AppError> {
    debug!("Listing pokemons of owner");
    if !state.owner.exists(&owner_id).await? {
        warn!("Owner not found");
        return Err(AppError::not_found("Owner not found"));
    }

    let pokemons = state.owner.find_pokemons(&owner_id).await?;
    info!("Found {} pokemons of owner", pokemons.len());
    Ok(Json(pokemons.into_iter().map(PokemonDTO::from).collect()))
}

#[instrument(skip(state, body), fields(country_id = %params.country_id))]
pub async fn create_owner(
    State(state): State<Arc<AppState>>,
    Query(params): Query<OwnerCreateQuery>, // query params /owners?country_id=1
    Json(body): Json<OwnerDTO>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Creating owner");
    // 1. Validare il DTO
    // 2. Rifiutare un id già esistente nel body
    // 3. Controllare il duplicato su (nome, cognome, palestra)
    // 4. Il paese indicato nella query deve esistere
    // 5. Inserire l'owner collegato al paese
    body.validate()?;

    if let Some(id) = body.id {
        if state.owner.exists(&id).await? {
            warn!("Owner id {} already exists", id);
            return Err(AppError::unprocessable_entity("Owner already exists")
                .with_details(format!("Owner by id: {} already exists", id)));
        }
    }

    if state
        .owner
        .find_by_natural_key(&body.first_name, &body.last_name, &body.gym)
        .await?
        .is_some()
    {
        warn!("Duplicate owner");
        return Err(duplicate_owner(&body));
    }

    if !state.country.exists(&params.country_id).await? {
        warn!("Country does not exist");
        return Err(AppError::unprocessable_entity("Country does not exist").with_details(
            format!("Country by id: {} does not exist", params.country_id),
        ));
    }

    state
        .owner
        .create(&CreateOwnerDTO::new(params.country_id, body))
        .await?;

    info!("Owner created");
    Ok((StatusCode::OK, CREATED))
}

#[instrument(skip(state, body), fields(owner_id = %owner_id))]
pub async fn update_owner(
    State(state): State<Arc<AppState>>,
    Path(owner_id): Path<i32>,
    Json(body): Json<OwnerDTO>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Updating owner");
    body.validate()?;

    if !state.owner.exists(&owner_id).await? {
        warn!("Owner not found");
        return Err(AppError::not_found("Owner not found"));
    }

    let duplicate = state
        .owner
        .find_by_natural_key(&body.first_name, &body.last_name, &body.gym)
        .await?
        .filter(|other| other.id != owner_id);
    if duplicate.is_some() {
        warn!("Duplicate owner");
        return Err(duplicate_owner(&body));
    }

    if !state
        .owner
        .update(&owner_id, &UpdateOwnerDTO::from(body))
        .await?
    {
        return Err(AppError::internal_server_error(
            "Something went wrong during updating process",
        ));
    }

    info!("Owner updated");
    Ok((StatusCode::OK, UPDATED))
}

#[instrument(skip(state), fields(owner_id = %owner_id))]
pub async fn delete_owner(
    State(state): State<Arc<AppState>>,
    Path(owner_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Deleting owner");
    if !state.owner.exists(&owner_id).await? {
        warn!("Owner not found");
        return Err(AppError::not_found("Owner not found"));
    }

    if !state.owner.delete(&owner_id).await? {
        return Err(AppError::internal_server_error(
            "Something went wrong during deleting process",
        ));
    }

    info!("Owner deleted");
    Ok((StatusCode::OK, DELETED))
}
