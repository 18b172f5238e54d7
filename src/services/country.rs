//! Country services - Gestione paesi

use super::{CREATED, DELETED, UPDATED};
use crate::core::{AppError, AppState};
use crate::dtos::{CountryDTO, CreateCountryDTO, OwnerDTO, UpdateCountryDTO};
use crate::repositories::{Create, Delete, Exists, Read, ReadAll, Update};
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

#[instrument(skip(state))]
pub async fn list_countries(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CountryDTO>>, AppError> {
    debug!("Listing countries");
    let countries = state.country.read_all().await?;
    info!("Found {} countries", countries.len());
    Ok(Json(countries.into_iter().map(CountryDTO::from).collect()))
}

#[instrument(skip(state), fields(country_id = %country_id))]
pub async fn get_country(
    State(state): State<Arc<AppState>>,
    Path(country_id): Path<i32>,
) -> Result<Json<CountryDTO>, AppError> {
    debug!("Fetching country by ID");
    let country = state.country.read(&country_id).await?.ok_or_else(|| {
        warn!("Country not found");
        AppError::not_found("Country not found")
    })?;

    Ok(Json(CountryDTO::from(country)))
}

#[instrument(skip(state), fields(country_id = %country_id))]
pub async fn get_owners_of_country(
    State(state): State<Arc<AppState>>,
    Path(country_id): Path<i32>,
) -> Result<Json<Vec<OwnerDTO>>, AppError> {
    debug!("Listing owners of country");
    if !state.country.exists(&country_id).await? {
        warn!("Country not found");
        return Err(AppError::not_found("Country not found"));
    }

    let owners = state.country.find_owners(&country_id).await?;
    info!("Found {} owners in country", owners.len());
    Ok(Json(owners.into_iter().map(OwnerDTO::from).collect()))
}

#[instrument(skip(state), fields(owner_id = %owner_id))]
pub async fn get_country_of_owner(
    State(state): State<Arc<AppState>>,
    Path(owner_id): Path<i32>,
) -> Result<Json<CountryDTO>, AppError> {
    debug!("Fetching country of owner");
    let country = state.country.find_by_owner(&owner_id).await?.ok_or_else(|| {
        warn!("No country found for owner");
        AppError::not_found("Country not found")
    })?;

    Ok(Json(CountryDTO::from(country)))
}

#[instrument(skip(state, body), fields(name = %body.name))]
pub async fn create_country(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CountryDTO>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Creating country");
    body.validate()?;

    if let Some(id) = body.id {
        if state.country.exists(&id).await? {
            warn!("Country id {} already exists", id);
            return Err(AppError::unprocessable_entity("Country already exists")
                .with_details(format!("Country by id: {} already exists", id)));
        }
    }

    if state.country.find_by_natural_key(&body.name).await?.is_some() {
        warn!("Duplicate country name");
        return Err(AppError::unprocessable_entity("Country already exists")
            .with_details(format!("Country by name: {} already exists", body.name)));
    }

    state.country.create(&CreateCountryDTO::from(body)).await?;

    info!("Country created");
    Ok((StatusCode::OK, CREATED))
}

#[instrument(skip(state, body), fields(country_id = %country_id))]
pub async fn update_country(
    State(state): State<Arc<AppState>>,
    Path(country_id): Path<i32>, // l'id arriva sempre dal path, mai dal body
    Json(body): Json<CountryDTO>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Updating country");
    body.validate()?;

    if !state.country.exists(&country_id).await? {
        warn!("Country not found");
        return Err(AppError::not_found("Country not found"));
    }

    let duplicate = state
        .country
        .find_by_natural_key(&body.name)
        .await?
        .filter(|other| other.id != country_id);
    if duplicate.is_some() {
        warn!("Duplicate country name");
        return Err(AppError::unprocessable_entity("Country already exists")
            .with_details(format!("Country by name: {} already exists", body.name)));
    }

    if !state
        .country
        .update(&country_id, &UpdateCountryDTO::from(body))
        .await?
    {
        return Err(AppError::internal_server_error(
            "Something went wrong during updating process",
        ));
    }

    info!("Country updated");
    Ok((StatusCode::OK, UPDATED))
}

#[instrument(skip(state), fields(country_id = %country_id))]
pub async fn delete_country(
    State(state): State<Arc<AppState>>,
    Path(country_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Deleting country");
    if !state.country.exists(&country_id).await? {
        warn!("Country not found");
        return Err(AppError::not_found("Country not found"));
    }

    // gli owner devono essere spostati o eliminati prima
    let owners = state.country.find_owners(&country_id).await?;
    if !owners.is_empty() {
        warn!("Country still has {} owners", owners.len());
        return Err(AppError::unprocessable_entity("Country still has owners")
            .with_details(format!("Country by id: {} has {} owners", country_id, owners.len())));
    }

    if !state.country.delete(&country_id).await? {
        return Err(AppError::internal_server_error(
            "Something went wrong during deleting process",
        ));
    }

    info!("Country deleted");
    Ok((StatusCode::OK, DELETED))
}
