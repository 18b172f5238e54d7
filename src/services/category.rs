//! Category services - Gestione categorie

use super::{CREATED, DELETED, UPDATED};
use crate::core::{AppError, AppState};
use crate::dtos::{CategoryDTO, CreateCategoryDTO, PokemonDTO, UpdateCategoryDTO};
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
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CategoryDTO>>, AppError> {
    debug!("Listing categories");
    let categories = state.category.read_all().await?;
    info!("Found {} categories", categories.len());
    Ok(Json(categories.into_iter().map(CategoryDTO::from).collect()))
}

#[instrument(skip(state), fields(category_id = %category_id))]
pub async fn get_category(
    State(state): State<Arc<AppState>>,
    Path(category_id): Path<i32>, // parametro dalla URL /categories/{category_id}
) -> Result<Json<CategoryDTO>, AppError> {
    debug!("Fetching category by ID");
    let category = state.category.read(&category_id).await?.ok_or_else(|| {
        warn!("Category not found");
        AppError::not_found("Category not found")
    })?;

    Ok(Json(CategoryDTO::from(category)))
}

#[instrument(skip(state))]
pub async fn get_category_by_name(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<CategoryDTO>, AppError> {
    debug!("Fetching category by name");
    let category = state.category.find_by_name(&name).await?.ok_or_else(|| {
        warn!("Category not found");
        AppError::not_found("Category not found")
            .with_details(format!("Category by name: {} does not exist", name))
    })?;

    Ok(Json(CategoryDTO::from(category)))
}

#[instrument(skip(state), fields(category_id = %category_id))]
pub async fn get_pokemons_of_category(
    State(state): State<Arc<AppState>>,
    Path(category_id): Path<i32>,
) -> Result<Json<Vec<PokemonDTO>>, AppError> {
    debug!("Listing pokemons of category");
    if !state.category.exists(&category_id).await? {
        warn!("Category not found");
        return Err(AppError::not_found("Category not found"));
    }

    let pokemons = state.category.find_pokemons(&category_id).await?;
    info!("Found {} pokemons in category", pokemons.len());
    Ok(Json(pokemons.into_iter().map(PokemonDTO::from).collect()))
}

#[instrument(skip(state, body), fields(name = %body.name))]
pub async fn create_category(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CategoryDTO>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Creating category");
    // 1. Validare il DTO
    // 2. Un id già esistente nel body non è accettato (l'id lo assegna il database)
    // 3. Controllare che non esista già una categoria con lo stesso nome (trim + case-insensitive)
    // 4. Inserire la categoria e ritornare il messaggio di conferma
    body.validate()?;

    if let Some(id) = body.id {
        if state.category.exists(&id).await? {
            warn!("Category id {} already exists", id);
            return Err(AppError::unprocessable_entity("Category already exists")
                .with_details(format!("Category by id: {} already exists", id)));
        }
    }

    if state.category.find_by_natural_key(&body.name).await?.is_some() {
        warn!("Duplicate category name");
        return Err(AppError::unprocessable_entity("Category already exists")
            .with_details(format!("Category by name: {} already exists", body.name)));
    }

    state.category.create(&CreateCategoryDTO::from(body)).await?;

    info!("Category created");
    Ok((StatusCode::OK, CREATED))
}

#[instrument(skip(state, body), fields(category_id = %category_id))]
pub async fn update_category(
    State(state): State<Arc<AppState>>,
    Path(category_id): Path<i32>,
    Json(body): Json<CategoryDTO>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Updating category");
    body.validate()?;

    if !state.category.exists(&category_id).await? {
        warn!("Category not found");
        return Err(AppError::not_found("Category not found"));
    }

    // il nome può restare lo stesso, ma non può coincidere con quello di un'altra categoria
    let duplicate = state
        .category
        .find_by_natural_key(&body.name)
        .await?
        .filter(|other| other.id != category_id);
    if duplicate.is_some() {
        warn!("Duplicate category name");
        return Err(AppError::unprocessable_entity("Category already exists")
            .with_details(format!("Category by name: {} already exists", body.name)));
    }

    if !state
        .category
        .update(&category_id, &UpdateCategoryDTO::from(body))
        .await?
    {
        return Err(AppError::internal_server_error(
            "Something went wrong during updating process",
        ));
    }

    info!("Category updated");
    Ok((StatusCode::OK, UPDATED))
}

#[instrument(skip(state), fields(category_id = %category_id))]
pub async fn delete_category(
    State(state): State<Arc<AppState>>,
    Path(category_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Deleting category");
    if !state.category.exists(&category_id).await? {
        warn!("Category not found");
        return Err(AppError::not_found("Category not found"));
    }

    if !state.category.delete(&category_id).await? {
        return Err(AppError::internal_server_error(
            "Something went wrong during deleting process",
        ));
    }

    info!("Category deleted");
    Ok((StatusCode::OK, DELETED))
}
