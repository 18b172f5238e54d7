//! Reviewer services - Gestione recensori

use super::{CREATED, DELETED, UPDATED};
use crate::core::{AppError, AppState};
use crate::dtos::{CreateReviewerDTO, ReviewDTO, ReviewerDTO, UpdateReviewerDTO};
use crate::repositories::{Create, Delete, Exists, Read, ReadAll, Update};
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

fn duplicate_reviewer(body: &ReviewerDTO) -> AppError {
    AppError::unprocessable_entity("Reviewer already exists").with_details(format!(
        "Reviewer by name: {} {} already exists",
        body.first_name, body.last_name
    ))
}

#[instrument(skip(state))]
pub async fn list_reviewers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ReviewerDTO>>, AppError> {
    debug!("Listing reviewers");
    let reviewers = state.reviewer.read_all().await?;
    info!("Found {} reviewers", reviewers.len());
    Ok(Json(reviewers.into_iter().map(ReviewerDTO::from).collect()))
}

#[instrument(skip(state), fields(reviewer_id = %reviewer_id))]
pub async fn get_reviewer(
    State(state): State<Arc<AppState>>,
    Path(reviewer_id): Path<i32>,
) -> Result<Json<ReviewerDTO>, AppError> {
    debug!("Fetching reviewer by ID");
    let reviewer = state.reviewer.read(&reviewer_id).await?.ok_or_else(|| {
        warn!("Reviewer not found");
        AppError::not_found("Reviewer not found")
    })?;

    Ok(Json(ReviewerDTO::from(reviewer)))
}

#[instrument(skip(state), fields(reviewer_id = %reviewer_id))]
pub async fn get_reviews_of_reviewer(
    State(state): State<Arc<AppState>>,
    Path(reviewer_id): Path<i32>,
) -> Result<Json<Vec<ReviewDTO>>, AppError> {
    debug!("Listing reviews of reviewer");
    if !state.reviewer.exists(&reviewer_id).await? {
        warn!("Reviewer not found");
        return Err(AppError::not_found("Reviewer not found"));
    }

    let reviews = state.reviewer.find_reviews(&reviewer_id).await?;
    Ok(Json(reviews.into_iter().map(ReviewDTO::from).collect()))
}

#[instrument(skip(state, body))]
pub async fn create_reviewer(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ReviewerDTO>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Creating reviewer");
    body.validate()?;

    if let Some(id) = body.id {
        if state.reviewer.exists(&id).await? {
            warn!("Reviewer id {} already exists", id);
            return Err(AppError::unprocessable_entity("Reviewer already exists")
                .with_details(format!("Reviewer by id: {} already exists", id)));
        }
    }

    if state
        .reviewer
        .find_by_natural_key(&body.first_name, &body.last_name)
        .await?
        .is_some()
    {
        warn!("Duplicate reviewer");
        return Err(duplicate_reviewer(&body));
    }

    state.reviewer.create(&CreateReviewerDTO::from(body)).await?;

    info!("Reviewer created");
    Ok((StatusCode::OK, CREATED))
}

#[instrument(skip(state, body), fields(reviewer_id = %reviewer_id))]
pub async fn update_reviewer(
    State(state): State<Arc<AppState>>,
    Path(reviewer_id): Path<i32>,
    Json(body): Json<ReviewerDTO>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Updating reviewer");
    body.validate()?;

    if !state.reviewer.exists(&reviewer_id).await? {
        warn!("Reviewer not found");
        return Err(AppError::not_found("Reviewer not found"));
    }

    let duplicate = state
        .reviewer
        .find_by_natural_key(&body.first_name, &body.last_name)
        .await?
        .filter(|other| other.id != reviewer_id);
    if duplicate.is_some() {
        warn!("Duplicate reviewer");
        return Err(duplicate_reviewer(&body));
    }

    if !state
        .reviewer
        .update(&reviewer_id, &UpdateReviewerDTO::from(body))
        .await?
    {
        return Err(AppError::internal_server_error(
            "Something went wrong during updating process",
        ));
    }

    info!("Reviewer updated");
    Ok((StatusCode::OK, UPDATED))
}

#[instrument(skip(state), fields(reviewer_id = %reviewer_id))]
pub async fn delete_reviewer(
    State(state): State<Arc<AppState>>,
    Path(reviewer_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Deleting reviewer");
    if !state.reviewer.exists(&reviewer_id).await? {
        warn!("Reviewer not found");
        return Err(AppError::not_found("Reviewer not found"));
    }

    // le sue recensioni vengono eliminate in cascata
    if !state.reviewer.delete(&reviewer_id).await? {
        return Err(AppError::internal_server_error(
            "Something went wrong during deleting process",
        ));
    }

    info!("Reviewer deleted");
    Ok((StatusCode::OK, DELETED))
}
