//! Review services - Gestione recensioni

use super::{CREATED, DELETED, UPDATED};
use crate::core::{AppError, AppState};
use crate::dtos::{CreateReviewDTO, ReviewCreateQuery, ReviewDTO, UpdateReviewDTO};
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
pub async fn list_reviews(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ReviewDTO>>, AppError> {
    debug!("Listing reviews");
    let reviews = state.review.read_all().await?;
    info!("Found {} reviews", reviews.len());
    Ok(Json(reviews.into_iter().map(ReviewDTO::from).collect()))
}

#[instrument(skip(state), fields(review_id = %review_id))]
pub async fn get_review(
    State(state): State<Arc<AppState>>,
    Path(review_id): Path<i32>,
) -> Result<Json<ReviewDTO>, AppError> {
    debug!("Fetching review by ID");
    let review = state.review.read(&review_id).await?.ok_or_else(|| {
        warn!("Review not found");
        AppError::not_found("Review not found")
    })?;

    Ok(Json(ReviewDTO::from(review)))
}

#[instrument(skip(state), fields(pokemon_id = %pokemon_id))]
pub async fn get_reviews_of_pokemon(
    State(state): State<Arc<AppState>>,
    Path(pokemon_id): Path<i32>,
) -> Result<Json<Vec<ReviewDTO>>, AppError> {
    debug!("Listing reviews of pokemon");
    if !state.pokemon.exists(&pokemon_id).await? {
        warn!("Pokemon not found");
        return Err(AppError::not_found("Pokemon not found"));
    }

    let reviews = state.review.find_many_by_pokemon_id(&pokemon_id).await?;
    info!("Found {} reviews of pokemon", reviews.len());
    Ok(Json(reviews.into_iter().map(ReviewDTO::from).collect()))
}

#[instrument(skip(state, body), fields(reviewer_id = %params.reviewer_id, pokemon_id = %params.pokemon_id))]
pub async fn create_review(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ReviewCreateQuery>, // query params /reviews?reviewer_id=1&pokemon_id=2
    Json(body): Json<ReviewDTO>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Creating review");
    body.validate()?;

    if let Some(id) = body.id {
        if state.review.exists(&id).await? {
            warn!("Review id {} already exists", id);
            return Err(AppError::unprocessable_entity("Review already exists")
                .with_details(format!("Review by id: {} already exists", id)));
        }
    }

    if !state.pokemon.exists(&params.pokemon_id).await? {
        warn!("Pokemon does not exist");
        return Err(AppError::unprocessable_entity("Pokemon does not exist").with_details(
            format!("Pokemon by id: {} does not exist", params.pokemon_id),
        ));
    }

    if !state.reviewer.exists(&params.reviewer_id).await? {
        warn!("Reviewer does not exist");
        return Err(AppError::unprocessable_entity("Reviewer does not exist").with_details(
            format!("Reviewer by id: {} does not exist", params.reviewer_id),
        ));
    }

    state
        .review
        .create(&CreateReviewDTO::new(params.pokemon_id, params.reviewer_id, body))
        .await?;

    info!("Review created");
    Ok((StatusCode::OK, CREATED))
}

#[instrument(skip(state, body), fields(review_id = %review_id))]
pub async fn update_review(
    State(state): State<Arc<AppState>>,
    Path(review_id): Path<i32>,
    Json(body): Json<ReviewDTO>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Updating review");
    body.validate()?;

    if !state.review.exists(&review_id).await? {
        warn!("Review not found");
        return Err(AppError::not_found("Review not found"));
    }

    // pokemon e reviewer restano quelli della creazione
    if !state
        .review
        .update(&review_id, &UpdateReviewDTO::from(body))
        .await?
    {
        return Err(AppError::internal_server_error(
            "Something went wrong during updating process",
        ));
    }

    info!("Review updated");
    Ok((StatusCode::OK, UPDATED))
}

#[instrument(skip(state), fields(review_id = %review_id))]
pub async fn delete_review(
    State(state): State<Arc<AppState>>,
    Path(review_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Deleting review");
    if !state.review.exists(&review_id).await? {
        warn!("Review not found");
        return Err(AppError::not_found("Review not found"));
    }

    if !state.review.delete(&review_id).await? {
        return Err(AppError::internal_server_error(
            "Something went wrong during deleting process",
        ));
    }

    info!("Review deleted");
    Ok((StatusCode::OK, DELETED))
}
