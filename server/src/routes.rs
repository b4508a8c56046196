use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::HeaderMap,
};
use serde::{Deserialize, Serialize};

use reviews::{
    review::{Review, ReviewDraft},
    score::{AverageScores, average_scores},
};

use crate::{auth, error::AppError, state::AppState, store};

#[derive(Deserialize)]
pub struct LoginRequest {
    pub key: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub signed_in: bool,
}

pub async fn login_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let token = auth::sign_in(&state, &payload.key).await?;

    Ok(Json(LoginResponse { token }))
}

pub async fn session_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<SessionResponse>, AppError> {
    let signed_in = auth::signed_in(&state, &headers).await?;

    Ok(Json(SessionResponse { signed_in }))
}

pub async fn list_reviews_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Review>>, AppError> {
    Ok(Json(store::list_reviews(&state.meili_client).await?))
}

pub async fn get_review_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Review>, AppError> {
    Ok(Json(store::get_review(&state.meili_client, &id).await?))
}

/// Fresh per-category means over the entire log, recomputed per request.
pub async fn averages_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<AverageScores>, AppError> {
    let all = store::list_reviews(&state.meili_client).await?;

    Ok(Json(average_scores(&all)))
}

pub async fn create_review_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(draft): Json<ReviewDraft>,
) -> Result<Json<Review>, AppError> {
    auth::require_session(&state, &headers).await?;
    draft.validate()?;

    Ok(Json(store::insert_review(&state.meili_client, draft).await?))
}

pub async fn update_review_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(draft): Json<ReviewDraft>,
) -> Result<Json<Review>, AppError> {
    auth::require_session(&state, &headers).await?;
    draft.validate()?;

    Ok(Json(
        store::update_review(&state.meili_client, &id, draft).await?,
    ))
}

pub async fn delete_review_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<(), AppError> {
    auth::require_session(&state, &headers).await?;

    store::delete_review(&state.meili_client, &id).await
}
