use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use tracing::error;

use crate::auth::AuthenticatedUser;
use crate::media::{CreateMediaInput, MediaError, StorageSummary};

use super::extract::{ApiJson, ApiQuery};
use super::types::{
    CreateMediaResponse, ErrorResponse, ListMediaQuery, ListMediaResponse, MediaAsset,
};
use super::ApiState;

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorResponse>)>;

pub async fn list_media(
    State(state): State<Arc<ApiState>>,
    AuthenticatedUser(user): AuthenticatedUser,
    ApiQuery(query): ApiQuery<ListMediaQuery>,
) -> ApiResult<ListMediaResponse> {
    let assets = state
        .media
        .list(&user.user_id, query.limit)
        .map_err(media_error)?;

    Ok(Json(ListMediaResponse {
        items: assets.into_iter().map(MediaAsset::from).collect(),
    }))
}

pub async fn create_media(
    State(state): State<Arc<ApiState>>,
    AuthenticatedUser(user): AuthenticatedUser,
    ApiJson(request): ApiJson<CreateMediaInput>,
) -> ApiResult<CreateMediaResponse> {
    let asset = state
        .media
        .create(&user.user_id, request)
        .map_err(media_error)?;

    Ok(Json(CreateMediaResponse {
        asset: asset.into(),
    }))
}

pub async fn storage_summary(
    State(state): State<Arc<ApiState>>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> ApiResult<StorageSummary> {
    let summary = state
        .media
        .storage_summary(&user.user_id)
        .map_err(media_error)?;

    Ok(Json(summary))
}

pub async fn health_check() -> ApiResult<serde_json::Value> {
    Ok(Json(serde_json::json!({
        "status": "healthy",
        "service": "media-api"
    })))
}

fn media_error(err: MediaError) -> (StatusCode, Json<ErrorResponse>) {
    match err {
        MediaError::InvalidInput { field, message } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: message,
                code: "validation_error".to_string(),
                details: Some(serde_json::json!({ "field": field })),
            }),
        ),
        MediaError::Accounting(err) => {
            error!(error = %err, "stored media sizes failed quota accounting");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "storage usage could not be calculated".to_string(),
                    code: "accounting_error".to_string(),
                    details: Some(serde_json::json!({ "message": err.to_string() })),
                }),
            )
        }
        MediaError::Storage(err) => internal_error(err),
    }
}

fn internal_error<E: std::fmt::Display>(err: E) -> (StatusCode, Json<ErrorResponse>) {
    error!(error = %err, "media API internal error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "internal server error".to_string(),
            code: "internal_error".to_string(),
            details: Some(serde_json::json!({ "message": err.to_string() })),
        }),
    )
}
