use axum::{
    async_trait,
    extract::{
        rejection::{JsonRejection, QueryRejection},
        FromRequest, FromRequestParts, Query, Request,
    },
    http::{request::Parts, StatusCode},
    Json,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::types::ErrorResponse;

/// `Json<T>` whose deserialization failures are reported as `validation_error` bodies.
pub struct ApiJson<T>(pub T);

/// `Query<T>` whose parse failures are reported as `validation_error` bodies.
pub struct ApiQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| malformed_input("body", rejection.body_text()))?;
        Ok(ApiJson(value))
    }
}

#[async_trait]
impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection: QueryRejection| malformed_input("query", rejection.body_text()))?;
        Ok(ApiQuery(value))
    }
}

fn malformed_input(source: &str, message: String) -> (StatusCode, Json<ErrorResponse>) {
    debug!(source, error = %message, "rejected malformed request input");
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message,
            code: "validation_error".to_string(),
            details: Some(serde_json::json!({ "source": source })),
        }),
    )
}
