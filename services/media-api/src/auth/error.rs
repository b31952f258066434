use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Missing Authorization header")]
    MissingAuthHeader,

    #[error("Authorization header must use the Bearer scheme")]
    UnsupportedScheme,

    #[error("Invalid JWT: {0}")]
    InvalidJwt(String),

    #[error("User ID not found in credentials")]
    UserIdNotFound,
}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        AuthError::InvalidJwt(err.to_string())
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = json!({
            "error": self.to_string(),
            "code": "unauthorized",
            "details": null,
        });
        (StatusCode::UNAUTHORIZED, Json(body)).into_response()
    }
}
