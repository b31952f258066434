use anyhow::Context;
use http::HeaderMap;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{AuthError, AuthMethod, UserContext, AUTHORIZATION_HEADER, USER_ID_HEADER};
use crate::config::MediaApiConfig;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JwtClaims {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<usize>,
}

/// Resolves the calling user from request headers.
///
/// With JWT enabled only HS256 bearer tokens are accepted. With JWT disabled the user id is
/// read from `X-User-ID`, which is meant for local testing only.
pub struct UserExtractor {
    enable_jwt: bool,
    jwt_decoding_key: Option<DecodingKey>,
    jwt_validation: Option<Validation>,
}

impl UserExtractor {
    pub fn new(config: &MediaApiConfig) -> anyhow::Result<Self> {
        let (jwt_decoding_key, jwt_validation) = if config.enable_jwt {
            let secret = config
                .jwt_secret
                .as_ref()
                .context("JWT secret missing for HMAC algorithm")?;
            let decoding_key = DecodingKey::from_secret(secret.as_bytes());

            let mut validation = Validation::new(Algorithm::HS256);
            validation.algorithms = vec![Algorithm::HS256];

            if let Some(issuer) = &config.jwt_issuer {
                validation.set_issuer(&[issuer]);
            }

            if let Some(audience) = &config.jwt_audience {
                validation.set_audience(&[audience]);
            }

            (Some(decoding_key), Some(validation))
        } else {
            (None, None)
        };

        Ok(Self {
            enable_jwt: config.enable_jwt,
            jwt_decoding_key,
            jwt_validation,
        })
    }

    pub fn extract_from_jwt(&self, token: &str) -> Result<UserContext, AuthError> {
        let (Some(decoding_key), Some(validation)) = (&self.jwt_decoding_key, &self.jwt_validation)
        else {
            return Err(AuthError::UnsupportedScheme);
        };

        let token_data = decode::<JwtClaims>(token, decoding_key, validation)?;

        let user_id = token_data
            .claims
            .sub
            .filter(|sub| !sub.trim().is_empty())
            .ok_or(AuthError::UserIdNotFound)?;
        debug!(user_id = %user_id, "Extracted user ID from JWT");

        Ok(UserContext::new(user_id, AuthMethod::Jwt))
    }

    pub fn extract_from_request(&self, headers: &HeaderMap) -> Result<UserContext, AuthError> {
        if !self.enable_jwt {
            let user_id = headers
                .get(USER_ID_HEADER)
                .and_then(|value| value.to_str().ok())
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .ok_or(AuthError::UserIdNotFound)?;
            debug!(user_id = %user_id, "Using X-User-ID header (testing mode)");
            return Ok(UserContext::new(user_id.to_string(), AuthMethod::Header));
        }

        let auth_str = headers
            .get(AUTHORIZATION_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or(AuthError::MissingAuthHeader)?;
        let token = auth_str
            .strip_prefix("Bearer ")
            .ok_or(AuthError::UnsupportedScheme)?;

        self.extract_from_jwt(token.trim())
    }
}

/// Extractor for handlers that require a signed-in user.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub UserContext);
