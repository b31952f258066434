mod context;
mod error;
mod extractor;

pub use context::UserContext;
pub use error::AuthError;
pub use extractor::{AuthenticatedUser, JwtClaims, UserExtractor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMethod {
    Jwt,
    Header,
}

pub const USER_ID_HEADER: &str = "x-user-id";
pub const AUTHORIZATION_HEADER: &str = "authorization";
