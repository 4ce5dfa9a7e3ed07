use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The request carries no `token` cookie.
    #[error("Authentication token missing")]
    MissingToken,

    /// The token could not be decoded or its signature does not match the server secret.
    #[error("Invalid authentication token: {0}")]
    InvalidToken(jsonwebtoken::errors::Error),

    /// The token was valid once but its expiry has passed.
    #[error("Authentication token expired")]
    ExpiredToken,

    /// Unknown email or wrong password on login.
    ///
    /// Both cases share one variant so the response does not reveal which emails exist.
    #[error("Invalid login credentials")]
    InvalidCredentials,

    /// Signing a freshly issued token failed.
    #[error("Failed to sign authentication token: {0}")]
    TokenSigning(jsonwebtoken::errors::Error),

    /// Hashing or parsing a stored password hash failed.
    #[error("Password hashing failed: {0}")]
    PasswordHash(argon2::password_hash::Error),
}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => Self::ExpiredToken,
            _ => Self::InvalidToken(err),
        }
    }
}

/// Converts authentication errors into HTTP responses.
///
/// Token problems answer 401 with a message that does not reveal which check failed.
/// Failed logins answer 401 with "Failed to log user in". Signing and hashing failures
/// are server faults and answer 500 with a generic message.
///
/// # Returns
/// - 401 Unauthorized - For missing, invalid or expired tokens and bad credentials
/// - 500 Internal Server Error - For token signing and password hashing failures
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken | Self::InvalidToken(_) | Self::ExpiredToken => {
                tracing::debug!("Rejected request: {}", self);

                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Unauthorized".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Failed to log user in".to_string(),
                }),
            )
                .into_response(),
            err => super::InternalServerError(err).into_response(),
        }
    }
}
