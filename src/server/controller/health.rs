use axum::{http::StatusCode, response::IntoResponse};

use crate::server::error::AppError;

/// Liveness probe.
///
/// # Returns
/// - `200 OK` - Server is up
pub async fn health_check() -> impl IntoResponse {
    StatusCode::OK
}

/// Fallback for unknown paths.
///
/// # Returns
/// - `404 Not Found` - No route matches
pub async fn not_found() -> AppError {
    AppError::NotFound("Not found".to_string())
}
