use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::api::CreatedDto,
    server::{
        error::AppError,
        middleware::{context::Authenticated, validate::Validated},
        model::period::CreatePeriodParams,
        service::period::PeriodService,
        state::AppState,
    },
};

/// Create a period for the caller's school.
///
/// # Access Control
/// - Requires a valid `token` cookie; the school is taken from its claims
///
/// # Returns
/// - `201 Created` - Period created
/// - `400 Bad Request` - Invalid times, end before start, or overlap with another period
/// - `401 Unauthorized` - Missing, invalid or expired token
pub async fn create_period(
    State(state): State<AppState>,
    Authenticated(claims): Authenticated,
    Validated((params,)): Validated<(CreatePeriodParams,)>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!(user_id = %claims.id, school_id = params.school_id, "Creating period");

    let id = PeriodService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(CreatedDto { id })))
}
