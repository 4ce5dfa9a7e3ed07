use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::api::CreatedDto,
    server::{
        controller::user::token_cookie,
        error::AppError,
        middleware::validate::Validated,
        model::{school::CreateSchoolParams, user::RegisterUserParams},
        service::school::SchoolService,
        state::AppState,
    },
};

/// Register a school together with its first admin.
///
/// School and admin are written in one transaction; the admin is logged in right away.
///
/// # Arguments
/// - `state` - Application state containing the database connection and token keys
/// - `school` - Validated school fields
/// - `admin` - Validated admin fields
///
/// # Returns
/// - `201 Created` - School and admin created, body carries the admin's id
/// - `400 Bad Request` - Missing or invalid field
/// - `409 Conflict` - Admin email already registered; no school is created
/// - `500 Internal Server Error` - Database or signing error
pub async fn register_school(
    State(state): State<AppState>,
    Validated((school, admin)): Validated<(CreateSchoolParams, RegisterUserParams)>,
) -> Result<impl IntoResponse, AppError> {
    let admin = SchoolService::new(&state.db).register(school, admin).await?;
    let issued = state.tokens.issue(&admin, chrono::Utc::now())?;

    Ok((
        StatusCode::CREATED,
        [(header::SET_COOKIE, token_cookie(&issued)?)],
        Json(CreatedDto { id: admin.id }),
    ))
}
