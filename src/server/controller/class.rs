use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::api::CreatedDto,
    server::{
        error::AppError,
        middleware::validate::Validated,
        model::class::{CreateClassParams, CreateGroupParams},
        service::record::RecordService,
        state::AppState,
    },
};

/// Create a class.
///
/// # Returns
/// - `201 Created` - Class created
/// - `400 Bad Request` - Missing field, year outside 1..=9 or unknown class teacher
pub async fn create_class(
    State(state): State<AppState>,
    Validated((params,)): Validated<(CreateClassParams,)>,
) -> Result<impl IntoResponse, AppError> {
    let id = RecordService::new(&state.db).create_class(params).await?;

    Ok((StatusCode::CREATED, Json(CreatedDto { id })))
}

/// Create a group within a class.
///
/// # Returns
/// - `201 Created` - Group created
/// - `400 Bad Request` - Missing field or unknown class
pub async fn create_group(
    State(state): State<AppState>,
    Validated((params,)): Validated<(CreateGroupParams,)>,
) -> Result<impl IntoResponse, AppError> {
    let id = RecordService::new(&state.db).create_group(params).await?;

    Ok((StatusCode::CREATED, Json(CreatedDto { id })))
}
