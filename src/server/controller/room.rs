use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::api::CreatedDto,
    server::{
        error::AppError, middleware::validate::Validated, model::room::CreateRoomParams,
        service::record::RecordService, state::AppState,
    },
};

/// Create a room.
///
/// # Returns
/// - `201 Created` - Room created
/// - `400 Bad Request` - Missing or invalid field, unknown school or teacher
pub async fn create_room(
    State(state): State<AppState>,
    Validated((params,)): Validated<(CreateRoomParams,)>,
) -> Result<impl IntoResponse, AppError> {
    let id = RecordService::new(&state.db).create_room(params).await?;

    Ok((StatusCode::CREATED, Json(CreatedDto { id })))
}
