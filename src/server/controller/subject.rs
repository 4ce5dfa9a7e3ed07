use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::api::CreatedDto,
    server::{
        error::AppError, middleware::validate::Validated, model::subject::CreateSubjectParams,
        service::record::RecordService, state::AppState,
    },
};

/// Create a subject.
///
/// # Returns
/// - `201 Created` - Subject created
/// - `400 Bad Request` - Missing field or unknown school
pub async fn create_subject(
    State(state): State<AppState>,
    Validated((params,)): Validated<(CreateSubjectParams,)>,
) -> Result<impl IntoResponse, AppError> {
    let id = RecordService::new(&state.db).create_subject(params).await?;

    Ok((StatusCode::CREATED, Json(CreatedDto { id })))
}
