use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::api::CreatedDto,
    server::{
        error::AppError,
        middleware::validate::Validated,
        model::{
            absence::CreateAbsenceParams, grade::CreateGradeParams, note::CreateNoteParams,
            report::CreateReportParams,
        },
        service::record::RecordService,
        state::AppState,
    },
};

/// Report the topic covered in a lesson.
///
/// # Returns
/// - `201 Created` - Report created, timestamped now
/// - `400 Bad Request` - Missing field or unknown timetable entry or reporter
pub async fn create_report(
    State(state): State<AppState>,
    Validated((params,)): Validated<(CreateReportParams,)>,
) -> Result<impl IntoResponse, AppError> {
    let id = RecordService::new(&state.db).create_report(params).await?;

    Ok((StatusCode::CREATED, Json(CreatedDto { id })))
}

/// Grade a student.
///
/// # Returns
/// - `201 Created` - Grade created
/// - `400 Bad Request` - Value outside 1..=5, weight outside 1..=10, or unknown ids
pub async fn create_grade(
    State(state): State<AppState>,
    Validated((params,)): Validated<(CreateGradeParams,)>,
) -> Result<impl IntoResponse, AppError> {
    let id = RecordService::new(&state.db).create_grade(params).await?;

    Ok((StatusCode::CREATED, Json(CreatedDto { id })))
}

/// Attach a homework or test note to a lesson.
///
/// # Returns
/// - `201 Created` - Note created
/// - `400 Bad Request` - Unknown note type, invalid date or unknown timetable entry
pub async fn create_note(
    State(state): State<AppState>,
    Validated((params,)): Validated<(CreateNoteParams,)>,
) -> Result<impl IntoResponse, AppError> {
    let id = RecordService::new(&state.db).create_note(params).await?;

    Ok((StatusCode::CREATED, Json(CreatedDto { id })))
}

/// Record an absence.
///
/// # Returns
/// - `201 Created` - Absence created
/// - `400 Bad Request` - Invalid timestamps, end before start, or unknown user
pub async fn create_absence(
    State(state): State<AppState>,
    Validated((params,)): Validated<(CreateAbsenceParams,)>,
) -> Result<impl IntoResponse, AppError> {
    let id = RecordService::new(&state.db).create_absence(params).await?;

    Ok((StatusCode::CREATED, Json(CreatedDto { id })))
}
