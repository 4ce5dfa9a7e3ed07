//! Timetable handlers.
//!
//! All three kinds share one service call; they only differ in the validator that
//! builds the entry from the form.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::api::CreatedDto,
    server::{
        error::AppError,
        middleware::validate::Validated,
        model::timetable::{
            CreateTimetableParams, EventTimetable, RegularTimetable, SubstituteTimetable,
        },
        service::timetable::TimetableService,
        state::AppState,
    },
};

/// Create a weekly recurring lesson.
///
/// # Returns
/// - `201 Created` - Base, academic and regular rows created under one id
/// - `400 Bad Request` - Invalid field, weekday outside Monday..Friday or unknown ids
pub async fn create_regular_timetable(
    State(state): State<AppState>,
    Validated((params,)): Validated<(RegularTimetable,)>,
) -> Result<impl IntoResponse, AppError> {
    create(&state, params).await
}

/// Create a one-off replacement lesson.
///
/// # Returns
/// - `201 Created` - Base, academic and substitute rows created under one id
/// - `400 Bad Request` - Invalid field or date, or unknown ids
pub async fn create_substitute_timetable(
    State(state): State<AppState>,
    Validated((params,)): Validated<(SubstituteTimetable,)>,
) -> Result<impl IntoResponse, AppError> {
    create(&state, params).await
}

/// Create a school event.
///
/// # Returns
/// - `201 Created` - Base and event rows created under one id
/// - `400 Bad Request` - Invalid timestamps, end before start, or unknown school
pub async fn create_event_timetable(
    State(state): State<AppState>,
    Validated((params,)): Validated<(EventTimetable,)>,
) -> Result<impl IntoResponse, AppError> {
    create(&state, params).await
}

async fn create(
    state: &AppState,
    params: CreateTimetableParams,
) -> Result<(StatusCode, Json<CreatedDto<i32>>), AppError> {
    let id = TimetableService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(CreatedDto { id })))
}
