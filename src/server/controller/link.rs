//! Handlers for the link tables.
//!
//! Links have no generated key, so success is an empty 201. Linking the same pair twice
//! answers 409.

use axum::{extract::State, http::StatusCode};

use crate::server::{
    error::AppError,
    middleware::validate::Validated,
    model::link::{
        ParentChildParams, TimetableGroupParams, TimetableTeacherParams, UsersGroupParams,
    },
    service::record::RecordService,
    state::AppState,
};

pub async fn link_parent_child(
    State(state): State<AppState>,
    Validated((link,)): Validated<(ParentChildParams,)>,
) -> Result<StatusCode, AppError> {
    RecordService::new(&state.db).link(link).await?;

    Ok(StatusCode::CREATED)
}

pub async fn link_users_group(
    State(state): State<AppState>,
    Validated((link,)): Validated<(UsersGroupParams,)>,
) -> Result<StatusCode, AppError> {
    RecordService::new(&state.db).link(link).await?;

    Ok(StatusCode::CREATED)
}

pub async fn link_timetable_group(
    State(state): State<AppState>,
    Validated((link,)): Validated<(TimetableGroupParams,)>,
) -> Result<StatusCode, AppError> {
    RecordService::new(&state.db).link(link).await?;

    Ok(StatusCode::CREATED)
}

pub async fn link_timetable_teacher(
    State(state): State<AppState>,
    Validated((link,)): Validated<(TimetableTeacherParams,)>,
) -> Result<StatusCode, AppError> {
    RecordService::new(&state.db).link(link).await?;

    Ok(StatusCode::CREATED)
}
