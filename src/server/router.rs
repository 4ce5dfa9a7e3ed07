use axum::{
    http::{header, HeaderValue, Method},
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::server::{
    controller::{
        class::{create_class, create_group},
        health::{health_check, not_found},
        link::{link_parent_child, link_timetable_group, link_timetable_teacher, link_users_group},
        period::create_period,
        record::{create_absence, create_grade, create_note, create_report},
        room::create_room,
        school::register_school,
        subject::create_subject,
        timetable::{
            create_event_timetable, create_regular_timetable, create_substitute_timetable,
        },
        user::{login, register_user},
    },
    error::{config::ConfigError, AppError},
    middleware::auth::require_auth,
    state::AppState,
};

/// Builds the application router.
///
/// # Arguments
/// - `state` - Shared application state
/// - `allowed_origin` - Origin allowed to send credentialed cross-origin requests; no CORS
///   layer is installed when `None`
///
/// # Returns
/// - `Ok(Router)` - Router ready to serve
/// - `Err(AppError::ConfigErr)` - `allowed_origin` is not a valid header value
pub fn router(state: AppState, allowed_origin: Option<&str>) -> Result<Router, AppError> {
    // Routes needing the caller's claims
    let protected = Router::new()
        .route("/period", post(create_period))
        .route_layer(from_fn_with_state(state.clone(), require_auth));

    let router = Router::new()
        .route("/health_check", get(health_check))
        .route("/register_user", post(register_user))
        .route("/login", post(login))
        .route("/register_school", post(register_school))
        .route("/room", post(create_room))
        .route("/subject", post(create_subject))
        .route("/class", post(create_class))
        .route("/group", post(create_group))
        .route("/regular_timetable", post(create_regular_timetable))
        .route("/substitute_timetable", post(create_substitute_timetable))
        .route("/event_timetable", post(create_event_timetable))
        .route("/report", post(create_report))
        .route("/grade", post(create_grade))
        .route("/note", post(create_note))
        .route("/absence", post(create_absence))
        .route("/parent_child", post(link_parent_child))
        .route("/users_group", post(link_users_group))
        .route("/timetable_group", post(link_timetable_group))
        .route("/timetable_teacher", post(link_timetable_teacher))
        .merge(protected)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http());

    let router = match allowed_origin {
        Some(origin) => router.layer(cors_layer(origin)?),
        None => router,
    };

    Ok(router.with_state(state))
}

fn cors_layer(origin: &str) -> Result<CorsLayer, ConfigError> {
    let origin = HeaderValue::from_str(origin).map_err(|err| ConfigError::InvalidEnvVar {
        name: "ALLOWED_ORIGIN".to_string(),
        reason: err.to_string(),
    })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]))
}
