use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use cookie::{Cookie, SameSite};
use time::OffsetDateTime;

use crate::{
    model::api::{CreatedDto, IdDto},
    server::{
        error::{internal::InternalError, AppError},
        middleware::validate::Validated,
        model::{auth::LoginParams, user::RegisterUserParams},
        service::{
            auth::{AuthService, IssuedToken, TOKEN_COOKIE},
            user::UserService,
        },
        state::AppState,
    },
};

/// Register a new user.
///
/// Creates the user and logs them in right away by setting the `token` cookie.
///
/// # Arguments
/// - `state` - Application state containing the database connection and token keys
/// - `params` - Validated registration form
///
/// # Returns
/// - `201 Created` - User created, body carries the user id
/// - `400 Bad Request` - Missing or invalid field, or unknown school
/// - `409 Conflict` - Email already registered
/// - `500 Internal Server Error` - Database or signing error
pub async fn register_user(
    State(state): State<AppState>,
    Validated((params,)): Validated<(RegisterUserParams,)>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db).register(params).await?;
    let issued = state.tokens.issue(&user, chrono::Utc::now())?;

    Ok((
        StatusCode::CREATED,
        [(header::SET_COOKIE, token_cookie(&issued)?)],
        Json(CreatedDto { id: user.id }),
    ))
}

/// Log a user in with email and password.
///
/// # Returns
/// - `200 OK` - Credentials match, `token` cookie set
/// - `400 Bad Request` - Missing field
/// - `401 Unauthorized` - Unknown email or wrong password
pub async fn login(
    State(state): State<AppState>,
    Validated((params,)): Validated<(LoginParams,)>,
) -> Result<impl IntoResponse, AppError> {
    let issued = AuthService::new(&state.db, &state.tokens)
        .login(params)
        .await?;

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, token_cookie(&issued)?)],
        Json(IdDto { id: issued.claims.id }),
    ))
}

/// Renders the `Set-Cookie` value carrying `issued`.
///
/// The cookie is HttpOnly, SameSite=Strict, scoped to `/` and expires together with the
/// token.
pub fn token_cookie(issued: &IssuedToken) -> Result<String, AppError> {
    let timestamp = issued.claims.exp;
    let expires = OffsetDateTime::from_unix_timestamp(timestamp)
        .map_err(|source| InternalError::InvalidTimestamp { timestamp, source })?;

    let cookie = Cookie::build((TOKEN_COOKIE, issued.token.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .expires(expires)
        .build();

    Ok(cookie.to_string())
}
