//! Authentication middleware.
//!
//! Reads the `token` cookie, verifies it against the server secret and stores the
//! decoded claims in the request context before any validator runs.

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use cookie::Cookie;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::context::RequestContext,
    service::auth::TOKEN_COOKIE,
    state::AppState,
};

/// Rejects the request with 401 unless it carries a valid, unexpired token.
///
/// Applied with `axum::middleware::from_fn_with_state` as a route layer, so it runs
/// strictly before the `Validated` extractor of the protected handler.
///
/// # Returns
/// - `Ok(Response)` - Response of the wrapped handler
/// - `Err(AppError::AuthErr)` - Token missing, tampered with or expired
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = token_from_headers(req.headers()).ok_or(AuthError::MissingToken)?;

    let claims = state.tokens.decode(&token)?;

    let ctx = req
        .extensions()
        .get::<RequestContext>()
        .cloned()
        .unwrap_or_default()
        .with_claims(claims)?;
    req.extensions_mut().insert(ctx);

    Ok(next.run(req).await)
}

/// Finds the `token` cookie across every `Cookie` header of the request.
fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(Cookie::split_parse)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == TOKEN_COOKIE)
        .map(|cookie| cookie.value().to_string())
}
