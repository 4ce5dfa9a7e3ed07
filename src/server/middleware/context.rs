//! Request-scoped value store.
//!
//! Values are keyed by field rather than by a runtime tag, so reading one back needs no
//! type assumption. Each stage that adds a value receives the current context and
//! returns an augmented copy; a context is never mutated in place once handed on.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::server::{
    error::{auth::AuthError, internal::InternalError, AppError},
    model::auth::Claims,
};

/// Key under which the authentication middleware stores the decoded claims.
pub const CLAIMS_KEY: &str = "claims";

/// Values accumulated while a request passes through the middleware stack.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    claims: Option<Claims>,
}

impl RequestContext {
    /// Claims of the authenticated caller, if the route is protected.
    pub fn claims(&self) -> Option<&Claims> {
        self.claims.as_ref()
    }

    /// Returns a copy of this context carrying `claims`.
    ///
    /// # Returns
    /// - `Ok(RequestContext)` - The augmented copy
    /// - `Err(InternalError::ContextKeyRewritten)` - Claims were already set for this request
    pub fn with_claims(&self, claims: Claims) -> Result<Self, InternalError> {
        if self.claims.is_some() {
            return Err(InternalError::ContextKeyRewritten(CLAIMS_KEY));
        }

        Ok(Self {
            claims: Some(claims),
        })
    }

    /// The context stored on the request, or an empty one for unprotected routes.
    pub fn from_parts(parts: &Parts) -> Self {
        parts
            .extensions
            .get::<RequestContext>()
            .cloned()
            .unwrap_or_default()
    }
}

/// Extractor yielding the caller's claims on routes behind the authentication middleware.
///
/// Rejects with 401 when no claims were stored, which only happens if a handler using it
/// is mounted on an unprotected route.
pub struct Authenticated(pub Claims);

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        RequestContext::from_parts(parts)
            .claims
            .map(Authenticated)
            .ok_or_else(|| AuthError::MissingToken.into())
    }
}
