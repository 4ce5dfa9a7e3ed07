//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request handler
//! through Axum's state extraction. It holds the connection pool, which is the only shared
//! resource between requests, and the read-only token keys.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::service::auth::TokenKeys;

/// Application state containing shared resources and dependencies.
///
/// Both fields are cheap to clone: `DatabaseConnection` is a pool handle and the token
/// keys sit behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    ///
    /// Only the transactional executor borrows connections from it, and never beyond a
    /// single `execute` call.
    pub db: DatabaseConnection,

    /// Signing and verification keys for authentication tokens.
    ///
    /// Built once from the configured secret and used by both the authentication
    /// middleware and token issuance.
    pub tokens: Arc<TokenKeys>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `tokens` - Keys derived from the signing secret
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, tokens: Arc<TokenKeys>) -> Self {
        Self { db, tokens }
    }
}
