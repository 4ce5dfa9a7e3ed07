//! Classification of errors raised by the database.
//!
//! Persistence operations surface driver errors verbatim. Before they reach the client
//! they are sorted by driver error code into uniqueness conflicts, constraint rejections
//! and everything else, so a duplicate email or an overlapping period never turns into
//! a 500 response.

use sea_orm::{sqlx::error::ErrorKind, DbErr, RuntimeErr};

use crate::server::error::AppError;

/// SQLite extended code raised by `RAISE(ABORT, ...)` inside a trigger.
const SQLITE_CONSTRAINT_TRIGGER: &str = "1811";
/// PostgreSQL SQLSTATE for exclusion constraint violations.
const POSTGRES_EXCLUSION_VIOLATION: &str = "23P01";
/// PostgreSQL SQLSTATE raised by `RAISE EXCEPTION` without an explicit code.
const POSTGRES_DATA_EXCEPTION: &str = "22000";

/// How the store rejected a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    /// Unique or primary key violation.
    Conflict,
    /// Foreign key, check, not-null, trigger or exclusion violation.
    Constraint,
    /// Connection failures and anything unclassified.
    Other,
}

/// User-facing messages a route reports for classified store errors.
#[derive(Debug, Clone, Copy)]
pub struct StoreMessages {
    pub conflict: &'static str,
    pub constraint: &'static str,
}

/// Sorts a database error by the driver error it wraps.
///
/// # Arguments
/// - `err` - Error returned by a query, insert or commit
///
/// # Returns
/// - `StoreErrorKind` - The classification, `Other` when no driver error code is present
pub fn classify(err: &DbErr) -> StoreErrorKind {
    let (DbErr::Exec(RuntimeErr::SqlxError(source)) | DbErr::Query(RuntimeErr::SqlxError(source))) =
        err
    else {
        return StoreErrorKind::Other;
    };

    let Some(db_err) = source.as_database_error() else {
        return StoreErrorKind::Other;
    };

    match db_err.kind() {
        ErrorKind::UniqueViolation => StoreErrorKind::Conflict,
        ErrorKind::ForeignKeyViolation | ErrorKind::CheckViolation | ErrorKind::NotNullViolation => {
            StoreErrorKind::Constraint
        }
        _ => match db_err.code().as_deref() {
            Some(SQLITE_CONSTRAINT_TRIGGER)
            | Some(POSTGRES_EXCLUSION_VIOLATION)
            | Some(POSTGRES_DATA_EXCEPTION) => StoreErrorKind::Constraint,
            _ => StoreErrorKind::Other,
        },
    }
}

impl AppError {
    /// Maps a failed persistence call onto the error taxonomy of a route.
    ///
    /// # Arguments
    /// - `err` - The first failure reported by the transactional executor
    /// - `messages` - The route's messages for conflicts and constraint rejections
    ///
    /// # Returns
    /// - `AppError::Conflict` - Uniqueness violation (409)
    /// - `AppError::Constraint` - Constraint rejection (400)
    /// - `AppError::DbErr` - Anything else (500)
    pub fn from_store(err: DbErr, messages: &StoreMessages) -> Self {
        match classify(&err) {
            StoreErrorKind::Conflict => {
                tracing::debug!("Store conflict: {}", err);
                Self::Conflict(messages.conflict.to_string())
            }
            StoreErrorKind::Constraint => {
                tracing::debug!("Store constraint rejection: {}", err);
                Self::Constraint(messages.constraint.to_string())
            }
            StoreErrorKind::Other => Self::DbErr(err),
        }
    }
}
