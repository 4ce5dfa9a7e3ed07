//! Outcome type shared by every validator.

use std::{borrow::Cow, error::Error};

use thiserror::Error;

/// Boxed diagnostic cause attached to a validation failure.
pub type Cause = Box<dyn Error + Send + Sync + 'static>;

/// A rejected form field.
///
/// `message` is always the user-facing explanation. `cause` is for diagnostics only and
/// is never sent to the client.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct ParseError {
    message: Cow<'static, str>,
    #[source]
    cause: Option<Cause>,
}

impl ParseError {
    /// Creates a failure whose message is the whole explanation.
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    /// Creates a failure with an underlying error kept for diagnostics.
    pub fn with_cause(cause: impl Into<Cause>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
            cause: Some(cause.into()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }
}

/// Either a validated value or the reason it was rejected.
pub type ParseOutcome<T> = Result<T, ParseError>;

/// Rejects a value outside `min..=max` with `message`.
///
/// # Arguments
/// - `value` - Already parsed value
/// - `min` / `max` - Inclusive bounds
/// - `message` - User-facing explanation when out of range
///
/// # Returns
/// - `Ok(value)` - Value is within range
/// - `Err(ParseError)` - Value is outside the range
pub fn in_range<T: PartialOrd>(
    value: T,
    min: T,
    max: T,
    message: &'static str,
) -> ParseOutcome<T> {
    if value < min || value > max {
        return Err(ParseError::new(message));
    }

    Ok(value)
}
