use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Two validators of one chain write under the same key.
    ///
    /// The chain is assembled at compile time, so this is a wiring mistake in a
    /// controller. Results in a 500 Internal Server Error.
    #[error("Validator key '{0}' is used more than once in the same chain")]
    DuplicateValidatorKey(&'static str),

    /// A request context key was written a second time.
    ///
    /// Every key is write-once per request; hitting this means a middleware ran twice.
    #[error("Request context key '{0}' was already set")]
    ContextKeyRewritten(&'static str),

    /// Failure to convert a token expiry into a cookie expiry
    #[error("Failed to convert Unix timestamp {timestamp} to a cookie expiry: {source}")]
    InvalidTimestamp {
        /// The Unix timestamp that failed to convert
        timestamp: i64,
        /// The underlying range error
        #[source]
        source: time::error::ComponentRange,
    },
}
