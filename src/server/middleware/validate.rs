//! Validator chain.
//!
//! A validator turns the raw submitted form into one typed value. A chain is a tuple of
//! validators run strictly left to right; the first failure stops the chain and the
//! handler never runs. Validators are pure: they read the form and the request context
//! and never touch the database, which is left to the transactional executor.
//!
//! ```rust,ignore
//! pub async fn register_school(
//!     State(state): State<AppState>,
//!     Validated((school, admin)): Validated<(CreateSchoolParams, RegisterUserParams)>,
//! ) -> Result<impl IntoResponse, AppError> { ... }
//! ```

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};

use crate::server::{
    error::{internal::InternalError, AppError},
    middleware::context::RequestContext,
    util::{
        form::RawForm,
        parse::{ParseError, ParseOutcome},
    },
};

/// Produces one typed value from the submitted form.
pub trait Validator {
    /// Key the value is recorded under. Unique within a chain.
    const KEY: &'static str;

    type Output: Send + 'static;

    /// Reads raw fields and returns the validated value or the first problem found.
    ///
    /// Must be deterministic: the same form and context always give the same outcome.
    fn validate(form: &RawForm, ctx: &RequestContext) -> ParseOutcome<Self::Output>;
}

/// The validator that rejected a form, with its reason.
#[derive(Debug)]
pub struct ValidationFailure {
    pub key: &'static str,
    pub error: ParseError,
}

/// An ordered, non-empty list of validators.
///
/// Implemented for tuples of up to six validators; the output is the tuple of their
/// outputs in the same order.
pub trait ValidatorChain {
    type Output: Send + 'static;

    /// Keys of the validators in execution order.
    fn keys() -> Vec<&'static str>;

    /// Runs the validators in order, stopping at the first failure.
    fn run(form: &RawForm, ctx: &RequestContext) -> Result<Self::Output, ValidationFailure>;
}

macro_rules! impl_validator_chain {
    ($($validator:ident),+) => {
        impl<$($validator: Validator),+> ValidatorChain for ($($validator,)+) {
            type Output = ($($validator::Output,)+);

            fn keys() -> Vec<&'static str> {
                vec![$($validator::KEY),+]
            }

            fn run(form: &RawForm, ctx: &RequestContext) -> Result<Self::Output, ValidationFailure> {
                Ok(($(
                    $validator::validate(form, ctx).map_err(|error| ValidationFailure {
                        key: $validator::KEY,
                        error,
                    })?,
                )+))
            }
        }
    };
}

impl_validator_chain!(A);
impl_validator_chain!(A, B);
impl_validator_chain!(A, B, C);
impl_validator_chain!(A, B, C, D);
impl_validator_chain!(A, B, C, D, E);
impl_validator_chain!(A, B, C, D, E, F);

/// Rejects a chain in which two validators share a key.
pub fn ensure_unique_keys(keys: &[&'static str]) -> Result<(), InternalError> {
    for (index, key) in keys.iter().enumerate() {
        if keys[..index].contains(key) {
            return Err(InternalError::DuplicateValidatorKey(*key));
        }
    }

    Ok(())
}

/// Extractor running the validator chain `C` over a url-encoded form body.
///
/// Must be the last extractor of a handler since it consumes the body. On failure the
/// request is answered with 400 and the failing validator's message.
pub struct Validated<C: ValidatorChain>(pub C::Output);

impl<S, C> FromRequest<S> for Validated<C>
where
    S: Send + Sync,
    C: ValidatorChain,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        ensure_unique_keys(&C::keys())?;

        let ctx = req
            .extensions()
            .get::<RequestContext>()
            .cloned()
            .unwrap_or_default();

        let body = Bytes::from_request(req, state).await.map_err(|err| {
            tracing::debug!("Failed to read form body: {}", err);
            AppError::BadRequest("Error parsing form data".to_string())
        })?;

        let form = RawForm::parse(&body);

        C::run(&form, &ctx).map(Validated).map_err(|failure| {
            tracing::debug!(
                validator = failure.key,
                cause = ?failure.error.cause(),
                "Validation failed: {}",
                failure.error
            );
            AppError::Validation(failure.error)
        })
    }
}
