//! Request processing stages that run before a controller.
//!
//! - `context` - Per-request, write-once store of values produced by earlier stages
//! - `auth` - Verifies the `token` cookie and stores the decoded claims
//! - `validate` - Runs an ordered validator chain over the submitted form

pub mod auth;
pub mod context;
pub mod validate;

#[cfg(test)]
mod test;
