//! HTTP request handlers.
//!
//! Handlers receive validated parameters from the validator chain, call a service and
//! convert the result into a DTO. Every creation route answers 201; the routes that
//! register or log in a user also set the `token` cookie.

pub mod class;
pub mod health;
pub mod link;
pub mod period;
pub mod record;
pub mod room;
pub mod school;
pub mod subject;
pub mod timetable;
pub mod user;

#[cfg(test)]
mod test;
