//! Business logic layer.
//!
//! Services turn validated parameters into an ordered list of persistence operations,
//! run them through the transactional executor and classify store errors with the
//! route's messages. They also own token issuance and login.

pub mod auth;
pub mod period;
pub mod record;
pub mod school;
pub mod timetable;
pub mod user;

#[cfg(test)]
mod test;
