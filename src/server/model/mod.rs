//! Server-side domain models and validated parameter types.
//!
//! Parameter types are produced by validators from a submitted form and consumed by
//! services. Each parameter type implements `Validator`, so the controller names the
//! chain of parameter types it needs and receives them fully typed. Domain models are
//! converted from entity models at the repository boundary.

pub mod absence;
pub mod auth;
pub mod class;
pub mod grade;
pub mod link;
pub mod note;
pub mod period;
pub mod report;
pub mod room;
pub mod school;
pub mod subject;
pub mod timetable;
pub mod user;
