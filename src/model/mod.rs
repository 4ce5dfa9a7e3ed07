//! Data transfer objects shared by every API response.

pub mod api;
