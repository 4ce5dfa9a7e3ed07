//! Learnscape Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the learnscape
//! server. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, either migrated with the full schema or with hand-picked entity tables.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Seeding helpers for schools, users, periods and timetables
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn creates_period() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_migrations().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let school = factory::school::create_school(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
