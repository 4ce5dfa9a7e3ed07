//! Factory methods for creating test data.
//!
//! Factories insert rows directly through SeaORM active models with sensible defaults,
//! bypassing services so tests can seed whatever state they need. Each entity has a
//! `Factory` struct for customization and a `create_*` convenience function.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let school = factory::school::create_school(&db).await?;
//! let teacher = factory::user::UserFactory::new(&db)
//!     .school_id(Some(school.id))
//!     .build()
//!     .await?;
//!
//! let deps = factory::helpers::create_timetable_dependencies(&db).await?;
//! ```
//!
//! # Available Factories
//!
//! - `school` - Create school entities
//! - `user` - Create user entities
//! - `period` - Create period entities
//! - `subject` - Create subject entities
//! - `room` - Create room entities
//! - `class` - Create class and class group entities
//! - `timetable` - Create timetable aggregates (base, academic and subtype rows)
//! - `report` - Create lesson report entities
//! - `helpers` - Unique id counter and dependency bundles

pub mod class;
pub mod helpers;
pub mod period;
pub mod report;
pub mod room;
pub mod school;
pub mod subject;
pub mod timetable;
pub mod user;

pub use class::{create_class, create_group};
pub use period::create_period;
pub use room::create_room;
pub use school::create_school;
pub use subject::create_subject;
pub use user::create_user;
