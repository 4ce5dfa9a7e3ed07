//! Shared helper utilities for factory methods.
//!
//! This module provides the unique id counter used across all factory modules and a
//! convenience method for creating everything an academic timetable entry references.

use chrono::NaiveTime;
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Rows referenced by an academic timetable entry.
pub struct TimetableDependencies {
    pub school: entity::school::Model,
    pub teacher: entity::users::Model,
    pub period: entity::period::Model,
    pub subject: entity::subject::Model,
    pub room: entity::room::Model,
}

/// Creates a school with a teacher, an 08:00-08:45 period, a subject and a room.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(TimetableDependencies)` - All created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_timetable_dependencies(
    db: &DatabaseConnection,
) -> Result<TimetableDependencies, DbErr> {
    let school = crate::factory::school::create_school(db).await?;
    let teacher = crate::factory::user::UserFactory::new(db)
        .school_id(Some(school.id))
        .build()
        .await?;
    let period = crate::factory::period::PeriodFactory::new(db, school.id)
        .start_time(time(8, 0))
        .end_time(time(8, 45))
        .build()
        .await?;
    let subject = crate::factory::subject::create_subject(db, school.id).await?;
    let room = crate::factory::room::create_room(db, school.id, teacher.id).await?;

    Ok(TimetableDependencies {
        school,
        teacher,
        period,
        subject,
        room,
    })
}

/// Builds a wall-clock time from hours and minutes, falling back to midnight when out of range.
pub fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}
