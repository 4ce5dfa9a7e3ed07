//! Timetable factory for creating complete timetable aggregates.
//!
//! Each helper inserts the base row, the academic row and the subtype row directly,
//! without a transaction, to seed state for tests of code that reads timetables.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::TimetableDependencies;

/// Creates a regular timetable entry on the given weekday using the provided dependencies.
///
/// # Returns
/// - `Ok(entity::timetable::Model)` - The base timetable row
/// - `Err(DbErr)` - Database error during insertion
pub async fn create_regular_timetable(
    db: &DatabaseConnection,
    deps: &TimetableDependencies,
    weekday: i16,
) -> Result<entity::timetable::Model, DbErr> {
    let base = entity::timetable::ActiveModel {
        school_id: ActiveValue::Set(deps.school.id),
        kind: ActiveValue::Set("regular".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    entity::academic_timetable::ActiveModel {
        id: ActiveValue::Set(base.id),
        period_id: ActiveValue::Set(deps.period.id),
        subject_id: ActiveValue::Set(deps.subject.id),
        room_id: ActiveValue::Set(deps.room.id),
    }
    .insert(db)
    .await?;

    entity::regular_timetable::ActiveModel {
        id: ActiveValue::Set(base.id),
        weekday: ActiveValue::Set(weekday),
    }
    .insert(db)
    .await?;

    Ok(base)
}
