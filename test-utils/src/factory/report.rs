use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Creates a lesson report for the given timetable entry, reported now.
pub async fn create_report(
    db: &DatabaseConnection,
    timetable_id: i32,
    reported_by: Uuid,
) -> Result<entity::report::Model, DbErr> {
    entity::report::ActiveModel {
        timetable_id: ActiveValue::Set(timetable_id),
        reported_by: ActiveValue::Set(reported_by),
        reported_at: ActiveValue::Set(Utc::now()),
        topic_covered: ActiveValue::Set("Fractions".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}
