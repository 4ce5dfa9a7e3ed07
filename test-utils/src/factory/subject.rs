use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a mandatory subject named `"Subject {id}"` for the given school.
pub async fn create_subject(
    db: &DatabaseConnection,
    school_id: i32,
) -> Result<entity::subject::Model, DbErr> {
    entity::subject::ActiveModel {
        school_id: ActiveValue::Set(school_id),
        name: ActiveValue::Set(format!("Subject {}", next_id())),
        mandatory: ActiveValue::Set(true),
        ..Default::default()
    }
    .insert(db)
    .await
}
