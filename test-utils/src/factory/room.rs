use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Creates a room named `"Room {id}"` owned by the given teacher.
pub async fn create_room(
    db: &DatabaseConnection,
    school_id: i32,
    teacher_id: Uuid,
) -> Result<entity::room::Model, DbErr> {
    entity::room::ActiveModel {
        school_id: ActiveValue::Set(school_id),
        teacher_id: ActiveValue::Set(teacher_id),
        name: ActiveValue::Set(format!("Room {}", next_id())),
        ..Default::default()
    }
    .insert(db)
    .await
}
