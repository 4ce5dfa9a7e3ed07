//! Class factory for creating test classes and their groups.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Creates a first-year class led by the given teacher.
pub async fn create_class(
    db: &DatabaseConnection,
    class_teacher_id: Uuid,
) -> Result<entity::class::Model, DbErr> {
    entity::class::ActiveModel {
        name: ActiveValue::Set(format!("{}A", next_id())),
        year: ActiveValue::Set(1),
        class_teacher_id: ActiveValue::Set(class_teacher_id),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a group within the given class.
pub async fn create_group(
    db: &DatabaseConnection,
    class_id: i32,
) -> Result<entity::class_group::Model, DbErr> {
    entity::class_group::ActiveModel {
        class_id: ActiveValue::Set(class_id),
        name: ActiveValue::Set(format!("Group {}", next_id())),
        ..Default::default()
    }
    .insert(db)
    .await
}
