use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20241001_000001_create_school_table::School, m20241001_000002_create_users_table::Users,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Room::Table)
                    .if_not_exists()
                    .col(pk_auto(Room::Id))
                    .col(integer(Room::SchoolId))
                    .col(uuid(Room::TeacherId))
                    .col(string(Room::Name))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_school_id")
                            .from(Room::Table, Room::SchoolId)
                            .to(School::Table, School::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_teacher_id")
                            .from(Room::Table, Room::TeacherId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Subject::Table)
                    .if_not_exists()
                    .col(pk_auto(Subject::Id))
                    .col(integer(Subject::SchoolId))
                    .col(string(Subject::Name))
                    .col(boolean(Subject::Mandatory).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_subject_school_id")
                            .from(Subject::Table, Subject::SchoolId)
                            .to(School::Table, School::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Subject::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Room::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Room {
    Table,
    Id,
    SchoolId,
    TeacherId,
    Name,
}

#[derive(DeriveIden)]
pub enum Subject {
    Table,
    Id,
    SchoolId,
    Name,
    Mandatory,
}
