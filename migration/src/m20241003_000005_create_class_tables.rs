use sea_orm_migration::{prelude::*, schema::*};

use super::m20241001_000002_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Class::Table)
                    .if_not_exists()
                    .col(pk_auto(Class::Id))
                    .col(string(Class::Name))
                    .col(small_integer(Class::Year))
                    .col(uuid(Class::ClassTeacherId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_class_class_teacher_id")
                            .from(Class::Table, Class::ClassTeacherId)
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
                    .table(ClassGroup::Table)
                    .if_not_exists()
                    .col(pk_auto(ClassGroup::Id))
                    .col(integer(ClassGroup::ClassId))
                    .col(string(ClassGroup::Name))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_class_group_class_id")
                            .from(ClassGroup::Table, ClassGroup::ClassId)
                            .to(Class::Table, Class::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UsersGroup::Table)
                    .if_not_exists()
                    .col(uuid(UsersGroup::UserId))
                    .col(integer(UsersGroup::GroupId))
                    .primary_key(
                        Index::create()
                            .col(UsersGroup::UserId)
                            .col(UsersGroup::GroupId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_users_group_user_id")
                            .from(UsersGroup::Table, UsersGroup::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_users_group_group_id")
                            .from(UsersGroup::Table, UsersGroup::GroupId)
                            .to(ClassGroup::Table, ClassGroup::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ParentChild::Table)
                    .if_not_exists()
                    .col(uuid(ParentChild::ParentId))
                    .col(uuid(ParentChild::ChildId))
                    .primary_key(
                        Index::create()
                            .col(ParentChild::ParentId)
                            .col(ParentChild::ChildId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_parent_child_parent_id")
                            .from(ParentChild::Table, ParentChild::ParentId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_parent_child_child_id")
                            .from(ParentChild::Table, ParentChild::ChildId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ParentChild::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UsersGroup::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ClassGroup::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Class::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Class {
    Table,
    Id,
    Name,
    Year,
    ClassTeacherId,
}

#[derive(DeriveIden)]
pub enum ClassGroup {
    Table,
    Id,
    ClassId,
    Name,
}

#[derive(DeriveIden)]
pub enum UsersGroup {
    Table,
    UserId,
    GroupId,
}

#[derive(DeriveIden)]
pub enum ParentChild {
    Table,
    ParentId,
    ChildId,
}
