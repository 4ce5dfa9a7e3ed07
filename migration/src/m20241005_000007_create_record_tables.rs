use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20241001_000002_create_users_table::Users,
    m20241003_000005_create_class_tables::ClassGroup,
    m20241004_000006_create_timetable_tables::Timetable,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Report::Table)
                    .if_not_exists()
                    .col(pk_auto(Report::Id))
                    .col(integer(Report::TimetableId))
                    .col(uuid(Report::ReportedBy))
                    .col(timestamp_with_time_zone(Report::ReportedAt))
                    .col(text(Report::TopicCovered))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_report_timetable_id")
                            .from(Report::Table, Report::TimetableId)
                            .to(Timetable::Table, Timetable::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_report_reported_by")
                            .from(Report::Table, Report::ReportedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Grade::Table)
                    .if_not_exists()
                    .col(pk_auto(Grade::Id))
                    .col(uuid(Grade::StudentId))
                    .col(integer(Grade::ReportId))
                    .col(small_integer(Grade::Value))
                    .col(small_integer(Grade::Weight))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_grade_student_id")
                            .from(Grade::Table, Grade::StudentId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_grade_report_id")
                            .from(Grade::Table, Grade::ReportId)
                            .to(Report::Table, Report::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Note::Table)
                    .if_not_exists()
                    .col(pk_auto(Note::Id))
                    .col(integer(Note::TimetableId))
                    .col(string_len(Note::Kind, 16))
                    .col(text(Note::Content))
                    .col(date_null(Note::Date))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_note_timetable_id")
                            .from(Note::Table, Note::TimetableId)
                            .to(Timetable::Table, Timetable::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Absence::Table)
                    .if_not_exists()
                    .col(pk_auto(Absence::Id))
                    .col(uuid(Absence::UserId))
                    .col(timestamp_with_time_zone(Absence::StartsAt))
                    .col(timestamp_with_time_zone(Absence::EndsAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_absence_user_id")
                            .from(Absence::Table, Absence::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TimetableGroup::Table)
                    .if_not_exists()
                    .col(integer(TimetableGroup::TimetableId))
                    .col(integer(TimetableGroup::GroupId))
                    .primary_key(
                        Index::create()
                            .col(TimetableGroup::TimetableId)
                            .col(TimetableGroup::GroupId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_timetable_group_timetable_id")
                            .from(TimetableGroup::Table, TimetableGroup::TimetableId)
                            .to(Timetable::Table, Timetable::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_timetable_group_group_id")
                            .from(TimetableGroup::Table, TimetableGroup::GroupId)
                            .to(ClassGroup::Table, ClassGroup::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TimetableTeacher::Table)
                    .if_not_exists()
                    .col(integer(TimetableTeacher::TimetableId))
                    .col(uuid(TimetableTeacher::TeacherId))
                    .primary_key(
                        Index::create()
                            .col(TimetableTeacher::TimetableId)
                            .col(TimetableTeacher::TeacherId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_timetable_teacher_timetable_id")
                            .from(TimetableTeacher::Table, TimetableTeacher::TimetableId)
                            .to(Timetable::Table, Timetable::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_timetable_teacher_teacher_id")
                            .from(TimetableTeacher::Table, TimetableTeacher::TeacherId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TimetableTeacher::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TimetableGroup::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Absence::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Note::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Grade::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Report::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Report {
    Table,
    Id,
    TimetableId,
    ReportedBy,
    ReportedAt,
    TopicCovered,
}

#[derive(DeriveIden)]
pub enum Grade {
    Table,
    Id,
    StudentId,
    ReportId,
    Value,
    Weight,
}

#[derive(DeriveIden)]
pub enum Note {
    Table,
    Id,
    TimetableId,
    Kind,
    Content,
    Date,
}

#[derive(DeriveIden)]
pub enum Absence {
    Table,
    Id,
    UserId,
    StartsAt,
    EndsAt,
}

#[derive(DeriveIden)]
pub enum TimetableGroup {
    Table,
    TimetableId,
    GroupId,
}

#[derive(DeriveIden)]
pub enum TimetableTeacher {
    Table,
    TimetableId,
    TeacherId,
}
