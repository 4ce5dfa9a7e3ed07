use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20241001_000001_create_school_table::School,
    m20241002_000003_create_period_table::Period,
    m20241002_000004_create_room_and_subject_tables::{Room, Subject},
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Timetable::Table)
                    .if_not_exists()
                    .col(pk_auto(Timetable::Id))
                    .col(integer(Timetable::SchoolId))
                    .col(string_len(Timetable::Kind, 16))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_timetable_school_id")
                            .from(Timetable::Table, Timetable::SchoolId)
                            .to(School::Table, School::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AcademicTimetable::Table)
                    .if_not_exists()
                    .col(integer(AcademicTimetable::Id).primary_key())
                    .col(integer(AcademicTimetable::PeriodId))
                    .col(integer(AcademicTimetable::SubjectId))
                    .col(integer(AcademicTimetable::RoomId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_academic_timetable_id")
                            .from(AcademicTimetable::Table, AcademicTimetable::Id)
                            .to(Timetable::Table, Timetable::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_academic_timetable_period_id")
                            .from(AcademicTimetable::Table, AcademicTimetable::PeriodId)
                            .to(Period::Table, Period::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_academic_timetable_subject_id")
                            .from(AcademicTimetable::Table, AcademicTimetable::SubjectId)
                            .to(Subject::Table, Subject::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_academic_timetable_room_id")
                            .from(AcademicTimetable::Table, AcademicTimetable::RoomId)
                            .to(Room::Table, Room::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(RegularTimetable::Table)
                    .if_not_exists()
                    .col(integer(RegularTimetable::Id).primary_key())
                    .col(small_integer(RegularTimetable::Weekday))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_regular_timetable_id")
                            .from(RegularTimetable::Table, RegularTimetable::Id)
                            .to(AcademicTimetable::Table, AcademicTimetable::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SubstituteTimetable::Table)
                    .if_not_exists()
                    .col(integer(SubstituteTimetable::Id).primary_key())
                    .col(date(SubstituteTimetable::Date))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_substitute_timetable_id")
                            .from(SubstituteTimetable::Table, SubstituteTimetable::Id)
                            .to(AcademicTimetable::Table, AcademicTimetable::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EventTimetable::Table)
                    .if_not_exists()
                    .col(integer(EventTimetable::Id).primary_key())
                    .col(string(EventTimetable::Name))
                    .col(text_null(EventTimetable::Description))
                    .col(timestamp_with_time_zone(EventTimetable::StartsAt))
                    .col(timestamp_with_time_zone(EventTimetable::EndsAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_timetable_id")
                            .from(EventTimetable::Table, EventTimetable::Id)
                            .to(Timetable::Table, Timetable::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventTimetable::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SubstituteTimetable::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(RegularTimetable::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AcademicTimetable::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Timetable::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Timetable {
    Table,
    Id,
    SchoolId,
    Kind,
}

#[derive(DeriveIden)]
pub enum AcademicTimetable {
    Table,
    Id,
    PeriodId,
    SubjectId,
    RoomId,
}

#[derive(DeriveIden)]
pub enum RegularTimetable {
    Table,
    Id,
    Weekday,
}

#[derive(DeriveIden)]
pub enum SubstituteTimetable {
    Table,
    Id,
    Date,
}

#[derive(DeriveIden)]
pub enum EventTimetable {
    Table,
    Id,
    Name,
    Description,
    StartsAt,
    EndsAt,
}
