use sea_orm_migration::sea_orm::DbBackend;
use sea_orm_migration::{prelude::*, schema::*};

use super::m20241001_000001_create_school_table::School;

/// Rejects a period that ends before it starts or overlaps another period of
/// the same school. Ranges are half-open, so back-to-back periods are allowed.
const SQLITE_PERIOD_GUARD: &str = r#"
CREATE TRIGGER IF NOT EXISTS period_guard
BEFORE INSERT ON period
FOR EACH ROW
WHEN NEW.end_time < NEW.start_time
  OR EXISTS (
    SELECT 1 FROM period
    WHERE school_id = NEW.school_id
      AND start_time < NEW.end_time
      AND NEW.start_time < end_time
  )
BEGIN
  SELECT RAISE(ABORT, 'period times overlap or start is after end');
END;
"#;

const POSTGRES_PERIOD_GUARD: &str = r#"
CREATE EXTENSION IF NOT EXISTS btree_gist;
ALTER TABLE period
  ADD CONSTRAINT period_start_before_end CHECK (start_time <= end_time);
ALTER TABLE period
  ADD CONSTRAINT period_no_overlap EXCLUDE USING gist (
    school_id WITH =,
    tsrange(DATE '2000-01-01' + start_time, DATE '2000-01-01' + end_time, '[)') WITH &&
  );
"#;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Period::Table)
                    .if_not_exists()
                    .col(pk_auto(Period::Id))
                    .col(integer(Period::SchoolId))
                    .col(time(Period::StartTime))
                    .col(time(Period::EndTime))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_period_school_id")
                            .from(Period::Table, Period::SchoolId)
                            .to(School::Table, School::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        let db = manager.get_connection();
        match manager.get_database_backend() {
            DbBackend::Sqlite => {
                db.execute_unprepared(SQLITE_PERIOD_GUARD).await?;
            }
            DbBackend::Postgres => {
                db.execute_unprepared(POSTGRES_PERIOD_GUARD).await?;
            }
            _ => {}
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        if manager.get_database_backend() == DbBackend::Sqlite {
            manager
                .get_connection()
                .execute_unprepared("DROP TRIGGER IF EXISTS period_guard;")
                .await?;
        }

        manager
            .drop_table(Table::drop().table(Period::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Period {
    Table,
    Id,
    SchoolId,
    StartTime,
    EndTime,
}
