pub use sea_orm_migration::prelude::*;

mod m20241001_000001_create_school_table;
mod m20241001_000002_create_users_table;
mod m20241002_000003_create_period_table;
mod m20241002_000004_create_room_and_subject_tables;
mod m20241003_000005_create_class_tables;
mod m20241004_000006_create_timetable_tables;
mod m20241005_000007_create_record_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241001_000001_create_school_table::Migration),
            Box::new(m20241001_000002_create_users_table::Migration),
            Box::new(m20241002_000003_create_period_table::Migration),
            Box::new(m20241002_000004_create_room_and_subject_tables::Migration),
            Box::new(m20241003_000005_create_class_tables::Migration),
            Box::new(m20241004_000006_create_timetable_tables::Migration),
            Box::new(m20241005_000007_create_record_tables::Migration),
        ]
    }
}
