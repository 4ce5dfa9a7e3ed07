//! Period factory for creating test period entities.

use chrono::NaiveTime;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::time;

/// Factory for creating test periods.
///
/// Inserts go through the period overlap guard when the schema was migrated, so
/// overlapping periods for the same school fail here as well.
pub struct PeriodFactory<'a> {
    db: &'a DatabaseConnection,
    school_id: i32,
    start_time: NaiveTime,
    end_time: NaiveTime,
}

impl<'a> PeriodFactory<'a> {
    /// Creates a new PeriodFactory defaulting to 08:00-08:45.
    pub fn new(db: &'a DatabaseConnection, school_id: i32) -> Self {
        Self {
            db,
            school_id,
            start_time: time(8, 0),
            end_time: time(8, 45),
        }
    }

    /// Sets the start time.
    pub fn start_time(mut self, start_time: NaiveTime) -> Self {
        self.start_time = start_time;
        self
    }

    /// Sets the end time.
    pub fn end_time(mut self, end_time: NaiveTime) -> Self {
        self.end_time = end_time;
        self
    }

    /// Builds and inserts the period entity into the database.
    pub async fn build(self) -> Result<entity::period::Model, DbErr> {
        entity::period::ActiveModel {
            school_id: ActiveValue::Set(self.school_id),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.end_time),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a period from `start` to `end` for the given school.
pub async fn create_period(
    db: &DatabaseConnection,
    school_id: i32,
    start: NaiveTime,
    end: NaiveTime,
) -> Result<entity::period::Model, DbErr> {
    PeriodFactory::new(db, school_id)
        .start_time(start)
        .end_time(end)
        .build()
        .await
}
