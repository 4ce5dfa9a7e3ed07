use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        timetable::timetable_ops,
        transaction::{Generated, TransactionExecutor},
    },
    error::{store::StoreMessages, AppError},
    model::timetable::CreateTimetableParams,
};

const TIMETABLE_MESSAGES: StoreMessages = StoreMessages {
    conflict: "Timetable entry already exists",
    constraint: "Invalid school, period, subject or room id",
};

pub struct TimetableService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TimetableService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a timetable entry with its academic and subtype rows
    ///
    /// # Returns
    /// - `Ok(i32)` - Id shared by the base and subtype rows
    /// - `Err(AppError::Constraint)` - A referenced school, period, subject or room does not exist
    pub async fn create(&self, params: CreateTimetableParams) -> Result<i32, AppError> {
        let kind = params.entry.kind();
        let id = Generated::new();

        TransactionExecutor::new(self.db)
            .execute(timetable_ops(params, id.clone()))
            .await
            .map_err(|err| AppError::from_store(err, &TIMETABLE_MESSAGES))?;

        let id = id.get()?;
        tracing::debug!(timetable_id = id, kind = kind.as_str(), "Created timetable entry");

        Ok(id)
    }
}
