use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        period::insert_period,
        transaction::{Generated, TransactionExecutor},
    },
    error::{store::StoreMessages, AppError},
    model::period::CreatePeriodParams,
};

const PERIOD_MESSAGES: StoreMessages = StoreMessages {
    conflict: "Period already exists",
    constraint: "Period times overlap or start is before end",
};

pub struct PeriodService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PeriodService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a period for the caller's school
    ///
    /// Overlap with the school's other periods is checked by the store, which keeps the
    /// check race free: of two concurrent overlapping inserts only one commits.
    ///
    /// # Returns
    /// - `Ok(i32)` - Id of the new period
    /// - `Err(AppError::Constraint)` - Overlaps an existing period
    pub async fn create(&self, params: CreatePeriodParams) -> Result<i32, AppError> {
        let id = Generated::new();

        TransactionExecutor::new(self.db)
            .execute(vec![insert_period(params, id.clone())])
            .await
            .map_err(|err| AppError::from_store(err, &PERIOD_MESSAGES))?;

        Ok(id.get()?)
    }
}
