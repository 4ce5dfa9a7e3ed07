use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

use crate::server::{
    data::transaction::{Generated, TxOp},
    model::period::CreatePeriodParams,
};

/// Repository providing database operations for periods.
///
/// Overlap and ordering of periods are enforced by the schema, so inserts here may fail
/// with a trigger (SQLite) or exclusion (PostgreSQL) violation.
pub struct PeriodRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PeriodRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreatePeriodParams) -> Result<entity::period::Model, DbErr> {
        entity::period::ActiveModel {
            school_id: ActiveValue::Set(params.school_id),
            start_time: ActiveValue::Set(params.start),
            end_time: ActiveValue::Set(params.end),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub fn insert_period(params: CreatePeriodParams, id: Generated<i32>) -> TxOp {
    TxOp::new("insert period", move |txn| {
        Box::pin(async move {
            let period = PeriodRepository::new(txn).create(params).await?;
            id.set(period.id)
        })
    })
}
