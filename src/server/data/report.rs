use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

use crate::server::{
    data::transaction::{Generated, TxOp},
    model::report::CreateReportParams,
};

pub struct ReportRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReportRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateReportParams,
        reported_at: DateTime<Utc>,
    ) -> Result<entity::report::Model, DbErr> {
        entity::report::ActiveModel {
            timetable_id: ActiveValue::Set(params.timetable_id),
            reported_by: ActiveValue::Set(params.reported_by),
            reported_at: ActiveValue::Set(reported_at),
            topic_covered: ActiveValue::Set(params.topic_covered),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub fn insert_report(
    params: CreateReportParams,
    reported_at: DateTime<Utc>,
    id: Generated<i32>,
) -> TxOp {
    TxOp::new("insert report", move |txn| {
        Box::pin(async move {
            let report = ReportRepository::new(txn)
                .create(params, reported_at)
                .await?;
            id.set(report.id)
        })
    })
}
