use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

use crate::server::{
    data::transaction::{Generated, TxOp},
    model::grade::CreateGradeParams,
};

pub struct GradeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GradeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateGradeParams) -> Result<entity::grade::Model, DbErr> {
        entity::grade::ActiveModel {
            student_id: ActiveValue::Set(params.student_id),
            report_id: ActiveValue::Set(params.report_id),
            value: ActiveValue::Set(params.value),
            weight: ActiveValue::Set(params.weight),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub fn insert_grade(params: CreateGradeParams, id: Generated<i32>) -> TxOp {
    TxOp::new("insert grade", move |txn| {
        Box::pin(async move {
            let grade = GradeRepository::new(txn).create(params).await?;
            id.set(grade.id)
        })
    })
}
