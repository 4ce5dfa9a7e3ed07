use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

use crate::server::{
    data::transaction::{Generated, TxOp},
    model::absence::CreateAbsenceParams,
};

pub struct AbsenceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AbsenceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateAbsenceParams,
    ) -> Result<entity::absence::Model, DbErr> {
        entity::absence::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            starts_at: ActiveValue::Set(params.starts_at),
            ends_at: ActiveValue::Set(params.ends_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub fn insert_absence(params: CreateAbsenceParams, id: Generated<i32>) -> TxOp {
    TxOp::new("insert absence", move |txn| {
        Box::pin(async move {
            let absence = AbsenceRepository::new(txn).create(params).await?;
            id.set(absence.id)
        })
    })
}
