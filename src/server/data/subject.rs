use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

use crate::server::{
    data::transaction::{Generated, TxOp},
    model::subject::CreateSubjectParams,
};

pub struct SubjectRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SubjectRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateSubjectParams,
    ) -> Result<entity::subject::Model, DbErr> {
        entity::subject::ActiveModel {
            school_id: ActiveValue::Set(params.school_id),
            name: ActiveValue::Set(params.name),
            mandatory: ActiveValue::Set(params.mandatory),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub fn insert_subject(params: CreateSubjectParams, id: Generated<i32>) -> TxOp {
    TxOp::new("insert subject", move |txn| {
        Box::pin(async move {
            let subject = SubjectRepository::new(txn).create(params).await?;
            id.set(subject.id)
        })
    })
}
