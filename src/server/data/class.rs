//! Class and class group repository.

use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

use crate::server::{
    data::transaction::{Generated, TxOp},
    model::class::{CreateClassParams, CreateGroupParams},
};

pub struct ClassRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ClassRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateClassParams) -> Result<entity::class::Model, DbErr> {
        entity::class::ActiveModel {
            name: ActiveValue::Set(params.name),
            year: ActiveValue::Set(params.year),
            class_teacher_id: ActiveValue::Set(params.class_teacher_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn create_group(
        &self,
        params: CreateGroupParams,
    ) -> Result<entity::class_group::Model, DbErr> {
        entity::class_group::ActiveModel {
            class_id: ActiveValue::Set(params.class_id),
            name: ActiveValue::Set(params.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub fn insert_class(params: CreateClassParams, id: Generated<i32>) -> TxOp {
    TxOp::new("insert class", move |txn| {
        Box::pin(async move {
            let class = ClassRepository::new(txn).create(params).await?;
            id.set(class.id)
        })
    })
}

pub fn insert_group(params: CreateGroupParams, id: Generated<i32>) -> TxOp {
    TxOp::new("insert class group", move |txn| {
        Box::pin(async move {
            let group = ClassRepository::new(txn).create_group(params).await?;
            id.set(group.id)
        })
    })
}
