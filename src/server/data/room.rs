use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

use crate::server::{
    data::transaction::{Generated, TxOp},
    model::room::CreateRoomParams,
};

pub struct RoomRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoomRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateRoomParams) -> Result<entity::room::Model, DbErr> {
        entity::room::ActiveModel {
            school_id: ActiveValue::Set(params.school_id),
            teacher_id: ActiveValue::Set(params.teacher_id),
            name: ActiveValue::Set(params.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub fn insert_room(params: CreateRoomParams, id: Generated<i32>) -> TxOp {
    TxOp::new("insert room", move |txn| {
        Box::pin(async move {
            let room = RoomRepository::new(txn).create(params).await?;
            id.set(room.id)
        })
    })
}
