use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

use crate::server::{
    data::transaction::{Generated, TxOp},
    model::note::CreateNoteParams,
};

pub struct NoteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NoteRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateNoteParams) -> Result<entity::note::Model, DbErr> {
        entity::note::ActiveModel {
            timetable_id: ActiveValue::Set(params.timetable_id),
            kind: ActiveValue::Set(params.kind.as_str().to_string()),
            content: ActiveValue::Set(params.content),
            date: ActiveValue::Set(params.date),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub fn insert_note(params: CreateNoteParams, id: Generated<i32>) -> TxOp {
    TxOp::new("insert note", move |txn| {
        Box::pin(async move {
            let note = NoteRepository::new(txn).create(params).await?;
            id.set(note.id)
        })
    })
}
