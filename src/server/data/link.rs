//! Inserts into the many-to-many link tables.

use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::server::{data::transaction::TxOp, model::link::Link};

pub struct LinkRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LinkRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts one link row.
    ///
    /// Link tables have composite primary keys, so inserting an existing pair fails
    /// with a unique violation.
    pub async fn create(&self, link: Link) -> Result<(), DbErr> {
        match link {
            Link::ParentChild {
                parent_id,
                child_id,
            } => {
                entity::prelude::ParentChild::insert(entity::parent_child::ActiveModel {
                    parent_id: ActiveValue::Set(parent_id),
                    child_id: ActiveValue::Set(child_id),
                })
                .exec_without_returning(self.db)
                .await?;
            }
            Link::UsersGroup { user_id, group_id } => {
                entity::prelude::UsersGroup::insert(entity::users_group::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    group_id: ActiveValue::Set(group_id),
                })
                .exec_without_returning(self.db)
                .await?;
            }
            Link::TimetableGroup {
                timetable_id,
                group_id,
            } => {
                entity::prelude::TimetableGroup::insert(entity::timetable_group::ActiveModel {
                    timetable_id: ActiveValue::Set(timetable_id),
                    group_id: ActiveValue::Set(group_id),
                })
                .exec_without_returning(self.db)
                .await?;
            }
            Link::TimetableTeacher {
                timetable_id,
                teacher_id,
            } => {
                entity::prelude::TimetableTeacher::insert(entity::timetable_teacher::ActiveModel {
                    timetable_id: ActiveValue::Set(timetable_id),
                    teacher_id: ActiveValue::Set(teacher_id),
                })
                .exec_without_returning(self.db)
                .await?;
            }
        }

        Ok(())
    }
}

pub fn insert_link(link: Link) -> TxOp {
    TxOp::new("insert link", move |txn| {
        Box::pin(async move { LinkRepository::new(txn).create(link).await })
    })
}
