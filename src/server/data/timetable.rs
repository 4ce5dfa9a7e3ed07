//! Timetable persistence.
//!
//! A timetable entry is written as a short list of operations run in one transaction:
//! the base row (which generates the id), the academic row for regular and substitute
//! entries, then the subtype row. All rows share the base row's id, so none of them can
//! exist without the others.

use chrono::{DateTime, NaiveDate, Utc, Weekday};
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

use crate::server::{
    data::transaction::{Generated, TxOp},
    model::timetable::{AcademicSlot, CreateTimetableParams, TimetableEntry, TimetableKind},
};

pub struct TimetableRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TimetableRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the base row tagged with `kind`
    ///
    /// # Returns
    /// - `Ok(entity::timetable::Model)` - The base row including its generated id
    /// - `Err(DbErr)` - Database error, e.g. unknown school
    pub async fn create_base(
        &self,
        school_id: i32,
        kind: TimetableKind,
    ) -> Result<entity::timetable::Model, DbErr> {
        entity::timetable::ActiveModel {
            school_id: ActiveValue::Set(school_id),
            kind: ActiveValue::Set(kind.as_str().to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn create_academic(&self, id: i32, slot: AcademicSlot) -> Result<(), DbErr> {
        entity::academic_timetable::ActiveModel {
            id: ActiveValue::Set(id),
            period_id: ActiveValue::Set(slot.period_id),
            subject_id: ActiveValue::Set(slot.subject_id),
            room_id: ActiveValue::Set(slot.room_id),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Inserts the regular subtype row, storing the weekday as 1 (Monday) through 7.
    pub async fn create_regular(&self, id: i32, weekday: Weekday) -> Result<(), DbErr> {
        entity::regular_timetable::ActiveModel {
            id: ActiveValue::Set(id),
            weekday: ActiveValue::Set(weekday.number_from_monday() as i16),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    pub async fn create_substitute(&self, id: i32, date: NaiveDate) -> Result<(), DbErr> {
        entity::substitute_timetable::ActiveModel {
            id: ActiveValue::Set(id),
            date: ActiveValue::Set(date),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    pub async fn create_event(
        &self,
        id: i32,
        name: String,
        description: Option<String>,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        entity::event_timetable::ActiveModel {
            id: ActiveValue::Set(id),
            name: ActiveValue::Set(name),
            description: ActiveValue::Set(description),
            starts_at: ActiveValue::Set(starts_at),
            ends_at: ActiveValue::Set(ends_at),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }
}

/// Builds the operations writing one timetable entry.
///
/// The first operation records the generated id in `id`; the others read it.
///
/// # Arguments
/// - `params` - Validated school and entry fields
/// - `id` - Slot receiving the id shared by every row of the entry
///
/// # Returns
/// - `Vec<TxOp>` - Base, academic (if any) and subtype inserts, in that order
pub fn timetable_ops(params: CreateTimetableParams, id: Generated<i32>) -> Vec<TxOp> {
    let CreateTimetableParams { school_id, entry } = params;

    let mut ops = vec![insert_base(school_id, entry.kind(), id.clone())];

    if let Some(slot) = entry.academic().copied() {
        ops.push(insert_academic(slot, id.clone()));
    }

    ops.push(insert_subtype(entry, id));

    ops
}

fn insert_base(school_id: i32, kind: TimetableKind, id: Generated<i32>) -> TxOp {
    TxOp::new("insert timetable", move |txn| {
        Box::pin(async move {
            let base = TimetableRepository::new(txn)
                .create_base(school_id, kind)
                .await?;
            id.set(base.id)
        })
    })
}

fn insert_academic(slot: AcademicSlot, id: Generated<i32>) -> TxOp {
    TxOp::new("insert academic timetable", move |txn| {
        Box::pin(async move {
            TimetableRepository::new(txn)
                .create_academic(id.get()?, slot)
                .await
        })
    })
}

fn insert_subtype(entry: TimetableEntry, id: Generated<i32>) -> TxOp {
    TxOp::new("insert timetable subtype", move |txn| {
        Box::pin(async move {
            let repo = TimetableRepository::new(txn);
            let id = id.get()?;

            match entry {
                TimetableEntry::Regular { weekday, .. } => repo.create_regular(id, weekday).await,
                TimetableEntry::Substitute { date, .. } => repo.create_substitute(id, date).await,
                TimetableEntry::Event {
                    name,
                    description,
                    starts_at,
                    ends_at,
                } => {
                    repo.create_event(id, name, description, starts_at, ends_at)
                        .await
                }
            }
        })
    })
}
