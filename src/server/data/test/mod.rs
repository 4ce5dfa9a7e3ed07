use chrono::NaiveTime;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

use crate::server::{
    data::transaction::{Generated, TransactionExecutor, TxOp},
    error::store::{classify, StoreErrorKind},
    model::{school::CreateSchoolParams, user::NewUser},
};

mod period;
mod timetable;
mod transaction;
mod user;

fn school_params(name: &str) -> CreateSchoolParams {
    CreateSchoolParams {
        name: name.to_string(),
        city: "Springfield".to_string(),
        zip_code: "00-950".to_string(),
        street_address: "1 Main Street".to_string(),
    }
}

fn new_user(email: &str, school_id: Option<i32>) -> NewUser {
    NewUser {
        id: Uuid::new_v4(),
        school_id,
        name: "Jane".to_string(),
        surname: "Doe".to_string(),
        email: email.to_string(),
        password_hash: "not-a-real-hash".to_string(),
    }
}

/// Operation that fails without touching the database.
fn failing_op(message: &'static str) -> TxOp {
    TxOp::new("fail", move |_txn| {
        Box::pin(async move { Err(DbErr::Custom(message.to_string())) })
    })
}

async fn count_schools(db: &DatabaseConnection) -> Result<u64, DbErr> {
    entity::prelude::School::find().count(db).await
}
