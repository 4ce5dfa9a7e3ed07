use crate::server::{data::period::insert_period, model::period::CreatePeriodParams};

use super::*;

mod insert_period;

fn time(hour: u32, minute: u32) -> NaiveTime {
    factory::helpers::time(hour, minute)
}

async fn try_insert(
    db: &DatabaseConnection,
    school_id: i32,
    start: NaiveTime,
    end: NaiveTime,
) -> Result<i32, DbErr> {
    let id = Generated::new();
    let params = CreatePeriodParams {
        school_id,
        start,
        end,
    };

    TransactionExecutor::new(db)
        .execute(vec![insert_period(params, id.clone())])
        .await?;

    id.get()
}
