use crate::server::{model::period::CreatePeriodParams, service::period::PeriodService};

use super::*;

fn period(school_id: i32, start: (u32, u32), end: (u32, u32)) -> CreatePeriodParams {
    CreatePeriodParams {
        school_id,
        start: factory::helpers::time(start.0, start.1),
        end: factory::helpers::time(end.0, end.1),
    }
}

/// Tests creating non-overlapping periods.
///
/// Expected: Ok with distinct ids
#[tokio::test]
async fn creates_periods() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let school = factory::create_school(db).await?;
    let service = PeriodService::new(db);

    let first = service.create(period(school.id, (8, 0), (8, 45))).await?;
    let second = service.create(period(school.id, (8, 55), (9, 40))).await?;

    assert_ne!(first, second);

    Ok(())
}

/// Tests that an overlapping period is a constraint rejection with the period message.
///
/// Expected: Err(AppError::Constraint("Period times overlap or start is before end"))
#[tokio::test]
async fn overlapping_period_is_constraint() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let school = factory::create_school(db).await?;
    let service = PeriodService::new(db);

    service.create(period(school.id, (8, 0), (8, 45))).await?;
    let result = service.create(period(school.id, (8, 40), (9, 30))).await;

    assert!(matches!(
        result,
        Err(AppError::Constraint(ref msg)) if msg == "Period times overlap or start is before end"
    ));

    Ok(())
}
