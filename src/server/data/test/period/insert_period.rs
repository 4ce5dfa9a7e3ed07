use super::*;

/// Tests that a period overlapping another period of the same school is rejected.
///
/// Expected: Err classified as Constraint, one period stored
#[tokio::test]
async fn rejects_overlapping_period() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let school = factory::create_school(db).await?;

    try_insert(db, school.id, time(8, 0), time(8, 45)).await?;
    let err = try_insert(db, school.id, time(8, 30), time(9, 15))
        .await
        .unwrap_err();

    assert_eq!(classify(&err), StoreErrorKind::Constraint);
    assert_eq!(entity::prelude::Period::find().count(db).await?, 1);

    Ok(())
}

/// Tests that a period fully containing another one is rejected.
///
/// Expected: Err classified as Constraint
#[tokio::test]
async fn rejects_enclosing_period() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let school = factory::create_school(db).await?;

    factory::create_period(db, school.id, time(9, 0), time(9, 45)).await?;
    let err = try_insert(db, school.id, time(8, 0), time(10, 0))
        .await
        .unwrap_err();

    assert_eq!(classify(&err), StoreErrorKind::Constraint);

    Ok(())
}

/// Tests that back-to-back periods do not overlap.
///
/// Expected: Ok for a period starting when the previous one ends
#[tokio::test]
async fn allows_adjacent_periods() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let school = factory::create_school(db).await?;

    try_insert(db, school.id, time(8, 0), time(8, 45)).await?;
    try_insert(db, school.id, time(8, 45), time(9, 30)).await?;

    assert_eq!(entity::prelude::Period::find().count(db).await?, 2);

    Ok(())
}

/// Tests that overlap is only checked within one school.
///
/// Expected: Ok for identical times in two schools
#[tokio::test]
async fn allows_same_times_in_other_school() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let north = factory::create_school(db).await?;
    let south = factory::create_school(db).await?;

    try_insert(db, north.id, time(8, 0), time(8, 45)).await?;
    try_insert(db, south.id, time(8, 0), time(8, 45)).await?;

    Ok(())
}

/// Tests that the store itself rejects a period ending before it starts.
///
/// Expected: Err classified as Constraint
#[tokio::test]
async fn rejects_end_before_start() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let school = factory::create_school(db).await?;

    let err = try_insert(db, school.id, time(9, 0), time(8, 0))
        .await
        .unwrap_err();

    assert_eq!(classify(&err), StoreErrorKind::Constraint);
    assert_eq!(entity::prelude::Period::find().count(db).await?, 0);

    Ok(())
}
