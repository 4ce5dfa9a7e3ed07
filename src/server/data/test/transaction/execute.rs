use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};

use crate::server::data::{school::insert_school, user::insert_school_admin};

use super::*;

/// Tests that every operation of a successful list is committed.
///
/// Expected: Ok with both schools persisted
#[tokio::test]
async fn commits_all_operations() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ops = vec![
        insert_school(school_params("North"), Generated::new()),
        insert_school(school_params("South"), Generated::new()),
    ];

    TransactionExecutor::new(db).execute(ops).await?;

    assert_eq!(count_schools(db).await?, 2);

    Ok(())
}

/// Tests that an empty list commits without error.
///
/// Expected: Ok(())
#[tokio::test]
async fn commits_empty_operation_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    TransactionExecutor::new(db).execute(Vec::new()).await?;

    assert_eq!(count_schools(db).await?, 0);

    Ok(())
}

/// Tests that a failing operation undoes the writes of earlier operations.
///
/// Expected: Err with the operation's error and no school persisted
#[tokio::test]
async fn rolls_back_earlier_operations_on_failure() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ops = vec![
        insert_school(school_params("North"), Generated::new()),
        failing_op("boom"),
    ];

    let result = TransactionExecutor::new(db).execute(ops).await;

    assert!(matches!(result, Err(DbErr::Custom(ref msg)) if msg == "boom"));
    assert_eq!(count_schools(db).await?, 0);

    Ok(())
}

/// Tests that the first failure is returned verbatim and later operations never run.
///
/// Expected: Err("first") and the trailing operation not invoked
#[tokio::test]
async fn stops_at_first_failure() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ran = Arc::new(AtomicBool::new(false));
    let ran_flag = Arc::clone(&ran);
    let trailing = TxOp::new("trailing", move |_txn| {
        Box::pin(async move {
            ran_flag.store(true, Ordering::SeqCst);
            Ok(())
        })
    });

    let result = TransactionExecutor::new(db)
        .execute(vec![failing_op("first"), failing_op("second"), trailing])
        .await;

    assert!(matches!(result, Err(DbErr::Custom(ref msg)) if msg == "first"));
    assert!(!ran.load(Ordering::SeqCst));

    Ok(())
}

/// Tests that a store rejection in a later operation rolls back the earlier insert and
/// keeps its driver error so it can be classified.
///
/// Expected: Err classified as Conflict, only the pre-existing school remains
#[tokio::test]
async fn rolls_back_on_store_rejection() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_user(db).await?;
    assert_eq!(count_schools(db).await?, 0);

    let school_id = Generated::new();
    let ops = vec![
        insert_school(school_params("North"), school_id.clone()),
        insert_school_admin(new_user(&existing.email, None), school_id),
    ];

    let err = TransactionExecutor::new(db).execute(ops).await.unwrap_err();

    assert_eq!(classify(&err), StoreErrorKind::Conflict);
    assert_eq!(count_schools(db).await?, 0);

    Ok(())
}

/// Tests that the executor leaves the pool usable after a rollback.
///
/// Expected: Ok for a second transaction after a failed one
#[tokio::test]
async fn pool_usable_after_rollback() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let executor = TransactionExecutor::new(db);

    let failed = executor.execute(vec![failing_op("boom")]).await;
    assert!(failed.is_err());

    executor
        .execute(vec![insert_school(school_params("North"), Generated::new())])
        .await?;

    assert_eq!(count_schools(db).await?, 1);

    Ok(())
}

/// Tests that abandoning `execute` mid-transaction, as a cancelled request does, rolls
/// back its writes and hands the connection back to the pool.
///
/// Expected: the timeout fires, no school is persisted, and a later transaction on the
/// single-connection pool commits
#[tokio::test]
async fn cancelled_execution_rolls_back_and_releases_connection() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stalled = TxOp::new("stalled", |_txn| {
        Box::pin(std::future::pending::<Result<(), DbErr>>())
    });
    let ops = vec![
        insert_school(school_params("North"), Generated::new()),
        stalled,
    ];

    let outcome = tokio::time::timeout(
        Duration::from_millis(100),
        TransactionExecutor::new(db).execute(ops),
    )
    .await;

    assert!(outcome.is_err());
    assert_eq!(count_schools(db).await?, 0);

    TransactionExecutor::new(db)
        .execute(vec![insert_school(school_params("South"), Generated::new())])
        .await?;

    assert_eq!(count_schools(db).await?, 1);

    Ok(())
}
