use crate::server::data::{school::insert_school, user::insert_school_admin};

use super::*;

/// Tests that a key generated by one operation is visible to a later one.
///
/// Expected: Ok with the admin assigned to the new school
#[tokio::test]
async fn carries_generated_key_to_later_operation() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let school_id = Generated::new();
    let admin = new_user("admin@example.com", None);
    let admin_id = admin.id;

    let ops = vec![
        insert_school(school_params("North"), school_id.clone()),
        insert_school_admin(admin, school_id.clone()),
    ];

    TransactionExecutor::new(db).execute(ops).await?;

    let school_id = school_id.get()?;
    let stored = entity::prelude::Users::find_by_id(admin_id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.school_id, Some(school_id));

    Ok(())
}

/// Tests that consuming a key before the producing operation ran fails the transaction.
///
/// Expected: Err(DbErr::Custom) and nothing persisted
#[tokio::test]
async fn fails_when_consumer_runs_before_producer() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let school_id = Generated::new();
    let ops = vec![
        insert_school_admin(new_user("admin@example.com", None), school_id.clone()),
        insert_school(school_params("North"), school_id),
    ];

    let result = TransactionExecutor::new(db).execute(ops).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));
    assert_eq!(count_schools(db).await?, 0);
    assert_eq!(entity::prelude::Users::find().count(db).await?, 0);

    Ok(())
}

/// Tests that a slot accepts exactly one value.
///
/// Expected: second `set` fails, `get` returns the first value
#[test]
fn slot_is_write_once() {
    let slot = Generated::new();

    assert!(slot.get().is_err());
    assert!(slot.set(1).is_ok());
    assert!(slot.set(2).is_err());
    assert_eq!(slot.get().unwrap(), 1);
}

/// Tests that clones share the same slot.
///
/// Expected: value set through one clone is read through another
#[test]
fn clones_share_slot() {
    let slot = Generated::new();
    let clone = slot.clone();

    clone.set(7).unwrap();

    assert_eq!(slot.get().unwrap(), 7);
}
