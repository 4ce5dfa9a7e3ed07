use super::*;

/// Tests finding a user by email.
///
/// Expected: Ok(Some) with the matching user
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("jane@example.com")
        .build()
        .await?;

    let found = UserRepository::new(db)
        .find_by_email("jane@example.com")
        .await?;

    assert_eq!(found.map(|found| found.id), Some(user.id));

    Ok(())
}

/// Tests that an unknown email yields no user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let found = UserRepository::new(db)
        .find_by_email("nobody@example.com")
        .await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests the lookup operation run through the executor.
///
/// Expected: the slot holds the matching row for a known email and `None` otherwise
#[tokio::test]
async fn lookup_operation_fills_slot() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("jane@example.com")
        .build()
        .await?;

    let known = Generated::new();
    let unknown = Generated::new();
    TransactionExecutor::new(db)
        .execute(vec![
            find_user_by_email("jane@example.com".to_string(), known.clone()),
            find_user_by_email("nobody@example.com".to_string(), unknown.clone()),
        ])
        .await?;

    assert_eq!(known.get()?.map(|found| found.id), Some(user.id));
    assert!(unknown.get()?.is_none());

    Ok(())
}
