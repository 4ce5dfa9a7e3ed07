use super::*;

/// Tests creating a user without a school.
///
/// Expected: Ok with the row stored as given
#[tokio::test]
async fn creates_user_without_school() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = new_user("jane@example.com", None);
    let created = UserRepository::new(db).create(user.clone()).await?;

    assert_eq!(created.id, user.id);
    assert_eq!(created.email, "jane@example.com");
    assert_eq!(created.school_id, None);

    Ok(())
}

/// Tests that a second user with the same email is a conflict.
///
/// Expected: Err classified as Conflict
#[tokio::test]
async fn duplicate_email_is_conflict() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = UserRepository::new(db);

    repo.create(new_user("jane@example.com", None)).await?;
    let err = repo
        .create(new_user("jane@example.com", None))
        .await
        .unwrap_err();

    assert_eq!(classify(&err), StoreErrorKind::Conflict);

    Ok(())
}

/// Tests that an unknown school is a constraint rejection.
///
/// Expected: Err classified as Constraint
#[tokio::test]
async fn unknown_school_is_constraint() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let err = UserRepository::new(db)
        .create(new_user("jane@example.com", Some(999)))
        .await
        .unwrap_err();

    assert_eq!(classify(&err), StoreErrorKind::Constraint);

    Ok(())
}
