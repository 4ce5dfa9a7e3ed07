use super::*;

/// Tests registering a user stores a password hash rather than the password.
///
/// Expected: Ok with the user stored and its password hashed
#[tokio::test]
async fn registers_user_with_hashed_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserService::new(db)
        .register(registration("jane@example.com", None))
        .await?;

    let stored = entity::prelude::Users::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.email, "jane@example.com");
    assert_ne!(stored.password, "correct horse");
    assert!(stored.password.starts_with("$argon2"));

    Ok(())
}

/// Tests registering a user into an existing school.
///
/// Expected: Ok with the school id kept
#[tokio::test]
async fn registers_user_into_school() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let school = factory::create_school(db).await?;

    let user = UserService::new(db)
        .register(registration("jane@example.com", Some(school.id)))
        .await?;

    assert_eq!(user.school_id, Some(school.id));

    Ok(())
}

/// Tests that a duplicate email is reported as a conflict.
///
/// Expected: Err(AppError::Conflict("Email already registered"))
#[tokio::test]
async fn duplicate_email_is_conflict() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = UserService::new(db);

    service
        .register(registration("jane@example.com", None))
        .await?;
    let result = service
        .register(registration("jane@example.com", None))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(ref msg)) if msg == "Email already registered"));
    assert_eq!(entity::prelude::Users::find().count(db).await?, 1);

    Ok(())
}

/// Tests that an unknown school is reported as a constraint rejection.
///
/// Expected: Err(AppError::Constraint)
#[tokio::test]
async fn unknown_school_is_constraint() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserService::new(db)
        .register(registration("jane@example.com", Some(42)))
        .await;

    assert!(matches!(result, Err(AppError::Constraint(_))));

    Ok(())
}
