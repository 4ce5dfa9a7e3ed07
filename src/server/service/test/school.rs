use super::*;

/// Tests registering a school creates the school and its admin together.
///
/// Expected: Ok with the admin assigned to the new school
#[tokio::test]
async fn registers_school_with_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = SchoolService::new(db)
        .register(school_params(), registration("admin@example.com", None))
        .await?;

    let school_id = admin.school_id.unwrap();
    let school = entity::prelude::School::find_by_id(school_id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(school.name, "North High");

    let stored = entity::prelude::Users::find_by_id(admin.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.school_id, Some(school_id));

    Ok(())
}

/// Tests that a school id submitted with the admin fields is replaced.
///
/// Expected: Ok with the admin in the new school, not the submitted one
#[tokio::test]
async fn ignores_submitted_school_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let other = factory::create_school(db).await?;

    let admin = SchoolService::new(db)
        .register(school_params(), registration("admin@example.com", Some(other.id)))
        .await?;

    assert_ne!(admin.school_id, Some(other.id));

    Ok(())
}

/// Tests that a failing admin insert leaves no school behind.
///
/// Expected: Err(AppError::Conflict) and no school row
#[tokio::test]
async fn duplicate_admin_email_rolls_back_school() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("admin@example.com")
        .build()
        .await?;

    let result = SchoolService::new(db)
        .register(school_params(), registration("admin@example.com", None))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(entity::prelude::School::find().count(db).await?, 0);

    Ok(())
}
