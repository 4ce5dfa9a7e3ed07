use crate::server::model::user::User;

use super::*;

fn user() -> User {
    User {
        id: uuid::Uuid::new_v4(),
        school_id: Some(3),
        name: "Jane".to_string(),
        surname: "Doe".to_string(),
        email: "jane@example.com".to_string(),
    }
}

/// Tests that an issued token decodes back to its claims.
///
/// Expected: Ok with identical claims expiring after the token lifetime
#[test]
fn issued_token_decodes_to_same_claims() {
    let keys = TokenKeys::from_secret(SECRET);
    let now = Utc::now();

    let issued = keys.issue(&user(), now).unwrap();
    let decoded = keys.decode(&issued.token).unwrap();

    assert_eq!(decoded, issued.claims);
    assert_eq!(decoded.school_id, Some(3));
    assert_eq!(
        decoded.exp,
        (now + Duration::hours(TOKEN_LIFETIME_HOURS)).timestamp()
    );
}

/// Tests that a token past its expiry is rejected as expired.
///
/// Expected: Err(AuthError::ExpiredToken)
#[test]
fn rejects_expired_token() {
    let keys = TokenKeys::from_secret(SECRET);
    let issued_at = Utc::now() - Duration::hours(TOKEN_LIFETIME_HOURS + 1);

    let issued = keys.issue(&user(), issued_at).unwrap();

    assert!(matches!(
        keys.decode(&issued.token),
        Err(AuthError::ExpiredToken)
    ));
}

/// Tests that a token signed with another secret is rejected.
///
/// Expected: Err(AuthError::InvalidToken)
#[test]
fn rejects_foreign_signature() {
    let keys = TokenKeys::from_secret(SECRET);
    let foreign = TokenKeys::from_secret(b"another-secret");

    let issued = foreign.issue(&user(), Utc::now()).unwrap();

    assert!(matches!(
        keys.decode(&issued.token),
        Err(AuthError::InvalidToken(_))
    ));
}

/// Tests logging in with the password used at registration.
///
/// Expected: Ok with a token for the registered user
#[tokio::test]
async fn logs_in_registered_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = TokenKeys::from_secret(SECRET);

    let user = UserService::new(db)
        .register(registration("jane@example.com", None))
        .await?;

    let issued = AuthService::new(db, &keys)
        .login(LoginParams {
            email: "jane@example.com".to_string(),
            password: "correct horse".to_string(),
        })
        .await?;

    assert_eq!(issued.claims.id, user.id);
    assert_eq!(keys.decode(&issued.token)?.email, "jane@example.com");

    Ok(())
}

/// Tests that a wrong password and an unknown email fail the same way.
///
/// Expected: Err(AuthError::InvalidCredentials) for both
#[tokio::test]
async fn rejects_wrong_password_and_unknown_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = TokenKeys::from_secret(SECRET);

    UserService::new(db)
        .register(registration("jane@example.com", None))
        .await?;

    let service = AuthService::new(db, &keys);

    let wrong_password = service
        .login(LoginParams {
            email: "jane@example.com".to_string(),
            password: "battery staple".to_string(),
        })
        .await;
    let unknown_email = service
        .login(LoginParams {
            email: "john@example.com".to_string(),
            password: "correct horse".to_string(),
        })
        .await;

    assert!(matches!(
        wrong_password,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        unknown_email,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}
