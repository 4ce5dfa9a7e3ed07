use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{transaction::TransactionExecutor, user::insert_user},
    error::{store::StoreMessages, AppError},
    model::user::{NewUser, RegisterUserParams, User},
    util::password::hash_password,
};

const REGISTER_USER_MESSAGES: StoreMessages = StoreMessages {
    conflict: "Email already registered",
    constraint: "School does not exist",
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a user with a freshly generated id
    ///
    /// # Returns
    /// - `Ok(User)` - The registered user
    /// - `Err(AppError::Conflict)` - Email already registered
    /// - `Err(AppError::Constraint)` - `school_id` names no school
    pub async fn register(&self, params: RegisterUserParams) -> Result<User, AppError> {
        let user = new_user(params).await?;
        let registered = user.to_user();

        TransactionExecutor::new(self.db)
            .execute(vec![insert_user(user)])
            .await
            .map_err(|err| AppError::from_store(err, &REGISTER_USER_MESSAGES))?;

        tracing::info!(user_id = %registered.id, "Registered user");

        Ok(registered)
    }
}

/// Assigns an id and hashes the password of a registration form.
///
/// Hashing is CPU bound, so it runs on the blocking pool.
pub async fn new_user(params: RegisterUserParams) -> Result<NewUser, AppError> {
    let RegisterUserParams {
        email,
        password,
        name,
        surname,
        school_id,
    } = params;

    let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|err| AppError::InternalError(format!("Password hashing task failed: {}", err)))??;

    Ok(NewUser {
        id: Uuid::new_v4(),
        school_id,
        name,
        surname,
        email,
        password_hash,
    })
}
