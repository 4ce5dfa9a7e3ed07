//! User data repository and persistence operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::{
    data::transaction::{Generated, TxOp},
    model::user::NewUser,
};

/// Repository providing database operations for users.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a user row with an already hashed password.
    ///
    /// # Returns
    /// - `Ok(entity::users::Model)` - The inserted row
    /// - `Err(DbErr)` - Database error, including a unique violation on `email`
    pub async fn create(&self, user: NewUser) -> Result<entity::users::Model, DbErr> {
        entity::users::ActiveModel {
            id: ActiveValue::Set(user.id),
            school_id: ActiveValue::Set(user.school_id),
            name: ActiveValue::Set(user.name),
            surname: ActiveValue::Set(user.surname),
            email: ActiveValue::Set(user.email),
            password: ActiveValue::Set(user.password_hash),
        }
        .insert(self.db)
        .await
    }

    /// Finds a user by email, including the password hash.
    ///
    /// # Returns
    /// - `Ok(Some(entity::users::Model))` - The user with this email
    /// - `Ok(None)` - No user is registered with this email
    /// - `Err(DbErr)` - Database error during lookup
    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::users::Model>, DbErr> {
        entity::prelude::Users::find()
            .filter(entity::users::Column::Email.eq(email))
            .one(self.db)
            .await
    }
}

/// Looks a user up by email, recording the row, or `None`, into `found`.
pub fn find_user_by_email(
    email: String,
    found: Generated<Option<entity::users::Model>>,
) -> TxOp {
    TxOp::new("find user by email", move |txn| {
        Box::pin(async move {
            let user = UserRepository::new(txn).find_by_email(&email).await?;
            found.set(user)
        })
    })
}

/// Inserts a user exactly as given.
pub fn insert_user(user: NewUser) -> TxOp {
    TxOp::new("insert user", move |txn| {
        Box::pin(async move {
            UserRepository::new(txn).create(user).await?;
            Ok(())
        })
    })
}

/// Inserts a school's admin, assigning the school id produced earlier in the transaction.
pub fn insert_school_admin(mut user: NewUser, school_id: Generated<i32>) -> TxOp {
    TxOp::new("insert school admin", move |txn| {
        Box::pin(async move {
            user.school_id = Some(school_id.get()?);
            UserRepository::new(txn).create(user).await?;
            Ok(())
        })
    })
}
