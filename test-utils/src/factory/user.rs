//! User factory for creating test user entities.
//!
//! The stored password is an opaque placeholder rather than a real hash. Tests that log
//! in should register the user through the service layer instead.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let user = UserFactory::new(&db)
///     .email("jane@example.com")
///     .school_id(Some(school.id))
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    id: Uuid,
    school_id: Option<i32>,
    name: String,
    surname: String,
    email: String,
    password: String,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - id: random v4 uuid
    /// - school_id: `None`
    /// - name / surname: `"User"` / `"{id}"`
    /// - email: `"user{id}@example.com"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id: Uuid::new_v4(),
            school_id: None,
            name: "User".to_string(),
            surname: id.to_string(),
            email: format!("user{}@example.com", id),
            password: "not-a-real-hash".to_string(),
        }
    }

    /// Sets the school the user belongs to.
    pub fn school_id(mut self, school_id: Option<i32>) -> Self {
        self.school_id = school_id;
        self
    }

    /// Sets the email address.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the stored password hash.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::users::Model)` - The created user entity
    /// - `Err(DbErr)` - Database error during insertion (e.g. duplicate email)
    pub async fn build(self) -> Result<entity::users::Model, DbErr> {
        entity::users::ActiveModel {
            id: ActiveValue::Set(self.id),
            school_id: ActiveValue::Set(self.school_id),
            name: ActiveValue::Set(self.name),
            surname: ActiveValue::Set(self.surname),
            email: ActiveValue::Set(self.email),
            password: ActiveValue::Set(self.password),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values and no school.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::users::Model, DbErr> {
    UserFactory::new(db).build().await
}
