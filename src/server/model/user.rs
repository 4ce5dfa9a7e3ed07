//! Domain & parameter models for users
//!
//! Defines the user domain model returned by services, the registration parameters
//! produced by the validator chain and the row that is finally inserted.

use uuid::Uuid;

use crate::server::{
    middleware::{context::RequestContext, validate::Validator},
    util::{
        form::RawForm,
        parse::{ParseError, ParseOutcome},
    },
};

/// Minimum accepted password length in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// The user domain model, without the password hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub school_id: Option<i32>,
    pub name: String,
    pub surname: String,
    pub email: String,
}

impl User {
    /// Converts an entity model to the user domain model
    pub fn from_entity(entity: entity::users::Model) -> Self {
        Self {
            id: entity.id,
            school_id: entity.school_id,
            name: entity.name,
            surname: entity.surname,
            email: entity.email,
        }
    }
}

/// Registration form fields for a user.
///
/// Also validates the admin section of the school registration form, where `school_id`
/// is left out and filled from the school created in the same transaction.
#[derive(Debug, Clone)]
pub struct RegisterUserParams {
    pub email: String,
    pub password: String,
    pub name: String,
    pub surname: String,
    pub school_id: Option<i32>,
}

impl Validator for RegisterUserParams {
    const KEY: &'static str = "user";
    type Output = Self;

    fn validate(form: &RawForm, _ctx: &RequestContext) -> ParseOutcome<Self> {
        let email = form.email("email", "Invalid email provided")?;

        let password = form.secret("password", "Invalid password provided")?;
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ParseError::new("Invalid password provided"));
        }

        Ok(Self {
            email,
            password,
            name: form.required("name", "User name not provided")?,
            surname: form.required("surname", "Surname not provided")?,
            school_id: form.optional_int("school_id", "Invalid school id")?,
        })
    }
}

/// A user row ready to insert, with its generated id and hashed password.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub id: Uuid,
    pub school_id: Option<i32>,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub password_hash: String,
}

impl NewUser {
    /// The domain model the row will read back as once inserted.
    pub fn to_user(&self) -> User {
        User {
            id: self.id,
            school_id: self.school_id,
            name: self.name.clone(),
            surname: self.surname.clone(),
            email: self.email.clone(),
        }
    }
}
