//! Identity carried by an authentication token and the login form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::server::{
    middleware::{context::RequestContext, validate::Validator},
    model::user::User,
    util::{form::RawForm, parse::ParseOutcome},
};

/// Decoded payload of an authentication token.
///
/// Immutable once decoded. `exp` is a Unix timestamp in seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub id: Uuid,
    pub name: String,
    pub surname: String,
    pub email: String,
    #[serde(rename = "schoolId")]
    pub school_id: Option<i32>,
    pub exp: i64,
}

impl Claims {
    /// Builds the claims for `user` expiring at `expires_at`.
    pub fn for_user(user: &User, expires_at: DateTime<Utc>) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            surname: user.surname.clone(),
            email: user.email.clone(),
            school_id: user.school_id,
            exp: expires_at.timestamp(),
        }
    }
}

/// Credentials submitted to `/login`.
#[derive(Debug, Clone)]
pub struct LoginParams {
    pub email: String,
    pub password: String,
}

impl Validator for LoginParams {
    const KEY: &'static str = "login";
    type Output = Self;

    fn validate(form: &RawForm, _ctx: &RequestContext) -> ParseOutcome<Self> {
        Ok(Self {
            email: form.email("email", "Invalid email provided")?,
            password: form.secret("password", "Invalid password provided")?,
        })
    }
}
