use chrono::{Duration, Utc};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::{auth::LoginParams, school::CreateSchoolParams, user::RegisterUserParams},
    service::{
        auth::{AuthService, TokenKeys, TOKEN_LIFETIME_HOURS},
        school::SchoolService,
        user::UserService,
    },
};

mod auth;
mod period;
mod school;
mod user;

const SECRET: &[u8] = b"service-test-secret";

fn registration(email: &str, school_id: Option<i32>) -> RegisterUserParams {
    RegisterUserParams {
        email: email.to_string(),
        password: "correct horse".to_string(),
        name: "Jane".to_string(),
        surname: "Doe".to_string(),
        school_id,
    }
}

fn school_params() -> CreateSchoolParams {
    CreateSchoolParams {
        name: "North High".to_string(),
        city: "Springfield".to_string(),
        zip_code: "00-950".to_string(),
        street_address: "1 Main Street".to_string(),
    }
}
