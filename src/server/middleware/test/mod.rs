use std::{cell::RefCell, sync::Arc};

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    routing::post,
    Router,
};
use chrono::{Duration, Utc};
use http_body_util::BodyExt;
use tower::ServiceExt;
use uuid::Uuid;

use crate::server::{
    error::internal::InternalError,
    middleware::{
        context::RequestContext,
        validate::{ensure_unique_keys, Validated, Validator, ValidatorChain},
    },
    model::auth::Claims,
    util::{
        form::RawForm,
        parse::{ParseError, ParseOutcome},
    },
};

mod context;
mod validate;

fn claims(school_id: Option<i32>, expires_in: Duration) -> Claims {
    Claims {
        id: Uuid::new_v4(),
        name: "Jane".to_string(),
        surname: "Doe".to_string(),
        email: "jane@example.com".to_string(),
        school_id,
        exp: (Utc::now() + expires_in).timestamp(),
    }
}

async fn body_string(body: Body) -> String {
    let bytes = body.collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
