use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
    Router,
};
use chrono::Utc;
use http_body_util::BodyExt;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use serde_json::Value;
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;

use crate::server::{
    model::user::User, router::router, service::auth::TokenKeys, state::AppState,
};

mod health;

const SECRET: &[u8] = b"controller-test-secret";

/// Router over a freshly migrated in-memory database.
struct TestApp {
    router: Router,
    db: DatabaseConnection,
    tokens: Arc<TokenKeys>,
}

impl TestApp {
    async fn new() -> Self {
        let test = TestBuilder::new().with_migrations().build().await.unwrap();
        let db = test.db.unwrap();
        let tokens = Arc::new(TokenKeys::from_secret(SECRET));
        let router = router(AppState::new(db.clone(), Arc::clone(&tokens)), None).unwrap();

        Self { router, db, tokens }
    }

    async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    /// `Cookie` header value carrying a fresh token for `user`.
    fn cookie_for(&self, user: entity::users::Model) -> String {
        let issued = self
            .tokens
            .issue(&User::from_entity(user), Utc::now())
            .unwrap();

        format!("token={}", issued.token)
    }
}

fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn post_form_with_cookie(uri: &str, body: &str, cookie: &str) -> Request<Body> {
    let mut request = post_form(uri, body);
    request
        .headers_mut()
        .insert(header::COOKIE, cookie.parse().unwrap());
    request
}

async fn json_body(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn set_cookies(response: &Response<Body>) -> Vec<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|value| value.to_str().unwrap().to_string())
        .collect()
}
