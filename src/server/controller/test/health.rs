use super::*;

/// Tests the liveness probe.
///
/// Expected: 200 OK
#[tokio::test]
async fn health_check_responds_ok() {
    let app = TestApp::new().await;

    let response = app
        .send(
            Request::builder()
                .uri("/health_check")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
}

/// Tests the fallback for unknown paths.
///
/// Expected: 404 with an error body
#[tokio::test]
async fn unknown_path_is_not_found() {
    let app = TestApp::new().await;

    let response = app.send(post_form("/nowhere", "")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["error"], "Not found");
}
