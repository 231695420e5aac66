mod common;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;
use users_proxy::routes::app_router;

#[tokio::test]
async fn test_trailing_slash_is_trimmed() {
    let backend = common::start_fixed_backend(StatusCode::OK, r#"[{"objectId":"1"}]"#).await;
    let app = app_router(common::create_test_state(&backend.base_url(), None));

    let response = app
        .oneshot(Request::get("/users/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!([{"objectId": "1"}]));

    assert_eq!(
        backend.only_request().query.as_deref(),
        Some("pageSize=50&offset=0")
    );
}

#[tokio::test]
async fn test_unknown_route_is_not_forwarded() {
    let backend = common::start_fixed_backend(StatusCode::OK, "[]").await;
    let app = app_router(common::create_test_state(&backend.base_url(), None));

    let response = app
        .oneshot(Request::get("/accounts").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(backend.requests().is_empty());
}
