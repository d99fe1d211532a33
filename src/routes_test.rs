use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

use super::*;

fn test_options() -> LeptosOptions {
    LeptosOptions::builder()
        .output_name("portfolio")
        .site_root("target/test-site-missing")
        .build()
}

#[tokio::test]
async fn healthz_handler_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn healthz_route_returns_ok() {
    let response = app(test_options())
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn missing_static_file_is_not_found() {
    let response = app(test_options())
        .oneshot(Request::builder().uri("/favicon-does-not-exist.ico").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_pkg_asset_is_not_found() {
    let response = app(test_options())
        .oneshot(Request::builder().uri("/pkg/portfolio.wasm").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
