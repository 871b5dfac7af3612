use axum::body::Body;
use axum::http::{Method, Request};
use tower::ServiceExt;

use super::*;

fn request(method: Method, uri: &str) -> Request<Body> {
    Request::builder().method(method).uri(uri).body(Body::empty()).unwrap()
}

fn manifest_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

// =============================================================
// Health
// =============================================================

#[tokio::test]
async fn healthz_returns_ok() {
    let response = health_routes().oneshot(request(Method::GET, "/healthz")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn healthz_rejects_post() {
    let response = health_routes().oneshot(request(Method::POST, "/healthz")).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// =============================================================
// Static fallback
// =============================================================

#[tokio::test]
async fn fallback_serves_files_from_public_dir() {
    let router = with_static(health_routes(), &manifest_dir().join("target-missing"), &manifest_dir());
    let response = router.oneshot(request(Method::GET, "/Cargo.toml")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn fallback_missing_file_is_not_found() {
    let router = with_static(health_routes(), &manifest_dir(), &manifest_dir());
    let response = router.oneshot(request(Method::GET, "/no-such-file.png")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_wins_over_fallback() {
    let router = with_static(health_routes(), &manifest_dir(), &manifest_dir());
    let response = router.oneshot(request(Method::GET, "/healthz")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
