//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get, two_customers};
use portal_core::filter::Filter;
use portal_db::models::customer::Customer;
use portal_db::store::{CustomerStore, StoreError};
use tower::ServiceExt;

/// A store whose backend can never be reached.
struct UnreachableStore;

#[async_trait]
impl CustomerStore for UnreachableStore {
    async fn find_all(&self) -> Result<Vec<Customer>, StoreError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn find_matching(&self, _filter: &Filter) -> Result<Vec<Customer>, StoreError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn find_by_name_or_address(
        &self,
        _name: &str,
        _address: &str,
    ) -> Result<Vec<Customer>, StoreError> {
        Err(sqlx::Error::PoolClosed.into())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Err(sqlx::Error::PoolClosed.into())
    }
}

// ---------------------------------------------------------------------------
// Test: GET /health returns 200 with expected JSON fields
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_returns_ok_with_json() {
    let app = common::build_test_app(two_customers());
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["db_healthy"], true);
}

#[tokio::test]
async fn health_check_reports_degraded_store() {
    let app = common::build_app_with_store(Arc::new(UnreachableStore));
    let json = body_json(get(app, "/health").await).await;

    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], false);
}

// ---------------------------------------------------------------------------
// Test: unreachable store surfaces as 503 on every query route
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unreachable_store_returns_503() {
    for uri in [
        "/customers",
        "/customerNameAndAddress?name=a&address=b",
        "/customerSalaryAndActive?salary=1&active=1",
        "/customerNameOrAddress?name=a&address=b",
        "/customerNameOrAddress/v1?name=a&address=b",
    ] {
        let app = common::build_app_with_store(Arc::new(UnreachableStore));
        let response = get(app, uri).await;

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE, "uri: {uri}");
        assert_eq!(body_json(response).await["code"], "SERVICE_UNAVAILABLE");
    }
}

#[tokio::test]
async fn input_errors_win_over_backend_errors() {
    let app = common::build_app_with_store(Arc::new(UnreachableStore));
    let response = get(app, "/customerSalaryAndActive?active=1").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Test: Unknown route returns 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = common::build_test_app(two_customers());
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let app = common::build_test_app(two_customers());
    let response = get(app, "/customers").await;

    let request_id = response.headers().get("x-request-id");
    assert!(
        request_id.is_some(),
        "Response must contain an x-request-id header"
    );

    // The value should be a valid UUID (36 chars with hyphens).
    let id_str = request_id.unwrap().to_str().unwrap();
    assert_eq!(id_str.len(), 36, "x-request-id should be a UUID string");
}

// ---------------------------------------------------------------------------
// Test: CORS preflight allows GET from the configured origin
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cors_preflight_returns_correct_headers() {
    let app = common::build_test_app(two_customers());

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/customers")
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "GET")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    let allow_origin = headers
        .get("access-control-allow-origin")
        .expect("Missing Access-Control-Allow-Origin header")
        .to_str()
        .unwrap();
    assert_eq!(allow_origin, "http://localhost:5173");

    let allow_methods = headers
        .get("access-control-allow-methods")
        .expect("Missing Access-Control-Allow-Methods header")
        .to_str()
        .unwrap();
    assert!(
        allow_methods.contains("GET"),
        "Allow-Methods should contain GET, got: {allow_methods}"
    );
}
