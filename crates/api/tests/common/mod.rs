#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use portal_api::config::ServerConfig;
use portal_api::router::build_app_router;
use portal_api::service::CustomerService;
use portal_api::state::AppState;
use portal_db::models::customer::Customer;
use portal_db::repositories::MemoryCustomerStore;
use portal_db::store::CustomerStore;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: "postgres://unused".to_string(),
        db_max_connections: 1,
    }
}

pub fn customer(id: i64, name: &str, address: &str, salary: f64, active: i32) -> Customer {
    Customer {
        id,
        name: name.to_string(),
        address: address.to_string(),
        salary,
        active,
    }
}

/// Alice and Bob.
pub fn two_customers() -> Vec<Customer> {
    vec![
        customer(1, "Alice", "100 Main St", 50000.0, 1),
        customer(2, "Bob", "200 Oak Ave", 60000.0, 0),
    ]
}

/// Build the full application router over an arbitrary store.
pub fn build_app_with_store(store: Arc<dyn CustomerStore>) -> Router {
    let state = AppState {
        customers: Arc::new(CustomerService::new(store)),
    };
    build_app_router(state, &test_config())
}

/// Build the full application router over an in-memory store holding `customers`.
pub fn build_test_app(customers: Vec<Customer>) -> Router {
    build_app_with_store(Arc::new(MemoryCustomerStore::new(customers)))
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// GET with a JSON body.
pub async fn get_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Sorted ids from a JSON array of customers.
pub fn ids(json: &serde_json::Value) -> Vec<i64> {
    let mut ids: Vec<i64> = json
        .as_array()
        .expect("response should be a JSON array")
        .iter()
        .map(|c| c["id"].as_i64().unwrap())
        .collect();
    ids.sort_unstable();
    ids
}
