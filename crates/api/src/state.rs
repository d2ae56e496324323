use std::sync::Arc;

use crate::service::CustomerService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Customer query service.
    pub customers: Arc<CustomerService>,
}
