//! Route definitions for the customer query endpoints.

use axum::routing::get;
use axum::Router;

use crate::handlers::customer;
use crate::state::AppState;

/// Customer routes, mounted at the root.
///
/// ```text
/// GET /customers                   -> list_customers
/// GET /customerByExample           -> customers_by_example
/// GET /customerNameAndAddress      -> customers_by_name_and_address
/// GET /customerSalaryAndActive     -> customers_by_salary_and_active
/// GET /customerNameOrAddress       -> customers_by_name_or_address
/// GET /customerNameOrAddress/v1    -> customers_by_name_or_address_v1
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/customers", get(customer::list_customers))
        .route("/customerByExample", get(customer::customers_by_example))
        .route(
            "/customerNameAndAddress",
            get(customer::customers_by_name_and_address),
        )
        .route(
            "/customerSalaryAndActive",
            get(customer::customers_by_salary_and_active),
        )
        .route(
            "/customerNameOrAddress",
            get(customer::customers_by_name_or_address),
        )
        .route(
            "/customerNameOrAddress/v1",
            get(customer::customers_by_name_or_address_v1),
        )
}
