//! Handlers for the read-only customer query endpoints.
//!
//! Every handler answers with a JSON array of customers. An empty array is a
//! successful response.

use axum::extract::State;
use axum::Json;
use portal_core::customer::CustomerProbe;
use portal_db::models::customer::Customer;

use crate::error::AppResult;
use crate::extract::{ValidatedJson, ValidatedQuery};
use crate::query::{NameAddressParams, OptionalNameAddressParams, SalaryActiveParams};
use crate::state::AppState;

/// GET /customers
pub async fn list_customers(State(state): State<AppState>) -> AppResult<Json<Vec<Customer>>> {
    let customers = state.customers.get_customers().await?;
    Ok(Json(customers))
}

/// GET /customerByExample
///
/// Body is a partial customer; every field it sets must match exactly.
pub async fn customers_by_example(
    State(state): State<AppState>,
    ValidatedJson(probe): ValidatedJson<CustomerProbe>,
) -> AppResult<Json<Vec<Customer>>> {
    let customers = state.customers.get_customer_by_example(probe).await?;
    Ok(Json(customers))
}

/// GET /customerNameAndAddress?name=&address=
pub async fn customers_by_name_and_address(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<OptionalNameAddressParams>,
) -> AppResult<Json<Vec<Customer>>> {
    let customers = state
        .customers
        .get_customer_by_name_and_address(params.name, params.address)
        .await?;
    Ok(Json(customers))
}

/// GET /customerSalaryAndActive?salary=&active=
pub async fn customers_by_salary_and_active(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<SalaryActiveParams>,
) -> AppResult<Json<Vec<Customer>>> {
    let customers = state
        .customers
        .get_customer_by_salary_greater_than(params.salary, params.active)
        .await?;
    Ok(Json(customers))
}

/// GET /customerNameOrAddress?name=&address=
pub async fn customers_by_name_or_address(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<NameAddressParams>,
) -> AppResult<Json<Vec<Customer>>> {
    let customers = state
        .customers
        .has_name_or_address(&params.name, &params.address)
        .await?;
    Ok(Json(customers))
}

/// GET /customerNameOrAddress/v1?name=&address=
pub async fn customers_by_name_or_address_v1(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<NameAddressParams>,
) -> AppResult<Json<Vec<Customer>>> {
    let customers = state
        .customers
        .find_by_name_or_address(&params.name, &params.address)
        .await?;
    Ok(Json(customers))
}
