//! Query parameter types for the customer endpoints.

use serde::Deserialize;

/// `?name=&address=` where either parameter may be omitted.
///
/// An omitted or empty value matches every row.
#[derive(Debug, Deserialize)]
pub struct OptionalNameAddressParams {
    pub name: Option<String>,
    pub address: Option<String>,
}

/// `?name=&address=` where both parameters are required.
#[derive(Debug, Deserialize)]
pub struct NameAddressParams {
    pub name: String,
    pub address: String,
}

/// `?salary=&active=`, both required.
#[derive(Debug, Deserialize)]
pub struct SalaryActiveParams {
    pub salary: f64,
    pub active: i32,
}
