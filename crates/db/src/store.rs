//! The storage accessor contract.

use async_trait::async_trait;
use portal_core::error::CoreError;
use portal_core::example::Example;
use portal_core::filter::Filter;

use crate::models::customer::Customer;

/// Errors a [`CustomerStore`] can return.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The filter could not be executed as given.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The backend failed or could not be reached.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Read-only access to customer rows.
///
/// Every method returns rows ordered by `id`. An empty result is `Ok(vec![])`.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Every stored customer.
    async fn find_all(&self) -> Result<Vec<Customer>, StoreError>;

    /// Customers matching the example's set fields under its matcher.
    async fn find_by_example(&self, example: &Example) -> Result<Vec<Customer>, StoreError> {
        self.find_matching(&example.to_filter()).await
    }

    /// Customers satisfying a composed predicate.
    async fn find_matching(&self, filter: &Filter) -> Result<Vec<Customer>, StoreError>;

    /// Customers whose name contains `name` or whose address contains
    /// `address`, ignoring case, evaluated as one parameterized expression.
    async fn find_by_name_or_address(
        &self,
        name: &str,
        address: &str,
    ) -> Result<Vec<Customer>, StoreError>;

    /// Verify the backend is reachable.
    async fn health_check(&self) -> Result<(), StoreError>;
}
