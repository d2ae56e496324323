//! In-memory [`CustomerStore`] evaluating filters directly against rows.

use async_trait::async_trait;
use portal_core::customer::CustomerField;
use portal_core::filter::{validate_text, Filter};
use portal_core::search;

use crate::models::customer::Customer;
use crate::store::{CustomerStore, StoreError};

/// A fixed set of customers held in memory, kept sorted by `id`.
#[derive(Debug, Clone, Default)]
pub struct MemoryCustomerStore {
    customers: Vec<Customer>,
}

impl MemoryCustomerStore {
    pub fn new(mut customers: Vec<Customer>) -> Self {
        customers.sort_by_key(|c| c.id);
        Self { customers }
    }

    fn select(&self, predicate: impl Fn(&Customer) -> bool) -> Vec<Customer> {
        self.customers
            .iter()
            .filter(|c| predicate(c))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl CustomerStore for MemoryCustomerStore {
    async fn find_all(&self) -> Result<Vec<Customer>, StoreError> {
        Ok(self.customers.clone())
    }

    async fn find_matching(&self, filter: &Filter) -> Result<Vec<Customer>, StoreError> {
        filter.validate()?;
        Ok(self.select(|c| filter.matches(c)))
    }

    async fn find_by_name_or_address(
        &self,
        name: &str,
        address: &str,
    ) -> Result<Vec<Customer>, StoreError> {
        validate_text(CustomerField::Name, name)?;
        validate_text(CustomerField::Address, address)?;
        Ok(self.select(|c| {
            search::contains(&c.name, name, true) || search::contains(&c.address, address, true)
        }))
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
