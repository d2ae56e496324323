//! Customer query service.
//!
//! Turns typed request parameters into storage calls. The only work done
//! here is assembling the example or filter a query needs.

use std::sync::Arc;

use portal_core::customer::{CustomerField, CustomerProbe};
use portal_core::example::{Example, ExampleMatcher, StringMatcher};
use portal_core::filter::Filter;
use portal_db::models::customer::Customer;
use portal_db::store::{CustomerStore, StoreError};

pub struct CustomerService {
    store: Arc<dyn CustomerStore>,
}

impl CustomerService {
    pub fn new(store: Arc<dyn CustomerStore>) -> Self {
        Self { store }
    }

    pub async fn get_customers(&self) -> Result<Vec<Customer>, StoreError> {
        let customers = self.store.find_all().await?;
        tracing::debug!(count = customers.len(), "Listed customers");
        Ok(customers)
    }

    /// Exact match on every set field of `probe`.
    pub async fn get_customer_by_example(
        &self,
        probe: CustomerProbe,
    ) -> Result<Vec<Customer>, StoreError> {
        let customers = self.store.find_by_example(&Example::of(probe)).await?;
        tracing::debug!(count = customers.len(), "Matched customers by example");
        Ok(customers)
    }

    /// Name contains `name` and address contains `address`, ignoring case.
    /// A missing or empty argument matches every row.
    pub async fn get_customer_by_name_and_address(
        &self,
        name: Option<String>,
        address: Option<String>,
    ) -> Result<Vec<Customer>, StoreError> {
        let probe = CustomerProbe::name_and_address(name, address);
        let matcher = ExampleMatcher::matching()
            .with_ignore_case()
            .with_string_matcher(StringMatcher::Containing);

        let customers = self
            .store
            .find_by_example(&Example::with_matcher(probe, matcher))
            .await?;
        tracing::debug!(count = customers.len(), "Matched customers by name and address");
        Ok(customers)
    }

    /// Salary strictly above `salary` and `active` equal to the flag.
    pub async fn get_customer_by_salary_greater_than(
        &self,
        salary: f64,
        active: i32,
    ) -> Result<Vec<Customer>, StoreError> {
        let filter = Filter::And(vec![
            Filter::greater_than(CustomerField::Salary, salary),
            Filter::equals(CustomerField::Active, active),
        ]);

        let customers = self.store.find_matching(&filter).await?;
        tracing::debug!(
            salary,
            active,
            count = customers.len(),
            "Matched customers by salary and active flag"
        );
        Ok(customers)
    }

    /// Name or address contains the given text, ignoring case. Built from
    /// composable predicates.
    pub async fn has_name_or_address(
        &self,
        name: &str,
        address: &str,
    ) -> Result<Vec<Customer>, StoreError> {
        let filter = Filter::Or(vec![
            Filter::contains_ignore_case(CustomerField::Name, name),
            Filter::contains_ignore_case(CustomerField::Address, address),
        ]);

        let customers = self.store.find_matching(&filter).await?;
        tracing::debug!(count = customers.len(), "Matched customers by name or address");
        Ok(customers)
    }

    /// Same result set as [`Self::has_name_or_address`], answered by the
    /// store's single parameterized query.
    pub async fn find_by_name_or_address(
        &self,
        name: &str,
        address: &str,
    ) -> Result<Vec<Customer>, StoreError> {
        let customers = self.store.find_by_name_or_address(name, address).await?;
        tracing::debug!(
            count = customers.len(),
            "Matched customers by name or address (single query)"
        );
        Ok(customers)
    }

    /// Whether the backing store answers.
    pub async fn health_check(&self) -> Result<(), StoreError> {
        self.store.health_check().await
    }
}

#[cfg(test)]
mod tests {
    use portal_db::repositories::MemoryCustomerStore;

    use super::*;

    fn service() -> CustomerService {
        let customer = |id, name: &str, address: &str, salary, active| Customer {
            id,
            name: name.into(),
            address: address.into(),
            salary,
            active,
        };
        CustomerService::new(Arc::new(MemoryCustomerStore::new(vec![
            customer(1, "Alice", "100 Main St", 50000.0, 1),
            customer(2, "Bob", "200 Oak Ave", 60000.0, 0),
        ])))
    }

    fn ids(customers: &[Customer]) -> Vec<i64> {
        customers.iter().map(|c| c.id).collect()
    }

    #[tokio::test]
    async fn or_matches_either_field() {
        let rows = service().has_name_or_address("ali", "oak").await.unwrap();
        assert_eq!(ids(&rows), vec![1, 2]);
    }

    #[tokio::test]
    async fn and_requires_both_fields() {
        let rows = service()
            .get_customer_by_name_and_address(Some("ali".into()), Some("oak".into()))
            .await
            .unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn salary_threshold_with_inactive_flag() {
        let rows = service()
            .get_customer_by_salary_greater_than(10000.0, 0)
            .await
            .unwrap();
        assert_eq!(ids(&rows), vec![2]);
    }

    #[tokio::test]
    async fn non_finite_salary_is_a_validation_error() {
        let err = service()
            .get_customer_by_salary_greater_than(f64::INFINITY, 1)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Core(_)));
    }
}
