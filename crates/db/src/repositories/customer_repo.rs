//! Repository for the `customers` table.

use async_trait::async_trait;
use portal_core::customer::CustomerField;
use portal_core::filter::{validate_text, Filter};
use portal_core::search::contains_pattern;
use sqlx::PgPool;

use crate::models::customer::Customer;
use crate::sql::{bind_values, where_clause};
use crate::store::{CustomerStore, StoreError};

/// Column list for `customers` queries.
const CUSTOMER_COLUMNS: &str = "id, name, address, salary, active";

/// PostgreSQL-backed [`CustomerStore`].
#[derive(Debug, Clone)]
pub struct CustomerRepo {
    pool: PgPool,
}

impl CustomerRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerStore for CustomerRepo {
    async fn find_all(&self) -> Result<Vec<Customer>, StoreError> {
        let query = format!("SELECT {CUSTOMER_COLUMNS} FROM customers ORDER BY id");
        let rows = sqlx::query_as::<_, Customer>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_matching(&self, filter: &Filter) -> Result<Vec<Customer>, StoreError> {
        filter.validate()?;

        let clause = where_clause(filter);
        let query = format!(
            "SELECT {CUSTOMER_COLUMNS} FROM customers {where_clause} ORDER BY id",
            where_clause = clause.sql,
        );
        tracing::trace!(%query, binds = clause.binds.len(), "Executing customer filter");

        let q = sqlx::query_as::<_, Customer>(&query);
        let rows = bind_values(q, &clause.binds).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn find_by_name_or_address(
        &self,
        name: &str,
        address: &str,
    ) -> Result<Vec<Customer>, StoreError> {
        validate_text(CustomerField::Name, name)?;
        validate_text(CustomerField::Address, address)?;

        let query = format!(
            "SELECT {CUSTOMER_COLUMNS} FROM customers \
             WHERE LOWER(name) LIKE LOWER($1) ESCAPE '\\' \
                OR LOWER(address) LIKE LOWER($2) ESCAPE '\\' \
             ORDER BY id"
        );
        let rows = sqlx::query_as::<_, Customer>(&query)
            .bind(contains_pattern(name))
            .bind(contains_pattern(address))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }
}
