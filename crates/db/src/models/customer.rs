//! Customer row model.

use portal_core::customer::CustomerField;
use portal_core::filter::{Record, Value};
use portal_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `customers` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Customer {
    pub id: DbId,
    pub name: String,
    pub address: String,
    pub salary: f64,
    pub active: i32,
}

impl Record for Customer {
    fn value(&self, field: CustomerField) -> Value {
        match field {
            CustomerField::Id => Value::Int(self.id),
            CustomerField::Name => Value::Text(self.name.clone()),
            CustomerField::Address => Value::Text(self.address.clone()),
            CustomerField::Salary => Value::Decimal(self.salary),
            CustomerField::Active => Value::Int(i64::from(self.active)),
        }
    }
}
