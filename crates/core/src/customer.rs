//! Customer field catalogue and the partial-customer probe used by
//! query-by-example.

use serde::Deserialize;

use crate::filter::Value;
use crate::types::DbId;

/// The columns of the `customers` table that filters may select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomerField {
    Id,
    Name,
    Address,
    Salary,
    Active,
}

/// The kind of value a [`CustomerField`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    Decimal,
    Text,
}

impl CustomerField {
    /// Every field, in column order.
    pub const ALL: [CustomerField; 5] = [
        CustomerField::Id,
        CustomerField::Name,
        CustomerField::Address,
        CustomerField::Salary,
        CustomerField::Active,
    ];

    /// Column name in the `customers` table.
    pub fn column(self) -> &'static str {
        match self {
            CustomerField::Id => "id",
            CustomerField::Name => "name",
            CustomerField::Address => "address",
            CustomerField::Salary => "salary",
            CustomerField::Active => "active",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            CustomerField::Id | CustomerField::Active => FieldKind::Integer,
            CustomerField::Salary => FieldKind::Decimal,
            CustomerField::Name | CustomerField::Address => FieldKind::Text,
        }
    }
}

/// A partial customer. Unset fields, and text fields set to the empty
/// string, take no part in matching.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CustomerProbe {
    pub id: Option<DbId>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub salary: Option<f64>,
    pub active: Option<i32>,
}

impl CustomerProbe {
    /// Probe with only the name and address set.
    pub fn name_and_address(name: Option<String>, address: Option<String>) -> Self {
        Self {
            name,
            address,
            ..Self::default()
        }
    }

    /// The probe's value for `field`, or `None` if the field does not take
    /// part in matching.
    pub fn value_of(&self, field: CustomerField) -> Option<Value> {
        match field {
            CustomerField::Id => self.id.map(Value::Int),
            CustomerField::Name => non_empty(self.name.as_deref()),
            CustomerField::Address => non_empty(self.address.as_deref()),
            CustomerField::Salary => self.salary.map(Value::Decimal),
            CustomerField::Active => self.active.map(|a| Value::Int(i64::from(a))),
        }
    }
}

fn non_empty(text: Option<&str>) -> Option<Value> {
    text.filter(|t| !t.is_empty()).map(|t| Value::Text(t.to_string()))
}
