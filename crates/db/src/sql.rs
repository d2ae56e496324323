//! Translation of [`Filter`] predicates into parameterized PostgreSQL.
//!
//! Columns come from [`CustomerField::column`], never from caller input.
//! Every operand is sent as a positional bind value.

use portal_core::customer::{CustomerField, FieldKind};
use portal_core::filter::{Filter, Value};

/// A typed bind value collected while building a `WHERE` clause.
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    BigInt(i64),
    Double(f64),
    Text(String),
}

impl From<&Value> for BindValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Int(v) => BindValue::BigInt(*v),
            Value::Decimal(v) => BindValue::Double(*v),
            Value::Text(v) => BindValue::Text(v.clone()),
        }
    }
}

/// A rendered `WHERE` clause and the values to bind, in `$n` order.
#[derive(Debug, Clone, PartialEq)]
pub struct WhereClause {
    pub sql: String,
    pub binds: Vec<BindValue>,
}

/// Render `filter` as `WHERE <condition>`.
pub fn where_clause(filter: &Filter) -> WhereClause {
    let mut binds = Vec::new();
    let condition = render(filter, &mut binds);
    WhereClause {
        sql: format!("WHERE {condition}"),
        binds,
    }
}

fn render(filter: &Filter, binds: &mut Vec<BindValue>) -> String {
    match filter {
        Filter::Equals {
            field,
            value,
            ignore_case,
        } => {
            let column = field.column();
            let param = push(binds, BindValue::from(value));
            if *ignore_case && is_text(*field, value) {
                format!("LOWER({column}) = LOWER({param})")
            } else {
                format!("{column} = {param}")
            }
        }
        Filter::Contains {
            field,
            needle,
            ignore_case,
        } => {
            let column = field.column();
            let param = push(binds, BindValue::Text(needle.clone()));
            // strpos() matches literally and treats '' as a match at 1.
            if *ignore_case {
                format!("strpos(LOWER({column}), LOWER({param})) > 0")
            } else {
                format!("strpos({column}, {param}) > 0")
            }
        }
        Filter::Compare { field, op, value } => {
            let param = push(binds, BindValue::from(value));
            format!("{} {} {param}", field.column(), op.sql())
        }
        Filter::And(filters) => join(filters, " AND ", "TRUE", binds),
        Filter::Or(filters) => join(filters, " OR ", "FALSE", binds),
    }
}

fn join(filters: &[Filter], separator: &str, empty: &str, binds: &mut Vec<BindValue>) -> String {
    if filters.is_empty() {
        return empty.to_string();
    }
    let parts: Vec<String> = filters.iter().map(|f| render(f, binds)).collect();
    format!("({})", parts.join(separator))
}

fn push(binds: &mut Vec<BindValue>, value: BindValue) -> String {
    binds.push(value);
    format!("${}", binds.len())
}

fn is_text(field: CustomerField, value: &Value) -> bool {
    field.kind() == FieldKind::Text && matches!(value, Value::Text(_))
}

/// Bind a slice of `BindValue` to a sqlx `QueryAs`.
pub fn bind_values<'q, O>(
    mut q: sqlx::query::QueryAs<'q, sqlx::Postgres, O, sqlx::postgres::PgArguments>,
    binds: &'q [BindValue],
) -> sqlx::query::QueryAs<'q, sqlx::Postgres, O, sqlx::postgres::PgArguments> {
    for val in binds {
        match val {
            BindValue::BigInt(v) => q = q.bind(*v),
            BindValue::Double(v) => q = q.bind(*v),
            BindValue::Text(v) => q = q.bind(v.as_str()),
        }
    }
    q
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
