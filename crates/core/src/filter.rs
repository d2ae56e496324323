//! Composable filter predicates over customer rows.
//!
//! A [`Filter`] is evaluated in memory through [`Filter::matches`] or
//! translated to SQL by the storage layer. Both paths must agree, so the
//! semantics of every variant are pinned down here:
//!
//! - `Equals` is exact equality; `ignore_case` only affects text.
//! - `Contains` is substring containment; an empty needle matches every row.
//! - `Compare` orders numbers numerically and text lexicographically.
//! - `And(vec![])` matches every row, `Or(vec![])` matches none.

use std::cmp::Ordering;

use crate::customer::{CustomerField, FieldKind};
use crate::error::CoreError;
use crate::search;

/// A scalar value a filter compares a field against.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Decimal(f64),
    Text(String),
}

impl Value {
    fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Decimal(v) => Some(*v),
            Value::Text(_) => None,
        }
    }

    /// Whether this value may be compared against a field of `kind`.
    fn fits(&self, kind: FieldKind) -> bool {
        match (self, kind) {
            (Value::Text(_), FieldKind::Text) => true,
            (Value::Int(_), FieldKind::Integer | FieldKind::Decimal) => true,
            (Value::Decimal(_), FieldKind::Decimal | FieldKind::Integer) => true,
            _ => false,
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Decimal(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

/// Ordering comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    GreaterThan,
}

impl CompareOp {
    /// SQL operator token.
    pub fn sql(self) -> &'static str {
        match self {
            CompareOp::GreaterThan => ">",
        }
    }

    fn holds(self, ordering: Ordering) -> bool {
        match self {
            CompareOp::GreaterThan => ordering == Ordering::Greater,
        }
    }
}

/// Anything a filter can be evaluated against.
pub trait Record {
    fn value(&self, field: CustomerField) -> Value;
}

/// A boolean condition over customer fields.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    Equals {
        field: CustomerField,
        value: Value,
        ignore_case: bool,
    },
    Contains {
        field: CustomerField,
        needle: String,
        ignore_case: bool,
    },
    Compare {
        field: CustomerField,
        op: CompareOp,
        value: Value,
    },
    And(Vec<Filter>),
    Or(Vec<Filter>),
}

impl Filter {
    pub fn equals(field: CustomerField, value: impl Into<Value>) -> Self {
        Filter::Equals {
            field,
            value: value.into(),
            ignore_case: false,
        }
    }

    pub fn contains_ignore_case(field: CustomerField, needle: impl Into<String>) -> Self {
        Filter::Contains {
            field,
            needle: needle.into(),
            ignore_case: true,
        }
    }

    pub fn greater_than(field: CustomerField, value: impl Into<Value>) -> Self {
        Filter::Compare {
            field,
            op: CompareOp::GreaterThan,
            value: value.into(),
        }
    }

    /// Evaluate the filter against a single record.
    pub fn matches<R: Record + ?Sized>(&self, record: &R) -> bool {
        match self {
            Filter::Equals {
                field,
                value,
                ignore_case,
            } => values_equal(&record.value(*field), value, *ignore_case),
            Filter::Contains {
                field,
                needle,
                ignore_case,
            } => match record.value(*field) {
                Value::Text(haystack) => search::contains(&haystack, needle, *ignore_case),
                _ => false,
            },
            Filter::Compare { field, op, value } => compare(&record.value(*field), value)
                .map(|ordering| op.holds(ordering))
                .unwrap_or(false),
            Filter::And(filters) => filters.iter().all(|f| f.matches(record)),
            Filter::Or(filters) => filters.iter().any(|f| f.matches(record)),
        }
    }

    /// Check that every leaf compares a field against a value of a matching
    /// kind, that decimal operands are finite and that text operands hold no
    /// NUL characters.
    pub fn validate(&self) -> Result<(), CoreError> {
        match self {
            Filter::Equals { field, value, .. } | Filter::Compare { field, value, .. } => {
                if !value.fits(field.kind()) {
                    return Err(CoreError::Validation(format!(
                        "value {value:?} cannot be compared with field '{}'",
                        field.column()
                    )));
                }
                match value {
                    Value::Decimal(v) if !v.is_finite() => Err(CoreError::Validation(format!(
                        "'{}' must be a finite number",
                        field.column()
                    ))),
                    Value::Text(text) => validate_text(*field, text),
                    _ => Ok(()),
                }
            }
            Filter::Contains { field, needle, .. } => {
                if field.kind() != FieldKind::Text {
                    return Err(CoreError::Validation(format!(
                        "substring match requires a text field, got '{}'",
                        field.column()
                    )));
                }
                validate_text(*field, needle)
            }
            Filter::And(filters) | Filter::Or(filters) => {
                filters.iter().try_for_each(Filter::validate)
            }
        }
    }
}

/// Reject text a PostgreSQL `TEXT` parameter cannot carry.
pub fn validate_text(field: CustomerField, text: &str) -> Result<(), CoreError> {
    if text.contains('\0') {
        return Err(CoreError::Validation(format!(
            "'{}' must not contain NUL characters",
            field.column()
        )));
    }
    Ok(())
}

fn values_equal(actual: &Value, expected: &Value, ignore_case: bool) -> bool {
    match (actual, expected) {
        (Value::Text(a), Value::Text(b)) if ignore_case => {
            search::fold_case(a) == search::fold_case(b)
        }
        (Value::Text(a), Value::Text(b)) => a == b,
        (Value::Int(a), Value::Int(b)) => a == b,
        _ => compare(actual, expected) == Some(Ordering::Equal),
    }
}

fn compare(actual: &Value, expected: &Value) -> Option<Ordering> {
    match (actual, expected) {
        (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
        (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
        _ => actual.as_f64()?.partial_cmp(&expected.as_f64()?),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
