//! Query-by-example: a [`CustomerProbe`] plus an [`ExampleMatcher`] that
//! says how its set fields are compared. An example compiles down to a
//! conjunctive [`Filter`].

use crate::customer::{CustomerField, CustomerProbe, FieldKind};
use crate::filter::{Filter, Value};

/// How text fields of the probe are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StringMatcher {
    #[default]
    Exact,
    Containing,
}

/// Matching configuration for an [`Example`].
///
/// Unset probe fields are always ignored. Numeric fields are always
/// compared by exact equality; the string matcher and case folding only
/// apply to text fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExampleMatcher {
    string_matcher: StringMatcher,
    ignore_case: bool,
}

impl ExampleMatcher {
    /// Exact, case-sensitive matching of every set field.
    pub fn matching() -> Self {
        Self::default()
    }

    pub fn with_ignore_case(mut self) -> Self {
        self.ignore_case = true;
        self
    }

    pub fn with_string_matcher(mut self, string_matcher: StringMatcher) -> Self {
        self.string_matcher = string_matcher;
        self
    }

    fn predicate(&self, field: CustomerField, value: Value) -> Filter {
        match (field.kind(), value, self.string_matcher) {
            (FieldKind::Text, Value::Text(needle), StringMatcher::Containing) => {
                Filter::Contains {
                    field,
                    needle,
                    ignore_case: self.ignore_case,
                }
            }
            (_, value, _) => Filter::Equals {
                field,
                value,
                ignore_case: self.ignore_case,
            },
        }
    }
}

/// A probe and the matcher used to compare it against rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Example {
    pub probe: CustomerProbe,
    pub matcher: ExampleMatcher,
}

impl Example {
    /// Example with the default exact matcher.
    pub fn of(probe: CustomerProbe) -> Self {
        Self::with_matcher(probe, ExampleMatcher::matching())
    }

    pub fn with_matcher(probe: CustomerProbe, matcher: ExampleMatcher) -> Self {
        Self { probe, matcher }
    }

    /// Compile to a conjunction over the probe's set fields. A probe with
    /// no set fields yields `And(vec![])`, which matches every row.
    pub fn to_filter(&self) -> Filter {
        let predicates = CustomerField::ALL
            .iter()
            .filter_map(|&field| {
                self.probe
                    .value_of(field)
                    .map(|value| self.matcher.predicate(field, value))
            })
            .collect();
        Filter::And(predicates)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
