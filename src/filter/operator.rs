//! Built-in comparison operators and the custom-operator extension point.

use std::fmt;
use std::sync::Arc;

use crate::value::Value;

/// The closed set of built-in operator kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Equal,
    NotEqual,
    Like,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    StartsWith,
    EndsWith,
    Contains,
    DoesNotContain,
    In,
    NotIn,
    IsNull,
    IsNotNull,
    IsEmpty,
    IsNotEmpty,
}

/// Implement to splice an operator outside the built-in set into an
/// expression.
///
/// The field name is already prepended before `render` is called; the
/// implementation returns the operator symbol plus the rendered value,
/// e.g. `=custom=%22abc%22`. The [`quote`](crate::quote) and
/// [`encode_component`](crate::encode_component) helpers cover the quoting
/// and encoding the built-in operators apply.
pub trait CustomOperator: Send + Sync {
    /// `value` is the original value, `formatted` the canonical textual form
    /// derived from it, and `should_quote` whether a built-in operator would
    /// wrap that form in quotes.
    fn render(&self, value: &Value, formatted: &str, should_quote: bool) -> String;
}

/// Either a built-in operator or a caller-supplied custom one.
///
/// An expression holds exactly one of the two; dispatch is a pattern match
/// with the custom variant delegating entirely to its capability object.
#[derive(Clone)]
pub enum FilterOperator {
    BuiltIn(Operator),
    Custom(Arc<dyn CustomOperator>),
}

impl fmt::Debug for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterOperator::BuiltIn(operator) => f.debug_tuple("BuiltIn").field(operator).finish(),
            FilterOperator::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl From<Operator> for FilterOperator {
    fn from(operator: Operator) -> Self {
        FilterOperator::BuiltIn(operator)
    }
}
