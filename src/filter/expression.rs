//! A single field/operator/value predicate.

use std::sync::Arc;

use super::operator::{CustomOperator, FilterOperator, Operator};
use crate::config::{BuildOptions, ExpressionOptions};
use crate::encode::{build_symbol, build_value};
use crate::value::{Value, format_value};

/// One comparison against a single field.
///
/// Immutable once constructed; `build` is a pure function of the fields and
/// the options passed in, so it can be called repeatedly.
#[derive(Debug, Clone)]
pub struct FilterExpression {
    field: String,
    operator: FilterOperator,
    value: Value,
    options: ExpressionOptions,
}

impl FilterExpression {
    /// Expression with a built-in operator and default formatting options.
    pub fn new(field: impl Into<String>, operator: Operator, value: impl Into<Value>) -> Self {
        Self::with_options(field, operator, value, ExpressionOptions::default())
    }

    /// Expression with explicit formatting options.
    pub fn with_options(
        field: impl Into<String>,
        operator: Operator,
        value: impl Into<Value>,
        options: ExpressionOptions,
    ) -> Self {
        FilterExpression {
            field: field.into(),
            operator: FilterOperator::BuiltIn(operator),
            value: value.into(),
            options,
        }
    }

    /// Expression with a caller-supplied custom operator.
    pub fn custom(
        field: impl Into<String>,
        operator: impl CustomOperator + 'static,
        value: impl Into<Value>,
    ) -> Self {
        FilterExpression {
            field: field.into(),
            operator: FilterOperator::Custom(Arc::new(operator)),
            value: value.into(),
            options: ExpressionOptions::default(),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    /// Render the predicate fragment, e.g. `code=in=%22abc%22`.
    pub fn build(&self, options: &BuildOptions) -> String {
        let formatted = format_value(&self.value, &self.options, options);

        let tail = match &self.operator {
            FilterOperator::Custom(custom) => {
                custom.render(&self.value, &formatted.text, formatted.should_quote)
            }
            FilterOperator::BuiltIn(operator) => match operator {
                Operator::Equal => format!(
                    "=in={}",
                    build_value(&formatted.text, formatted.should_quote, options)
                ),
                Operator::NotEqual => format!(
                    "!={}",
                    build_value(&formatted.text, formatted.should_quote, options)
                ),
                // Like quotes unconditionally, whatever the value kind.
                Operator::Like => format!("=={}", build_value(&formatted.text, true, options)),
                Operator::GreaterThan => {
                    format!("{}{}", build_symbol(">", options), formatted.text)
                }
                Operator::GreaterThanOrEqual => {
                    format!("{}{}", build_symbol(">=", options), formatted.text)
                }
                Operator::LessThan => format!("{}{}", build_symbol("<", options), formatted.text),
                Operator::LessThanOrEqual => {
                    format!("{}{}", build_symbol("<=", options), formatted.text)
                }
                Operator::StartsWith => format!(
                    "=={}",
                    build_value(&format!("{}*", formatted.text), true, options)
                ),
                Operator::EndsWith => format!(
                    "=={}",
                    build_value(&format!("*{}", formatted.text), true, options)
                ),
                Operator::Contains => format!(
                    "=={}",
                    build_value(&format!("*{}*", formatted.text), true, options)
                ),
                Operator::DoesNotContain => format!(
                    "!={}",
                    build_value(&format!("*{}*", formatted.text), true, options)
                ),
                // List elements arrive already quoted and encoded; the
                // parentheses and commas stay literal.
                Operator::In => format!("=in=({})", formatted.text),
                Operator::NotIn => format!("=out=({})", formatted.text),
                Operator::IsEmpty => format!("=={}", build_value("\"\"", false, options)),
                Operator::IsNotEmpty => format!("!={}", build_value("\"\"", false, options)),
                Operator::IsNull => "==null".to_string(),
                Operator::IsNotNull => "!=null".to_string(),
            },
        };

        format!("{}{}", self.field, tail)
    }
}
