//! Typed filter values and their canonical textual form.

use time::{OffsetDateTime, UtcOffset};

use crate::config::{BuildOptions, ExpressionOptions};
use crate::encode::build_value;

/// A scalar element of a list value.
///
/// Lists stay flat: no nested lists and no dates, only these four kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

/// A filter value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// An instant with the caller's UTC offset. The offset supplies the
    /// "local" calendar fields for date-only formatting; the library never
    /// samples a clock or timezone itself.
    Date(OffsetDateTime),
    Null,
    List(Vec<Scalar>),
}

/// A value rendered to text, plus whether the operator layer should wrap it
/// in quotes.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Formatted {
    pub text: String,
    pub should_quote: bool,
}

impl Formatted {
    fn quoted(text: String) -> Self {
        Formatted {
            text,
            should_quote: true,
        }
    }

    fn bare(text: String) -> Self {
        Formatted {
            text,
            should_quote: false,
        }
    }
}

/// Convert a value into its canonical unencoded textual representation.
///
/// List elements are the exception: they are quoted and percent-encoded
/// individually per `build_options`, since they land verbatim inside the
/// parentheses of an `=in=`/`=out=` group.
pub(crate) fn format_value(
    value: &Value,
    expression_options: &ExpressionOptions,
    build_options: &BuildOptions,
) -> Formatted {
    match value {
        Value::Str(text) => Formatted::quoted(escape(text)),
        Value::Int(number) => Formatted::bare(number.to_string()),
        Value::Float(number) => Formatted::bare(number.to_string()),
        Value::Bool(flag) => Formatted::bare(flag.to_string()),
        Value::Null => Formatted::bare("null".to_string()),
        Value::Date(datetime) => {
            if expression_options.include_timestamp {
                let utc = datetime.to_offset(UtcOffset::UTC);
                Formatted::quoted(format!("{}{}", date_string(utc), timestamp_string(utc)))
            } else {
                Formatted::quoted(date_string(*datetime))
            }
        }
        Value::List(items) => {
            let rendered: Vec<String> = items
                .iter()
                .map(|item| match item {
                    Scalar::Int(number) => number.to_string(),
                    Scalar::Float(number) => number.to_string(),
                    Scalar::Str(text) => build_value(&escape(text), true, build_options),
                    Scalar::Bool(flag) => build_value(&flag.to_string(), true, build_options),
                })
                .collect();
            Formatted::bare(rendered.join(","))
        }
    }
}

/// Escape backslashes and double quotes so the value can sit inside quotes.
fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

/// `YYYY-MM-DD` from the datetime's own calendar fields, zero-padded.
/// Years 0-9999 pad to four digits.
fn date_string(datetime: OffsetDateTime) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        datetime.year(),
        u8::from(datetime.month()),
        datetime.day()
    )
}

/// `THH:mm:ss.SSSZ` from a datetime already shifted to UTC.
fn timestamp_string(utc: OffsetDateTime) -> String {
    format!(
        "T{:02}:{:02}:{:02}.{:03}Z",
        utc.hour(),
        utc.minute(),
        utc.second(),
        utc.millisecond()
    )
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Str(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Str(text)
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Value::Int(number.into())
    }
}

impl From<i64> for Value {
    fn from(number: i64) -> Self {
        Value::Int(number)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Value::Float(number)
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Value::Bool(flag)
    }
}

impl From<OffsetDateTime> for Value {
    fn from(datetime: OffsetDateTime) -> Self {
        Value::Date(datetime)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

impl<T: Into<Scalar>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<&str> for Scalar {
    fn from(text: &str) -> Self {
        Scalar::Str(text.to_string())
    }
}

impl From<String> for Scalar {
    fn from(text: String) -> Self {
        Scalar::Str(text)
    }
}

impl From<i32> for Scalar {
    fn from(number: i32) -> Self {
        Scalar::Int(number.into())
    }
}

impl From<i64> for Scalar {
    fn from(number: i64) -> Self {
        Scalar::Int(number)
    }
}

impl From<f64> for Scalar {
    fn from(number: f64) -> Self {
        Scalar::Float(number)
    }
}

impl From<bool> for Scalar {
    fn from(flag: bool) -> Self {
        Scalar::Bool(flag)
    }
}
