//! Ordering clauses.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Asc,
    Desc,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Asc => write!(f, "asc"),
            Direction::Desc => write!(f, "desc"),
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "asc" => Ok(Direction::Asc),
            "desc" => Ok(Direction::Desc),
            _ => Err(format!("invalid sort direction: {value}")),
        }
    }
}

/// A single (field, direction) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderByExpression {
    pub field: String,
    pub direction: Direction,
}

impl OrderByExpression {
    pub fn new(field: impl Into<String>, direction: Direction) -> Self {
        OrderByExpression {
            field: field.into(),
            direction,
        }
    }
}

/// Ordered, append-only collection of sort clauses.
#[derive(Debug, Clone, Default)]
pub struct OrderByList {
    items: Vec<OrderByExpression>,
}

impl OrderByList {
    pub fn new() -> Self {
        OrderByList::default()
    }

    pub fn add(&mut self, field: impl Into<String>, direction: Direction) {
        self.items.push(OrderByExpression::new(field, direction));
    }

    pub fn add_expression(&mut self, expression: OrderByExpression) {
        self.items.push(expression);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Join `"field direction"` pairs with `", "`. Never percent-encodes;
    /// encoding, when requested, happens at the criteria layer.
    pub fn build(&self) -> String {
        self.items
            .iter()
            .map(|item| format!("{} {}", item.field, item.direction))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_builds_an_empty_string() {
        assert_eq!(OrderByList::new().build(), "");
    }

    #[test]
    fn single_clause() {
        let mut order_by = OrderByList::new();
        order_by.add("code", Direction::Asc);
        assert_eq!(order_by.build(), "code asc");
    }

    #[test]
    fn clauses_chain_with_comma_space() {
        let mut order_by = OrderByList::new();
        order_by.add_expression(OrderByExpression::new("code", Direction::Desc));
        order_by.add("description", Direction::Asc);
        assert_eq!(order_by.build(), "code desc, description asc");
    }

    #[test]
    fn direction_parses_case_insensitively() {
        assert_eq!("asc".parse::<Direction>().unwrap(), Direction::Asc);
        assert_eq!("DESC".parse::<Direction>().unwrap(), Direction::Desc);
        assert!("sideways".parse::<Direction>().is_err());
    }

    #[test]
    fn direction_displays_lowercase() {
        assert_eq!(Direction::Asc.to_string(), "asc");
        assert_eq!(Direction::Desc.to_string(), "desc");
    }
}
