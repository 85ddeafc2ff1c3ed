//! Fluent facade for assembling filter lists in a readable way.
//!
//! The chain moves through three states: [`FilterBuilder`] (pick a column or
//! splice in a prebuilt group), [`ColumnBuilder`] (pick an operator and
//! value), and [`CompleteBuilder`] (continue with `and`/`or` or finish with
//! `to_list`). Each call consumes its receiver, so an unfinished chain
//! cannot be built.
//!
//! ```
//! use rsql_criteria::{BuildOptions, FilterBuilder};
//!
//! let list = FilterBuilder::new()
//!     .column("blah")
//!     .equal_to("123")
//!     .or()
//!     .column("test")
//!     .equal_to("456")
//!     .to_list();
//! assert_eq!(
//!     list.build(&BuildOptions::unencoded()),
//!     "(blah=in=\"123\" or test=in=\"456\")"
//! );
//! ```

use crate::filter::{
    Connector, CustomOperator, FilterExpression, FilterList, FilterNode, Operator,
};
use crate::value::Value;

/// Start state: nothing pending.
#[derive(Debug, Default)]
pub struct FilterBuilder {
    list: FilterList,
    connector: Connector,
}

impl FilterBuilder {
    pub fn new() -> Self {
        FilterBuilder::default()
    }

    /// Begin an expression on the named column.
    pub fn column(self, name: impl Into<String>) -> ColumnBuilder {
        ColumnBuilder {
            builder: self,
            column: name.into(),
        }
    }

    /// Splice a prebuilt expression or list in as one member.
    pub fn group(self, group: impl Into<FilterNode>) -> CompleteBuilder {
        CompleteBuilder {
            builder: self,
            pending: group.into(),
        }
    }

    fn push(&mut self, node: FilterNode) {
        match self.connector {
            Connector::And => self.list.and(node),
            Connector::Or => self.list.or(node),
        }
    }
}

/// A column has been named; an operator call completes the expression.
#[derive(Debug)]
pub struct ColumnBuilder {
    builder: FilterBuilder,
    column: String,
}

impl ColumnBuilder {
    fn complete(self, operator: Operator, value: Value) -> CompleteBuilder {
        CompleteBuilder {
            pending: FilterExpression::new(self.column, operator, value).into(),
            builder: self.builder,
        }
    }

    pub fn equal_to(self, value: impl Into<Value>) -> CompleteBuilder {
        self.complete(Operator::Equal, value.into())
    }

    pub fn not_equal_to(self, value: impl Into<Value>) -> CompleteBuilder {
        self.complete(Operator::NotEqual, value.into())
    }

    pub fn like(self, value: impl Into<Value>) -> CompleteBuilder {
        self.complete(Operator::Like, value.into())
    }

    pub fn contains(self, value: impl Into<Value>) -> CompleteBuilder {
        self.complete(Operator::Contains, value.into())
    }

    pub fn does_not_contain(self, value: impl Into<Value>) -> CompleteBuilder {
        self.complete(Operator::DoesNotContain, value.into())
    }

    pub fn starts_with(self, value: impl Into<Value>) -> CompleteBuilder {
        self.complete(Operator::StartsWith, value.into())
    }

    pub fn ends_with(self, value: impl Into<Value>) -> CompleteBuilder {
        self.complete(Operator::EndsWith, value.into())
    }

    pub fn greater_than(self, value: impl Into<Value>) -> CompleteBuilder {
        self.complete(Operator::GreaterThan, value.into())
    }

    pub fn greater_than_or_equal_to(self, value: impl Into<Value>) -> CompleteBuilder {
        self.complete(Operator::GreaterThanOrEqual, value.into())
    }

    pub fn less_than(self, value: impl Into<Value>) -> CompleteBuilder {
        self.complete(Operator::LessThan, value.into())
    }

    pub fn less_than_or_equal_to(self, value: impl Into<Value>) -> CompleteBuilder {
        self.complete(Operator::LessThanOrEqual, value.into())
    }

    pub fn is_in(self, value: impl Into<Value>) -> CompleteBuilder {
        self.complete(Operator::In, value.into())
    }

    pub fn not_in(self, value: impl Into<Value>) -> CompleteBuilder {
        self.complete(Operator::NotIn, value.into())
    }

    pub fn is_null(self) -> CompleteBuilder {
        self.complete(Operator::IsNull, Value::Null)
    }

    pub fn is_not_null(self) -> CompleteBuilder {
        self.complete(Operator::IsNotNull, Value::Null)
    }

    pub fn is_empty(self) -> CompleteBuilder {
        self.complete(Operator::IsEmpty, Value::Null)
    }

    pub fn is_not_empty(self) -> CompleteBuilder {
        self.complete(Operator::IsNotEmpty, Value::Null)
    }

    /// Complete the expression with a caller-supplied custom operator.
    pub fn custom(
        self,
        operator: impl CustomOperator + 'static,
        value: impl Into<Value>,
    ) -> CompleteBuilder {
        CompleteBuilder {
            pending: FilterExpression::custom(self.column, operator, value).into(),
            builder: self.builder,
        }
    }
}

/// An expression is pending; chain on or finish.
#[derive(Debug)]
pub struct CompleteBuilder {
    builder: FilterBuilder,
    pending: FilterNode,
}

impl CompleteBuilder {
    /// Commit the pending expression and join the next one with `and`.
    pub fn and(self) -> FilterBuilder {
        let mut builder = self.builder;
        builder.push(self.pending);
        builder.connector = Connector::And;
        builder
    }

    /// Commit the pending expression and join the next one with `or`.
    pub fn or(self) -> FilterBuilder {
        let mut builder = self.builder;
        builder.push(self.pending);
        builder.connector = Connector::Or;
        builder
    }

    /// Commit the pending expression and return the accumulated list, ready
    /// to attach to a [`Criteria`](crate::Criteria) or nest in another list.
    pub fn to_list(self) -> FilterList {
        let mut builder = self.builder;
        builder.push(self.pending);
        builder.list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BuildOptions;

    fn raw(list: &FilterList) -> String {
        list.build(&BuildOptions::unencoded())
    }

    #[test]
    fn single_expression() {
        let list = FilterBuilder::new().column("blah").equal_to("123").to_list();
        assert_eq!(raw(&list), "blah=in=\"123\"");
        assert_eq!(list.build(&BuildOptions::default()), "blah=in=%22123%22");
    }

    #[test]
    fn chained_with_and() {
        let list = FilterBuilder::new()
            .column("blah")
            .equal_to("123")
            .and()
            .column("name")
            .equal_to("John")
            .to_list();
        assert_eq!(raw(&list), "(blah=in=\"123\" and name=in=\"John\")");
    }

    #[test]
    fn chained_with_or() {
        let list = FilterBuilder::new()
            .column("blah")
            .equal_to("123")
            .or()
            .column("name")
            .equal_to("John")
            .to_list();
        assert_eq!(raw(&list), "(blah=in=\"123\" or name=in=\"John\")");
    }

    #[test]
    fn the_connector_applies_to_the_following_expression() {
        let list = FilterBuilder::new()
            .column("a")
            .equal_to("1")
            .or()
            .column("b")
            .equal_to("2")
            .and()
            .column("c")
            .equal_to("3")
            .to_list();
        assert_eq!(
            raw(&list),
            "(a=in=\"1\" or b=in=\"2\" and c=in=\"3\")"
        );
    }

    #[test]
    fn groups_nest_as_single_members() {
        let inner = FilterBuilder::new()
            .column("firstName")
            .equal_to("Jane")
            .and()
            .column("lastName")
            .equal_to("Deer")
            .to_list();

        let list = FilterBuilder::new()
            .column("code")
            .equal_to("123")
            .or()
            .group(inner)
            .to_list();

        assert_eq!(
            raw(&list),
            "(code=in=\"123\" or (firstName=in=\"Jane\" and lastName=in=\"Deer\"))"
        );
    }

    #[test]
    fn null_and_empty_operators_take_no_value() {
        let list = FilterBuilder::new().column("code").is_null().to_list();
        assert_eq!(raw(&list), "code==null");

        let list = FilterBuilder::new().column("code").is_not_empty().to_list();
        assert_eq!(raw(&list), "code!=\"\"");
    }

    #[test]
    fn in_takes_a_vector() {
        let list = FilterBuilder::new()
            .column("code")
            .is_in(vec![123, 456])
            .to_list();
        assert_eq!(raw(&list), "code=in=(123,456)");
    }
}
