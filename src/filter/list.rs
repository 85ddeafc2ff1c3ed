//! Ordered, nestable collections of predicates.

use super::expression::FilterExpression;
use crate::config::BuildOptions;
use crate::encode::build_symbol;

/// Logical joiner placed between two adjacent members of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connector {
    #[default]
    And,
    Or,
}

impl Connector {
    fn token(self) -> &'static str {
        match self {
            Connector::And => " and ",
            Connector::Or => " or ",
        }
    }
}

/// A node of the predicate tree: a single expression or a nested list.
#[derive(Debug, Clone)]
pub enum FilterNode {
    Expression(FilterExpression),
    List(FilterList),
}

impl FilterNode {
    pub fn build(&self, options: &BuildOptions) -> String {
        match self {
            FilterNode::Expression(expression) => expression.build(options),
            FilterNode::List(list) => list.build(options),
        }
    }
}

impl From<FilterExpression> for FilterNode {
    fn from(expression: FilterExpression) -> Self {
        FilterNode::Expression(expression)
    }
}

impl From<FilterList> for FilterNode {
    fn from(list: FilterList) -> Self {
        FilterNode::List(list)
    }
}

/// An ordered list of predicates, each tagged with the connector that joins
/// it to the member before it.
///
/// The connector belongs to the later-inserted side, so alternating `and`
/// and `or` insertions produce mixed sequences like `(a and b or c)`.
#[derive(Debug, Clone, Default)]
pub struct FilterList {
    members: Vec<(Connector, FilterNode)>,
}

impl FilterList {
    pub fn new() -> Self {
        FilterList::default()
    }

    /// Append a member joined to its predecessor with `and`.
    pub fn and(&mut self, member: impl Into<FilterNode>) {
        self.push(Connector::And, member.into());
    }

    /// Append a member joined to its predecessor with `or`.
    pub fn or(&mut self, member: impl Into<FilterNode>) {
        self.push(Connector::Or, member.into());
    }

    /// Members that build to nothing are dropped here, once, so they never
    /// contribute a stray connector or an empty parenthesis group.
    fn push(&mut self, connector: Connector, member: FilterNode) {
        if member.build(&BuildOptions::default()).is_empty() {
            return;
        }
        self.members.push((connector, member));
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Join the members in insertion order; wrap in parentheses iff more
    /// than one member is present. Nested lists parenthesize themselves
    /// independently.
    pub fn build(&self, options: &BuildOptions) -> String {
        let mut out = String::new();
        let wrap = self.members.len() > 1;

        if wrap {
            out.push('(');
        }
        for (position, (connector, member)) in self.members.iter().enumerate() {
            if position > 0 {
                out.push_str(&build_symbol(connector.token(), options));
            }
            out.push_str(&member.build(options));
        }
        if wrap {
            out.push(')');
        }

        out
    }
}
