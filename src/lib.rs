//! Client-side builder for RSQL-style query strings.
//!
//! Assembles filter predicates, ordering clauses and pagination parameters
//! into a single encoded query string for a server-side filtering API.
//! Serialization is one-way; nothing here parses RSQL text back.
//!
//! Output grammar:
//!
//! ```text
//! query      := part ('&' part)*
//! part       := $where '=' predicate
//!             | $orderBy '=' orderSpec
//!             | $pageSize '=' integer
//!             | $includeTotalCount '=true'
//!             | $pageNumber '=' integer
//! predicate  := field ('=in='|'!='|'=='|'=out='|'>'|'>='|'<'|'<='|custom) value
//!             | '(' predicate ((' and '|' or ') predicate)* ')'
//! orderSpec  := field (' asc'|' desc') (',' field (' asc'|' desc'))*
//! ```
//!
//! All five parameter names are overridable via [`Keywords`]; percent
//! encoding is controlled per build call via [`BuildOptions`].
//!
//! ```
//! use rsql_criteria::{BuildOptions, Criteria, Direction, FilterExpression, Operator};
//!
//! let mut criteria = Criteria::new();
//! criteria
//!     .filters
//!     .and(FilterExpression::new("code", Operator::Equal, "abc"));
//! criteria.order_by.add("code", Direction::Asc);
//! criteria.page_size = Some(10);
//!
//! assert_eq!(
//!     criteria.build(&BuildOptions::default()),
//!     "$where=code=in=%22abc%22&$orderBy=code%20asc&$pageSize=10&$includeTotalCount=true"
//! );
//! ```

mod builder;
mod config;
mod criteria;
mod encode;
mod filter;
mod order;
mod value;

pub use builder::{ColumnBuilder, CompleteBuilder, FilterBuilder};
pub use config::{BuildOptions, ExpressionOptions, Keywords};
pub use criteria::Criteria;
pub use encode::{encode_component, quote};
pub use filter::{
    Connector, CustomOperator, FilterExpression, FilterList, FilterNode, FilterOperator, Operator,
};
pub use order::{Direction, OrderByExpression, OrderByList};
pub use value::{Scalar, Value};
