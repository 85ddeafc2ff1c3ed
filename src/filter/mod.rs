//! Filter predicates: single expressions, operator dispatch, and nestable
//! lists combined by `and`/`or` connectors.

mod expression;
mod list;
mod operator;

pub use expression::FilterExpression;
pub use list::{Connector, FilterList, FilterNode};
pub use operator::{CustomOperator, FilterOperator, Operator};
