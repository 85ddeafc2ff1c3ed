//! Top-level assembly of filters, ordering and paging into a query string.

use crate::config::{BuildOptions, Keywords};
use crate::encode::encode_component;
use crate::filter::FilterList;
use crate::order::OrderByList;

/// Brings together filtering, sorting and pagination for one query.
///
/// Fields may be set in any order; `build` always emits sections as
/// where, orderBy, pageSize (with total count), pageNumber.
#[derive(Debug, Clone)]
pub struct Criteria {
    pub filters: FilterList,
    pub order_by: OrderByList,
    pub page_size: Option<u64>,
    pub page_number: Option<u64>,
    /// Ask the server to include the total row count alongside a page.
    /// Only emitted when a page size is set.
    pub include_total_count: bool,
    keywords: Keywords,
}

impl Default for Criteria {
    fn default() -> Self {
        Criteria::with_keywords(Keywords::default())
    }
}

impl Criteria {
    /// Criteria with the default `$`-prefixed parameter names.
    pub fn new() -> Self {
        Criteria::default()
    }

    /// Criteria with overridden parameter names.
    pub fn with_keywords(keywords: Keywords) -> Self {
        Criteria {
            filters: FilterList::new(),
            order_by: OrderByList::new(),
            page_size: None,
            page_number: None,
            include_total_count: true,
            keywords,
        }
    }

    /// Merge another criteria's filters into this one with an `and`
    /// connector. The other criteria's ordering and paging are discarded;
    /// only this criteria's survive.
    pub fn and(&mut self, other: Criteria) {
        self.filters.and(other.filters);
    }

    /// Merge another criteria's filters into this one with an `or`
    /// connector. The other criteria's ordering and paging are discarded.
    pub fn or(&mut self, other: Criteria) {
        self.filters.or(other.filters);
    }

    /// Assemble the ampersand-joined query string for the server-side API.
    pub fn build(&self, options: &BuildOptions) -> String {
        let mut parts: Vec<String> = Vec::new();

        let where_clause = self.filters.build(options);
        if !where_clause.is_empty() {
            parts.push(format!("{}={}", self.keywords.where_keyword, where_clause));
        }

        let order_by_clause = self.order_by.build();
        if !order_by_clause.is_empty() {
            let order_by_clause = if options.encode_string {
                encode_component(&order_by_clause)
            } else {
                order_by_clause
            };
            parts.push(format!(
                "{}={}",
                self.keywords.order_by_keyword, order_by_clause
            ));
        }

        if let Some(page_size) = self.page_size {
            parts.push(format!("{}={}", self.keywords.page_size_keyword, page_size));
            if self.include_total_count {
                parts.push(format!("{}=true", self.keywords.include_total_count_keyword));
            }
        }

        if let Some(page_number) = self.page_number {
            parts.push(format!(
                "{}={}",
                self.keywords.page_number_keyword, page_number
            ));
        }

        tracing::debug!("Assembled query string ({} parts)", parts.len());
        parts.join("&")
    }
}
