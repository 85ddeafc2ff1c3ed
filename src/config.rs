//! Build-time options and query parameter-name configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Options threaded through every `build` call in the filter tree.
///
/// Supplied fresh at each top-level build invocation and propagated unchanged
/// to every descendant; never stored.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct BuildOptions {
    /// Percent-encode operator symbols, connector tokens and quoted values.
    /// Disable when the surrounding HTTP layer encodes the string itself,
    /// e.g. when the query is sent in a request body instead of a URL.
    #[serde(default = "default_true")]
    pub encode_string: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            encode_string: true,
        }
    }
}

impl BuildOptions {
    /// Options that emit the raw grammar without percent-encoding.
    pub fn unencoded() -> Self {
        Self {
            encode_string: false,
        }
    }
}

/// Per-expression formatting options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExpressionOptions {
    /// Emit date values as a UTC timestamp (`YYYY-MM-DDTHH:mm:ss.SSSZ`)
    /// instead of a local calendar date (`YYYY-MM-DD`).
    #[serde(default)]
    pub include_timestamp: bool,
}

/// Parameter names for each section of the query string.
///
/// Servers differ in what they call these; every keyword can be overridden,
/// either in code or from a configuration file via [`Keywords::load`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Keywords {
    #[serde(default = "default_where")]
    pub where_keyword: String,
    #[serde(default = "default_order_by")]
    pub order_by_keyword: String,
    #[serde(default = "default_page_size")]
    pub page_size_keyword: String,
    #[serde(default = "default_include_total_count")]
    pub include_total_count_keyword: String,
    #[serde(default = "default_page_number")]
    pub page_number_keyword: String,
}

impl Default for Keywords {
    fn default() -> Self {
        Self {
            where_keyword: default_where(),
            order_by_keyword: default_order_by(),
            page_size_keyword: default_page_size(),
            include_total_count_keyword: default_include_total_count(),
            page_number_keyword: default_page_number(),
        }
    }
}

impl Keywords {
    /// Load keyword overrides from a configuration file (YAML, TOML or JSON,
    /// detected from the extension). Missing keys keep their defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let settings = ::config::Config::builder()
            .add_source(::config::File::from(path))
            .build()?;
        let keywords: Keywords = settings.try_deserialize()?;
        tracing::debug!("Loaded keyword overrides from {:?}", path);
        Ok(keywords)
    }
}

fn default_true() -> bool {
    true
}

fn default_where() -> String {
    "$where".to_string()
}

fn default_order_by() -> String {
    "$orderBy".to_string()
}

fn default_page_size() -> String {
    "$pageSize".to_string()
}

fn default_include_total_count() -> String {
    "$includeTotalCount".to_string()
}

fn default_page_number() -> String {
    "$pageNumber".to_string()
}
