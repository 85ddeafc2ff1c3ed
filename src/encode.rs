//! Quoting and percent-encoding helpers shared by the filter tree.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::config::BuildOptions;

/// Characters escaped by URI-component encoding: every ASCII character except
/// alphanumerics and `- _ . ~ ! * ' ( )`. Non-ASCII bytes are always escaped.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'!')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a string as a URI component.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Wrap a formatted value in double quotes.
///
/// Exported for [`CustomOperator`](crate::CustomOperator) implementations,
/// which receive the unquoted value text and decide quoting themselves.
pub fn quote(value: &str) -> String {
    format!("\"{value}\"")
}

/// Quote and/or percent-encode a formatted value per the build options.
pub(crate) fn build_value(value: &str, should_quote: bool, options: &BuildOptions) -> String {
    let quoted = if should_quote {
        quote(value)
    } else {
        value.to_string()
    };
    if options.encode_string {
        encode_component(&quoted)
    } else {
        quoted
    }
}

/// Percent-encode a literal token (operator symbol or connector) as a whole
/// unit per the build options.
pub(crate) fn build_symbol(symbol: &str, options: &BuildOptions) -> String {
    if options.encode_string {
        encode_component(symbol)
    } else {
        symbol.to_string()
    }
}
