use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde_json::Value;

use super::value_to_text;

/// Everything outside the RFC 3986 unreserved set.
const NOT_UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode a value like an RFC 6570 simple string expansion does.
pub(crate) fn encode(value: &str) -> String {
    utf8_percent_encode(value, NOT_UNRESERVED).to_string()
}

/// RFC 6570 expression operators used by parameter styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operator {
    /// `{name}`
    Simple,
    /// `{.name}`
    Label,
    /// `{;name}`
    Matrix,
    /// `{?name}`
    Query,
}

impl Operator {
    fn prefix(self) -> &'static str {
        match self {
            Self::Simple => "",
            Self::Label => ".",
            Self::Matrix => ";",
            Self::Query => "?",
        }
    }

    fn separator(self) -> &'static str {
        match self {
            Self::Simple => ",",
            Self::Label => ".",
            Self::Matrix => ";",
            Self::Query => "&",
        }
    }

    fn is_named(self) -> bool {
        matches!(self, Self::Matrix | Self::Query)
    }

    /// Suffix used by named operators when the value is empty.
    fn if_empty(self) -> &'static str {
        match self {
            Self::Query => "=",
            _ => "",
        }
    }

    fn named_pair(self, name: &str, text: &str) -> String {
        if text.is_empty() {
            [name, self.if_empty()].concat()
        } else {
            [name, "=", encode(text).as_str()].concat()
        }
    }
}

/// Expands a single-variable template such as `{;name*}` with the given value.
///
/// `null`, empty arrays and empty objects are undefined and expand to nothing.
pub(crate) fn expand(operator: Operator, name: &str, explode: bool, value: &Value) -> String {
    let expanded = match value {
        Value::Null => return String::new(),
        Value::Array(items) => {
            let items = items
                .iter()
                .filter(|item| !item.is_null())
                .map(value_to_text)
                .collect::<Vec<_>>();
            if items.is_empty() {
                return String::new();
            }
            expand_list(operator, name, explode, &items)
        }
        Value::Object(entries) => {
            let pairs = entries
                .iter()
                .filter(|(_, item)| !item.is_null())
                .map(|(key, item)| (key.as_str(), value_to_text(item)))
                .collect::<Vec<_>>();
            if pairs.is_empty() {
                return String::new();
            }
            expand_pairs(operator, name, explode, &pairs)
        }
        scalar => {
            let text = value_to_text(scalar);
            if operator.is_named() {
                operator.named_pair(name, &text)
            } else {
                encode(&text)
            }
        }
    };
    [operator.prefix(), expanded.as_str()].concat()
}

fn expand_list(operator: Operator, name: &str, explode: bool, items: &[String]) -> String {
    if explode {
        let parts = items
            .iter()
            .map(|item| {
                if operator.is_named() {
                    operator.named_pair(name, item)
                } else {
                    encode(item)
                }
            })
            .collect::<Vec<_>>();
        return parts.join(operator.separator());
    }

    let joined = items
        .iter()
        .map(|item| encode(item))
        .collect::<Vec<_>>()
        .join(",");
    if operator.is_named() {
        [name, "=", joined.as_str()].concat()
    } else {
        joined
    }
}

fn expand_pairs(operator: Operator, name: &str, explode: bool, pairs: &[(&str, String)]) -> String {
    if explode {
        let parts = pairs
            .iter()
            .map(|(key, item)| {
                if operator.is_named() {
                    operator.named_pair(&encode(key), item)
                } else {
                    [encode(key), "=".to_string(), encode(item)].concat()
                }
            })
            .collect::<Vec<_>>();
        return parts.join(operator.separator());
    }

    let joined = pairs
        .iter()
        .flat_map(|(key, item)| [encode(key), encode(item)])
        .collect::<Vec<_>>()
        .join(",");
    if operator.is_named() {
        [name, "=", joined.as_str()].concat()
    } else {
        joined
    }
}
