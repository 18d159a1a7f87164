//! Parameter value serialization following the OpenAPI parameter styles.
//!
//! Each style maps to an RFC 6570 URI template expansion:
//!
//! | Location | Style            | Template / shape           |
//! |----------|------------------|----------------------------|
//! | path     | `simple`         | `{name}`                   |
//! | path     | `label`          | `{.name}`                  |
//! | path     | `matrix`         | `{;name}`                  |
//! | query    | `form`           | `{?name}`                  |
//! | query    | `spaceDelimited` | `name=a%20b`               |
//! | query    | `pipeDelimited`  | `name=a\|b`                |
//! | query    | `deepObject`     | `name[key]=value&...`      |
//! | header   | `simple`         | `{name}`                   |
//! | cookie   | `form`           | `{?name}`                  |
//!
//! An `explode` flag appends `*` to the variable. Unsupported combinations
//! are logged and produce an empty fragment.

use percent_encoding::percent_decode_str;
use serde_json::Value;
use tracing::warn;

use crate::operation::{ParamLocation, ParamStyle, Parameter};

mod template;
use self::template::{Operator, encode, expand};

/// Serializes a parameter value into its percent-encoded wire fragment.
///
/// Query and cookie parameters produce `name=value` pairs (several joined with `&`
/// when exploded), path and header parameters produce the bare value.
///
/// # Example
///
/// ```rust
/// use reqsnip_core::{ParamLocation, ParamStyle, Parameter, serialize_parameter_value};
/// use serde_json::json;
///
/// let tags = Parameter::new("tags", ParamLocation::Query);
/// assert_eq!(serialize_parameter_value(&tags, &json!(["a", "b"])), "tags=a&tags=b");
///
/// let id = Parameter::new("id", ParamLocation::Path).with_style(ParamStyle::Matrix);
/// assert_eq!(serialize_parameter_value(&id, &json!("a b")), ";id=a%20b");
/// ```
pub fn serialize_parameter_value(parameter: &Parameter, value: &Value) -> String {
    let name = parameter.name.as_str();

    if let Some(mime) = &parameter.serialization_mime {
        let content = serialize_with_mime(value, mime);
        return match parameter.location {
            ParamLocation::Path | ParamLocation::Header => content,
            ParamLocation::Query | ParamLocation::Cookie => format!("{name}={content}"),
        };
    }

    let style = parameter.style();
    let explode = parameter.explode();
    match parameter.location {
        ParamLocation::Path => serialize_path(name, style, explode, value),
        ParamLocation::Query => serialize_query(name, style, explode, value),
        ParamLocation::Header => serialize_header(style, explode, value),
        ParamLocation::Cookie => serialize_cookie(name, style, explode, value),
    }
}

/// Serializes a parameter value, then percent-decodes it for readability.
///
/// This is the form used to build query string and cookie collections.
///
/// # Example
///
/// ```rust
/// use reqsnip_core::{ParamLocation, Parameter, serialized_value};
/// use serde_json::json;
///
/// let name = Parameter::new("name", ParamLocation::Query);
/// assert_eq!(serialized_value(&name, &json!("Bob Smith")), "name=Bob Smith");
/// ```
pub fn serialized_value(parameter: &Parameter, value: &Value) -> String {
    let serialized = serialize_parameter_value(parameter, value);
    percent_decode_str(&serialized)
        .decode_utf8_lossy()
        .into_owned()
}

/// Plain text form of a value: strings unquoted, arrays comma-joined,
/// `null` as empty text and objects as compact JSON.
pub(crate) fn value_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::Array(items) => items
            .iter()
            .map(value_to_text)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => value.to_string(),
    }
}

/// Whether a value counts as present: `null`, `false`, zero and `""` do not.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|number| number != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn serialize_with_mime(value: &Value, mime: &str) -> String {
    if !mime.to_ascii_lowercase().contains("json") {
        warn!(%mime, "parameter serialization is only supported for JSON-like media types");
        return String::new();
    }
    value.to_string()
}

fn serialize_path(name: &str, style: ParamStyle, explode: bool, value: &Value) -> String {
    let operator = match style {
        ParamStyle::Label => Operator::Label,
        ParamStyle::Matrix => Operator::Matrix,
        _ => Operator::Simple,
    };
    expand(operator, name, explode, value)
}

fn serialize_form(name: &str, explode: bool, value: &Value) -> String {
    let expanded = expand(Operator::Query, name, explode, value);
    match expanded.strip_prefix('?') {
        Some(rest) => rest.to_string(),
        None => expanded,
    }
}

fn serialize_query(name: &str, style: ParamStyle, explode: bool, value: &Value) -> String {
    match style {
        ParamStyle::Form => serialize_form(name, explode, value),
        ParamStyle::SpaceDelimited => serialize_delimited(name, explode, value, "%20", style),
        ParamStyle::PipeDelimited => serialize_delimited(name, explode, value, "|", style),
        ParamStyle::DeepObject => serialize_deep_object(name, explode, value),
        ParamStyle::Simple | ParamStyle::Label | ParamStyle::Matrix => {
            warn!(?style, %name, "unexpected style for a query parameter");
            String::new()
        }
    }
}

fn serialize_delimited(
    name: &str,
    explode: bool,
    value: &Value,
    delimiter: &str,
    style: ParamStyle,
) -> String {
    let Value::Array(items) = value else {
        warn!(?style, %name, "the style is only applicable to arrays");
        return String::new();
    };
    if explode {
        return serialize_form(name, explode, value);
    }
    let joined = items
        .iter()
        .map(value_to_text)
        .collect::<Vec<_>>()
        .join(delimiter);
    format!("{name}={joined}")
}

fn serialize_deep_object(name: &str, explode: bool, value: &Value) -> String {
    let Value::Object(entries) = value else {
        warn!(%name, "the deepObject style is only applicable to objects");
        return String::new();
    };
    if !explode {
        warn!(%name, "the deepObject style requires explode=true");
        return String::new();
    }
    entries
        .iter()
        .filter(|(_, item)| !item.is_null())
        .map(|(key, item)| format!("{name}[{key}]={}", encode(&value_to_text(item))))
        .collect::<Vec<_>>()
        .join("&")
}

fn serialize_header(style: ParamStyle, explode: bool, value: &Value) -> String {
    if style != ParamStyle::Simple {
        warn!(?style, "unexpected style for a header parameter");
        return String::new();
    }
    expand(Operator::Simple, "", explode, value)
}

fn serialize_cookie(name: &str, style: ParamStyle, explode: bool, value: &Value) -> String {
    if style != ParamStyle::Form {
        warn!(?style, %name, "unexpected style for a cookie parameter");
        return String::new();
    }
    serialize_form(name, explode, value)
}
