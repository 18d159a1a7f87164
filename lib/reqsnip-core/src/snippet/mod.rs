//! Snippet renderers.
//!
//! Every renderer reads the same [`ResolvedRequest`] and writes the source
//! text of one client:
//!
//! - [`CurlSnippet`] - a `curl` command line with shell line continuations
//! - [`PythonSnippet`] - a Python script using `requests`
//!
//! [`SnippetTarget`] selects a renderer at runtime.
//!
//! # Example
//!
//! ```rust
//! use http::Method;
//! use reqsnip_core::{Operation, SnippetConfig, SnippetTarget};
//!
//! let operation = Operation::new(Method::GET, "/pet/1", "https://example.com");
//! let snippet = SnippetTarget::Curl.render_operation(&operation, &SnippetConfig::default())?;
//!
//! assert!(snippet.starts_with(r#"curl -i -X GET "https://example.com/pet/1""#));
//! # Ok::<(), reqsnip_core::SnippetError>(())
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::SnippetError;
use crate::operation::Operation;
use crate::request::ResolvedRequest;
use crate::serialize::{is_truthy, value_to_text};

mod config;
pub use self::config::{SnippetConfig, SnippetConfigBuilder};

mod curl;
pub use self::curl::CurlSnippet;

mod python;
pub use self::python::PythonSnippet;

/// Renders a resolved request as source text.
pub trait RenderSnippet {
    /// Renders the request.
    ///
    /// # Errors
    ///
    /// Fails when a relative URL cannot be resolved or a collection cannot be encoded.
    fn render(&self, request: &ResolvedRequest) -> Result<String, SnippetError>;

    /// Resolves then renders an operation.
    ///
    /// # Errors
    ///
    /// Fails when the operation cannot be resolved, see [`Operation::resolve`],
    /// or when rendering fails.
    fn render_operation(&self, operation: &Operation) -> Result<String, SnippetError> {
        let request = operation.resolve()?;
        self.render(&request)
    }
}

/// The available snippet renderers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum SnippetTarget {
    /// `curl` command line.
    #[display("curl")]
    Curl,
    /// Python `requests` script.
    #[display("python")]
    Python,
}

impl SnippetTarget {
    /// Every target, in display order.
    pub const ALL: [Self; 2] = [Self::Curl, Self::Python];

    /// Renders a resolved request.
    ///
    /// # Errors
    ///
    /// See [`RenderSnippet::render`].
    pub fn render(
        self,
        request: &ResolvedRequest,
        config: &SnippetConfig,
    ) -> Result<String, SnippetError> {
        match self {
            Self::Curl => CurlSnippet::new(config.clone()).render(request),
            Self::Python => PythonSnippet::new(config.clone()).render(request),
        }
    }

    /// Resolves then renders an operation.
    ///
    /// # Errors
    ///
    /// See [`RenderSnippet::render_operation`].
    pub fn render_operation(
        self,
        operation: &Operation,
        config: &SnippetConfig,
    ) -> Result<String, SnippetError> {
        let request = operation.resolve()?;
        self.render(&request, config)
    }
}

/// How a value body is written in a snippet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum BodyLiteral {
    /// Serialized JSON, written as-is.
    Json(String),
    /// Text with single quotes escaped for a single-quoted literal.
    Text(String),
}

/// Escapes single quotes as `'"'"'`.
fn escape_single_quotes(text: &str) -> String {
    text.replace('\'', r#"'"'"'"#)
}

/// Chooses how a value body is written, `None` for `null`, `false`, `0` and `""`.
///
/// Objects and arrays go through `to_json`, falling back to text on failure.
pub(crate) fn body_literal(
    value: &Value,
    to_json: impl FnOnce(&Value) -> serde_json::Result<String>,
) -> Option<BodyLiteral> {
    if !is_truthy(value) {
        return None;
    }
    if value.is_object() || value.is_array() {
        match to_json(value) {
            Ok(json) => return Some(BodyLiteral::Json(json)),
            Err(err) => warn!(%err, "cannot serialize the body as JSON, writing it as text"),
        }
    }
    Some(BodyLiteral::Text(escape_single_quotes(&value_to_text(value))))
}

#[cfg(test)]
mod tests {
    use http::Method;
    use serde_json::json;

    use super::*;

    #[test]
    fn should_escape_single_quotes() {
        insta::assert_snapshot!(escape_single_quotes("it's 'quoted'"), @r#"it'"'"'s '"'"'quoted'"'"'"#);
    }

    #[test]
    fn should_choose_body_literal() {
        let to_json = |value: &Value| serde_json::to_string(value);

        assert_eq!(body_literal(&json!(null), to_json), None);
        assert_eq!(body_literal(&json!(""), to_json), None);
        assert_eq!(body_literal(&json!(0), to_json), None);
        assert_eq!(
            body_literal(&json!({"a": "it's"}), to_json),
            Some(BodyLiteral::Json(r#"{"a":"it's"}"#.to_string()))
        );
        assert_eq!(
            body_literal(&json!(["a"]), to_json),
            Some(BodyLiteral::Json(r#"["a"]"#.to_string()))
        );
        assert_eq!(
            body_literal(&json!("<pet name='x'/>"), to_json),
            Some(BodyLiteral::Text(r#"<pet name='"'"'x'"'"'/>"#.to_string()))
        );
        assert_eq!(
            body_literal(&json!(42), to_json),
            Some(BodyLiteral::Text("42".to_string()))
        );
    }

    #[test]
    fn should_fall_back_to_text_when_json_fails() {
        let failing = |_: &Value| serde_json::from_str::<String>("not json");

        assert_eq!(
            body_literal(&json!({"a": 1}), failing),
            Some(BodyLiteral::Text(r#"{"a":1}"#.to_string()))
        );
    }

    #[test]
    fn should_render_every_target() {
        let operation = Operation::new(Method::GET, "/pet/1", "https://example.com");
        let config = SnippetConfig::default();

        for target in SnippetTarget::ALL {
            let snippet = target
                .render_operation(&operation, &config)
                .expect("renderable");
            assert!(snippet.contains("https://example.com/pet/1"), "{target}");
        }
    }

    #[test]
    fn should_deserialize_target() {
        let target: SnippetTarget = serde_json::from_value(json!("python")).expect("a target");
        assert_eq!(target, SnippetTarget::Python);
        assert_eq!(SnippetTarget::Curl.to_string(), "curl");
    }
}
