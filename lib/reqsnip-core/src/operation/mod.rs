//! Declarative description of a documented HTTP operation.
//!
//! This module provides the input model consumed by request assembly:
//!
//! - [`Operation`] - method, path template, server URL and the items below
//! - [`Parameter`] - path, query, header and cookie parameters with their examples
//! - [`SecurityScheme`] - static credentials to inject
//! - [`MediaContent`] - request body media types with example payloads
//!
//! Every type can be deserialized from the camelCase JSON (or YAML) shape
//! produced by an API documentation loader.

use std::str::FromStr;

use http::Method;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::SnippetError;

mod param;
pub use self::param::{ParamLocation, ParamSchema, ParamStyle, Parameter};

mod security;
pub use self::security::{ApiKeyLocation, SecurityScheme};

mod body;
pub use self::body::{MediaContent, MediaType, MediaTypeExample};

/// A documented HTTP operation to render as request snippets.
///
/// # Example
///
/// ```rust
/// use http::Method;
/// use reqsnip_core::{Operation, ParamLocation, Parameter};
///
/// let operation = Operation::new(Method::GET, "/pet/{petId}", "https://petstore.example.com/v1/")
///     .add_parameter(Parameter::new("petId", ParamLocation::Path).with_example(123));
///
/// let request = operation.resolve()?;
/// assert_eq!(request.url.full_url, "https://petstore.example.com/v1/pet/123");
/// # Ok::<(), reqsnip_core::SnippetError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// The HTTP method, upper-cased.
    #[serde(
        serialize_with = "serialize_method",
        deserialize_with = "deserialize_method"
    )]
    pub method: Method,
    /// The path template, always starting with `/`.
    #[serde(deserialize_with = "deserialize_path")]
    pub path: String,
    /// The server base URL, may be relative to the documentation page.
    #[serde(default)]
    pub server_url: String,
    /// The declared parameters, in declaration order.
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// The credentials to inject.
    #[serde(default, alias = "apiKeys")]
    pub security: Vec<SecurityScheme>,
    /// The request body content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_body: Option<MediaContent>,
}

impl Operation {
    /// Creates an operation without parameters, credentials or body.
    pub fn new(method: Method, path: impl Into<String>, server_url: impl Into<String>) -> Self {
        Self {
            method,
            path: normalize_path(path.into()),
            server_url: server_url.into(),
            parameters: Vec::new(),
            security: Vec::new(),
            request_body: None,
        }
    }

    /// Creates an operation from a method name, e.g. `"get"`.
    ///
    /// # Errors
    ///
    /// Returns [`SnippetError::InvalidMethod`] if the name is not a valid HTTP method token.
    pub fn parse(
        method: &str,
        path: impl Into<String>,
        server_url: impl Into<String>,
    ) -> Result<Self, SnippetError> {
        let method = parse_method(method)?;
        Ok(Self::new(method, path, server_url))
    }

    /// Adds a parameter.
    pub fn add_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Adds a credential.
    pub fn add_security(mut self, scheme: SecurityScheme) -> Self {
        self.security.push(scheme);
        self
    }

    /// Sets the request body content.
    pub fn with_request_body(mut self, content: MediaContent) -> Self {
        self.request_body = Some(content);
        self
    }
}

fn normalize_path(path: String) -> String {
    if path.starts_with('/') {
        path
    } else {
        format!("/{path}")
    }
}

fn parse_method(method: &str) -> Result<Method, SnippetError> {
    Method::from_str(&method.to_ascii_uppercase()).map_err(|_| SnippetError::InvalidMethod {
        method: method.to_string(),
    })
}

fn serialize_method<S>(method: &Method, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(method.as_str())
}

fn deserialize_method<'de, D>(deserializer: D) -> Result<Method, D::Error>
where
    D: Deserializer<'de>,
{
    let method = String::deserialize(deserializer)?;
    parse_method(&method).map_err(serde::de::Error::custom)
}

fn deserialize_path<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(normalize_path)
}
