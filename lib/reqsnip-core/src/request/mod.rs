//! Request assembly: turns an [`Operation`] into a concrete request.
//!
//! The resolved request is language-neutral, each snippet renderer reads it
//! and writes its own syntax. Assembly happens in three independent steps:
//!
//! - [`Operation::build_fetch_url`] - path substitution, query string, cookies
//! - [`Operation::build_fetch_headers`] - credentials, header parameters, content negotiation
//! - [`Operation::build_fetch_body_options`] - body shape chosen from the media type

use http::Method;
use http::header::ACCEPT;
use tracing::debug;

use crate::SnippetError;
use crate::operation::{ApiKeyLocation, Operation, ParamLocation};
use crate::serialize::{is_truthy, value_to_text};

mod body;
pub use self::body::{FetchBody, FetchBodyOptions, FileRef, FormValue};

mod headers;
pub use self::headers::RequestHeaders;

mod params;
pub use self::params::SearchParams;

mod url;
pub use self::url::FetchUrl;

/// A fully assembled request, ready to be rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRequest {
    /// The HTTP method.
    pub method: Method,
    /// The URL, query and cookies.
    pub url: FetchUrl,
    /// The headers, in insertion order.
    pub headers: RequestHeaders,
    /// The body, if any.
    pub body: Option<FetchBody>,
}

impl ResolvedRequest {
    /// The `Accept` header value, if any.
    pub fn accept(&self) -> Option<String> {
        self.headers.get(ACCEPT.as_str())
    }
}

impl Operation {
    /// Builds the request headers.
    ///
    /// Headers are added in this order:
    ///
    /// 1. header credentials
    /// 2. header parameters, using `example` when truthy and every entry of `examples` otherwise
    /// 3. `Content-Type` from the first body media type, unless it is multipart
    /// 4. `Accept: application/json` when no `Accept` header was added
    pub fn build_fetch_headers(&self) -> RequestHeaders {
        let mut headers = RequestHeaders::new();

        for scheme in &self.security {
            if scheme.location == ApiKeyLocation::Header {
                headers.append(&scheme.name, &scheme.display_name);
            }
        }

        for param in &self.parameters {
            if param.location != ParamLocation::Header {
                continue;
            }
            match (&param.example, &param.examples) {
                (Some(example), _) if is_truthy(example) => {
                    headers.append(&param.name, value_to_text(example));
                }
                (_, Some(examples)) => {
                    for example in examples {
                        headers.append(&param.name, value_to_text(example));
                    }
                }
                _ => debug!(name = %param.name, "header parameter without example"),
            }
        }

        if let Some(media_type) = self.request_body.as_ref().and_then(|content| content.first())
            && !media_type.name.contains("form-data")
        {
            headers.append("Content-Type", &media_type.name);
        }

        if !headers.contains(ACCEPT.as_str()) {
            headers.append("Accept", mime::APPLICATION_JSON.as_ref());
        }

        headers
    }

    /// Assembles the URL, headers and body of the request.
    ///
    /// # Errors
    ///
    /// Fails when a request body example does not have the shape its media type requires,
    /// see [`Operation::build_fetch_body_options`].
    pub fn resolve(&self) -> Result<ResolvedRequest, SnippetError> {
        let url = self.build_fetch_url();
        let headers = self.build_fetch_headers();
        let FetchBodyOptions { method, body } = self.build_fetch_body_options()?;

        Ok(ResolvedRequest {
            method,
            url,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::operation::{MediaContent, MediaType, Parameter, SecurityScheme};

    fn operation() -> Operation {
        Operation::new(Method::GET, "/pets", "https://example.com")
    }

    #[test]
    fn should_default_accept_to_json() {
        let headers = operation().build_fetch_headers();

        assert_eq!(
            headers.iter().collect::<Vec<_>>(),
            vec![("Accept", "application/json")]
        );
    }

    #[test]
    fn should_order_credentials_parameters_and_content_headers() {
        let headers = Operation::new(Method::POST, "/pets", "https://example.com")
            .add_parameter(
                Parameter::new("X-Request-ID", ParamLocation::Header).with_example("abc"),
            )
            .add_parameter(
                Parameter::new("X-Tags", ParamLocation::Header)
                    .with_example("")
                    .with_examples(["a", "b"]),
            )
            .add_parameter(Parameter::new("X-Missing", ParamLocation::Header))
            .add_parameter(Parameter::new("q", ParamLocation::Query).with_example("ignored"))
            .add_security(SecurityScheme::new("X-API-Key", ApiKeyLocation::Header, "secret"))
            .add_security(SecurityScheme::new("api_key", ApiKeyLocation::Query, "ignored"))
            .with_request_body(MediaContent::new(MediaType::with_example(
                "application/json",
                json!({}),
            )))
            .build_fetch_headers();

        insta::assert_debug_snapshot!(headers.iter().collect::<Vec<_>>(), @r#"
        [
            (
                "X-API-Key",
                "secret",
            ),
            (
                "X-Request-ID",
                "abc",
            ),
            (
                "X-Tags",
                "a",
            ),
            (
                "X-Tags",
                "b",
            ),
            (
                "Content-Type",
                "application/json",
            ),
            (
                "Accept",
                "application/json",
            ),
        ]
        "#);
    }

    #[test]
    fn should_keep_declared_accept_header() {
        let headers = operation()
            .add_parameter(
                Parameter::new("Accept", ParamLocation::Header).with_example("application/xml"),
            )
            .build_fetch_headers();

        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get("accept"), Some("application/xml".to_string()));
    }

    #[test]
    fn should_not_declare_multipart_content_type() {
        let headers = Operation::new(Method::POST, "/pets", "")
            .with_request_body(MediaContent::new(MediaType::with_example(
                "multipart/form-data",
                json!({"name": "doggie"}),
            )))
            .build_fetch_headers();

        assert!(!headers.contains("Content-Type"));
    }

    #[test]
    fn should_resolve_request() {
        let request = Operation::new(Method::GET, "/pet/{petId}", "https://example.com/")
            .add_parameter(Parameter::new("petId", ParamLocation::Path).with_example(123))
            .resolve()
            .expect("resolvable");

        assert_eq!(request.method, Method::GET);
        assert_eq!(request.url.full_url, "https://example.com/pet/123");
        assert_eq!(request.accept(), Some("application/json".to_string()));
        assert_eq!(request.body, None);
    }
}
