//! # Reqsnip Core
//!
//! Render copy-pasteable HTTP request snippets from API documentation.
//!
//! An [`Operation`] describes a documented endpoint: method, path template,
//! server URL, parameters with example values, static credentials and an
//! example request body. This crate turns it into:
//!
//! - **[`CurlSnippet`]** - a `curl` command line
//! - **[`PythonSnippet`]** - a Python script using the `requests` library
//!
//! ## Quick Start
//!
//! ```rust
//! use http::Method;
//! use reqsnip_core::{
//!     MediaContent, MediaType, Operation, ParamLocation, Parameter, SnippetConfig, SnippetTarget,
//! };
//! use serde_json::json;
//!
//! let operation = Operation::new(Method::POST, "/pet/{petId}", "https://petstore.example.com")
//!     .add_parameter(Parameter::new("petId", ParamLocation::Path).with_example(123))
//!     .with_request_body(MediaContent::new(MediaType::with_example(
//!         "application/json",
//!         json!({"id": "5678", "foo": "bar"}),
//!     )));
//!
//! let curl = SnippetTarget::Curl.render_operation(&operation, &SnippetConfig::default())?;
//! assert!(curl.contains(r#"-d '{"id":"5678","foo":"bar"}'"#));
//!
//! let python = SnippetTarget::Python.render_operation(&operation, &SnippetConfig::default())?;
//! assert!(python.contains("data=payload"));
//! # Ok::<(), reqsnip_core::SnippetError>(())
//! ```
//!
//! ## Relative server URLs
//!
//! Server URLs such as `/api/v3` are resolved against the page showing the
//! snippet, see [`SnippetConfig`]:
//!
//! ```rust
//! use http::uri::Scheme;
//! use reqsnip_core::{Operation, RenderSnippet, SnippetConfig, CurlSnippet};
//!
//! let config = SnippetConfig::builder()
//!     .with_scheme(Scheme::HTTPS)
//!     .with_host("petstore.example.com")
//!     .with_port(443)
//!     .build()?;
//!
//! let operation = Operation::parse("get", "/pet/1", "/api/v3")?;
//! let curl = CurlSnippet::new(config).render_operation(&operation)?;
//! assert!(curl.starts_with(r#"curl -i -X GET "https://petstore.example.com/api/v3/pet/1""#));
//! # Ok::<(), reqsnip_core::SnippetError>(())
//! ```
//!
//! ## Parameter serialization
//!
//! Parameter values are serialized following the OpenAPI `style` and `explode`
//! keywords, see [`serialize_parameter_value`].
//!
//! ## Features
//!
//! - `yaml`: load an [`Operation`] from a YAML description with `Operation::from_yaml`.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (`warn` for values that cannot be
//! serialized with their declared style, `debug` during request assembly).
//! Install a subscriber to see them.

mod error;
pub use self::error::SnippetError;

mod operation;
pub use self::operation::{
    ApiKeyLocation, MediaContent, MediaType, MediaTypeExample, Operation, ParamLocation,
    ParamSchema, ParamStyle, Parameter, SecurityScheme,
};

pub mod object;

mod serialize;
pub use self::serialize::{serialize_parameter_value, serialized_value};

mod request;
pub use self::request::{
    FetchBody, FetchBodyOptions, FetchUrl, FileRef, FormValue, RequestHeaders, ResolvedRequest,
    SearchParams,
};

mod snippet;
pub use self::snippet::{
    CurlSnippet, PythonSnippet, RenderSnippet, SnippetConfig, SnippetConfigBuilder, SnippetTarget,
};

#[cfg(feature = "yaml")]
mod yaml;
