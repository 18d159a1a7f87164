use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use tracing::debug;

use super::SearchParams;
use crate::operation::{ApiKeyLocation, Operation, ParamLocation, Parameter};
use crate::serialize::{serialize_parameter_value, serialized_value};

/// Characters escaped when a credential is written into a query string.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// The resolved URL of a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchUrl {
    /// Server URL, substituted path, query string and query credentials.
    pub full_url: String,
    /// Server URL and substituted path, without query string.
    pub base_fetch_url: String,
    /// Query parameters, in declaration order.
    pub query_params: SearchParams,
    /// Cookie parameters and cookie credentials, in declaration order.
    pub cookie_params: SearchParams,
}

fn replace_path_param(path: &str, param_name: &str, value: &str) -> String {
    let pattern = ["{", param_name, "}"].concat();
    path.replacen(&pattern, value, 1)
}

fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

fn parameters_in(
    operation: &Operation,
    location: ParamLocation,
) -> impl Iterator<Item = &Parameter> + '_ {
    operation
        .parameters
        .iter()
        .filter(move |param| param.location == location)
}

/// Appends a query parameter value, splitting exploded fragments (`a=1&a=2`)
/// into one value per piece.
fn append_query_value(params: &mut SearchParams, param: &Parameter, serialized: &str) {
    if serialized.contains('&') {
        for piece in serialized.split('&') {
            let value = piece.rsplit('=').next().unwrap_or_default();
            params.append(&param.name, value);
        }
    } else if let Some(value) = serialized.split('=').nth(1) {
        params.append(&param.name, value);
    } else {
        debug!(name = %param.name, "query parameter serialized to nothing");
    }
}

impl Operation {
    /// Builds the request URL from the path template, the query, cookie
    /// parameters and the query credentials.
    ///
    /// Parameters are processed in declaration order. Placeholders without a
    /// matching path parameter example are left verbatim.
    ///
    /// # Example
    ///
    /// ```rust
    /// use http::Method;
    /// use reqsnip_core::{Operation, ParamLocation, Parameter};
    ///
    /// let operation = Operation::new(Method::GET, "/pet/{petId}", "https://example.com/")
    ///     .add_parameter(Parameter::new("petId", ParamLocation::Path).with_example(123))
    ///     .add_parameter(Parameter::new("name", ParamLocation::Query).with_example("Bob"));
    ///
    /// let url = operation.build_fetch_url();
    /// assert_eq!(url.base_fetch_url, "https://example.com/pet/123");
    /// assert_eq!(url.full_url, "https://example.com/pet/123?name=Bob");
    /// ```
    pub fn build_fetch_url(&self) -> FetchUrl {
        let mut path = self.path.clone();
        for param in parameters_in(self, ParamLocation::Path) {
            let Some(example) = &param.example else {
                continue;
            };
            let value = serialize_parameter_value(param, example);
            path = replace_path_param(&path, &param.name, &value);
        }

        let mut query_params = SearchParams::new();
        for param in parameters_in(self, ParamLocation::Query) {
            if let Some(value) = param.query_value() {
                let serialized = serialized_value(param, value);
                append_query_value(&mut query_params, param, &serialized);
            }
        }

        let server_url = self
            .server_url
            .strip_suffix('/')
            .unwrap_or(&self.server_url);
        let base_fetch_url = format!("{server_url}{path}");

        let mut full_url = base_fetch_url.clone();
        if !query_params.is_empty() {
            full_url.push('?');
            full_url.push_str(&query_params.to_raw_string());
        }

        for scheme in &self.security {
            if scheme.location != ApiKeyLocation::Query {
                continue;
            }
            let separator = if full_url.contains('?') { '&' } else { '?' };
            full_url.push(separator);
            full_url.push_str(&scheme.name);
            full_url.push('=');
            full_url.push_str(&encode_uri_component(&scheme.display_name));
        }

        let mut cookie_params = SearchParams::new();
        for param in parameters_in(self, ParamLocation::Cookie) {
            let Some(value) = param.cookie_value() else {
                continue;
            };
            let serialized = serialized_value(param, value);
            if let Some(value) = serialized.split('=').nth(1) {
                cookie_params.append(&param.name, value);
            }
        }
        for scheme in &self.security {
            if scheme.location == ApiKeyLocation::Cookie {
                cookie_params.append(&scheme.name, &scheme.display_name);
            }
        }

        debug!(%full_url, cookies = cookie_params.len(), "fetch url resolved");
        FetchUrl {
            full_url,
            base_fetch_url,
            query_params,
            cookie_params,
        }
    }
}
