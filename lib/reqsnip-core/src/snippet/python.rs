use serde_json::Value;

use super::{BodyLiteral, RenderSnippet, SnippetConfig, body_literal};
use crate::SnippetError;
use crate::object::group_params_by_key;
use crate::request::{FetchBody, FormValue, ResolvedRequest};

const NEW_LINE: &str = "\n";

/// Renders a Python script using the `requests` library.
///
/// The URL line holds the URL without query string, query parameters are
/// passed with `params=`.
#[derive(Debug, Clone, Default)]
pub struct PythonSnippet {
    config: SnippetConfig,
}

impl PythonSnippet {
    /// Creates a renderer resolving relative URLs against the configured page.
    pub fn new(config: SnippetConfig) -> Self {
        Self { config }
    }
}

/// Pretty-prints pairs as a mapping, repeated keys become lists.
fn grouped_mapping<'a>(
    entries: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> Result<String, SnippetError> {
    let grouped = group_params_by_key(entries);
    let mapping = serde_json::to_string_pretty(&Value::Object(grouped))?;
    Ok(mapping)
}

fn section(name: &str, mapping: &str) -> String {
    format!("{name} = {mapping}{NEW_LINE}{NEW_LINE}")
}

fn payload(body: Option<&FetchBody>) -> Result<String, SnippetError> {
    let payload = match body {
        Some(FetchBody::Form(params)) => {
            format!("payload = {} {NEW_LINE}", params.to_urlencoded()?)
        }
        Some(FetchBody::Multipart(fields)) => {
            let fields = fields.iter().map(|(key, value)| {
                let value = match value {
                    FormValue::Text(text) => text.as_str(),
                    FormValue::File(file) => file.name.as_str(),
                };
                (key.as_str(), value)
            });
            format!("payload = {}", grouped_mapping(fields)?)
        }
        Some(FetchBody::File(file)) => {
            format!("payload = {}", serde_json::to_string_pretty(file)?)
        }
        Some(FetchBody::Value(value)) => {
            match body_literal(value, |value| serde_json::to_string_pretty(value)) {
                Some(BodyLiteral::Json(json)) => format!("payload = {json}"),
                Some(BodyLiteral::Text(text)) => format!("payload = '{text}'{NEW_LINE}"),
                None => String::new(),
            }
        }
        None => String::new(),
    };

    if payload.is_empty() {
        Ok(payload)
    } else {
        Ok(format!("{payload}{NEW_LINE}{NEW_LINE}"))
    }
}

fn response_logging(accept: &str) -> &'static str {
    match accept {
        "application/json" => "print(response.json())",
        "application/octet-stream" => "print(response.content)",
        _ => "print(response.text)",
    }
}

impl RenderSnippet for PythonSnippet {
    fn render(&self, request: &ResolvedRequest) -> Result<String, SnippetError> {
        let imports = format!("import requests{NEW_LINE}{NEW_LINE}");

        let url = self.config.resolve_url(&request.url.base_fetch_url)?;
        let url_line = format!(r#"url = "{url}"{NEW_LINE}{NEW_LINE}"#);

        let headers = grouped_mapping(request.headers.iter())?;
        let headers = if headers == "{}" {
            String::new()
        } else {
            section("headers", &headers)
        };

        let params = if request.url.query_params.is_empty() {
            String::new()
        } else {
            section("params", &grouped_mapping(request.url.query_params.iter())?)
        };

        let cookies = if request.url.cookie_params.is_empty() {
            String::new()
        } else {
            section("cookies", &grouped_mapping(request.url.cookie_params.iter())?)
        };

        let payload = payload(request.body.as_ref())?;

        let method = format!(r#""{}""#, request.method);
        let arguments = [
            (true, method.as_str()),
            (true, "url"),
            (!payload.is_empty(), "data=payload"),
            (!headers.is_empty(), "headers=headers"),
            (!params.is_empty(), "params=params"),
            (!cookies.is_empty(), "cookies=cookies"),
        ]
        .into_iter()
        .filter_map(|(present, argument)| present.then_some(argument))
        .collect::<Vec<_>>()
        .join(", ");
        let response_line =
            format!("response = requests.request({arguments}){NEW_LINE}{NEW_LINE}");

        let accept = request.accept().unwrap_or_default();
        let logging = format!(
            "print(response.status_code){NEW_LINE}{}",
            response_logging(&accept)
        );

        Ok([
            imports,
            url_line,
            headers,
            params,
            cookies,
            payload,
            response_line,
            logging,
        ]
        .concat())
    }
}
