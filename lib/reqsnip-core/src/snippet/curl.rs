use std::sync::LazyLock;

use regex::Regex;

use super::{BodyLiteral, RenderSnippet, SnippetConfig, body_literal};
use crate::SnippetError;
use crate::request::{FetchBody, FormValue, ResolvedRequest};

/// Shell line continuation.
const NEW_LINE: &str = "\\\n";

/// Separator between two arguments on their own lines.
const ARGUMENT_SEPARATOR: &str = " \\\n";

/// A non-comma character followed by a comma, each match becomes an array field.
static MULTIPLE_VALUES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[^,],").expect("a valid regex"));

/// Renders a `curl` command line.
///
/// ```text
/// curl -i -X GET "https://example.com/pet/1" \
///  -H "Accept: application/json" \
/// ```
#[derive(Debug, Clone, Default)]
pub struct CurlSnippet {
    config: SnippetConfig,
}

impl CurlSnippet {
    /// Creates a renderer resolving relative URLs against the configured page.
    pub fn new(config: SnippetConfig) -> Self {
        Self { config }
    }

    fn form_fields(fields: &[(String, FormValue)]) -> String {
        let mut lines = Vec::new();
        for (key, value) in fields {
            match value {
                FormValue::File(file) => lines.push(format!(r#" -F "{key}=@{}""#, file.name)),
                FormValue::Text(text) if MULTIPLE_VALUES.is_match(text) => {
                    lines.extend(
                        MULTIPLE_VALUES
                            .find_iter(text)
                            .map(|chunk| format!(r#"-F "{key}[]={}""#, chunk.as_str())),
                    );
                }
                FormValue::Text(text) => lines.push(format!(r#" -F "{key}={text}""#)),
            }
        }
        lines.join(ARGUMENT_SEPARATOR)
    }
}

impl RenderSnippet for CurlSnippet {
    fn render(&self, request: &ResolvedRequest) -> Result<String, SnippetError> {
        let url = self.config.resolve_url(&request.url.full_url)?;
        let command = format!(r#"curl -i -X {} "{url}" {NEW_LINE}"#, request.method);

        let mut headers = request
            .headers
            .iter()
            .map(|(key, value)| format!(r#" -H "{key}: {value}""#))
            .collect::<Vec<_>>()
            .join(ARGUMENT_SEPARATOR);
        if !headers.is_empty() {
            headers.push_str(ARGUMENT_SEPARATOR);
        }

        let cookies = if request.url.cookie_params.is_empty() {
            String::new()
        } else {
            let cookies = request.url.cookie_params.to_urlencoded()?;
            format!(r#" -c "{cookies}" {NEW_LINE}"#)
        };

        let mut data = String::new();
        let mut form = String::new();
        match &request.body {
            Some(FetchBody::Form(params)) => {
                data = format!(" -d {} {NEW_LINE}", params.to_urlencoded()?);
            }
            Some(FetchBody::File(file)) => {
                data = format!(" --data-binary @{} {NEW_LINE}", file.name);
            }
            Some(FetchBody::Multipart(fields)) => form = Self::form_fields(fields),
            Some(FetchBody::Value(value)) => {
                let literal = body_literal(value, |value| serde_json::to_string(value));
                if let Some(BodyLiteral::Json(text) | BodyLiteral::Text(text)) = literal {
                    data = format!(" -d '{text}' {NEW_LINE}");
                }
            }
            None => {}
        }

        Ok([command, headers, cookies, data, form].concat())
    }
}
