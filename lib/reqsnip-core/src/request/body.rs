use std::sync::LazyLock;

use http::Method;
use indexmap::IndexMap;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::SearchParams;
use crate::SnippetError;
use crate::operation::{MediaType, MediaTypeExample, Operation};
use crate::serialize::{is_truthy, value_to_text};

static BINARY_MEDIA_TYPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^audio/|^image/|^video/|^font/|tar$|zip$|7z$|rtf$|msword$|excel$|/pdf$|/octet-stream$",
    )
    .expect("a valid regex")
});

/// A file placeholder: only its name is shown in snippets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRef {
    /// The file name.
    pub name: String,
}

impl FileRef {
    /// Reads a file placeholder from an example value: any object with a string `name`.
    pub fn from_value(value: &Value) -> Option<Self> {
        let name = value.as_object()?.get("name")?.as_str()?;
        Some(Self {
            name: name.to_string(),
        })
    }
}

/// A multipart field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValue {
    /// A plain text field.
    Text(String),
    /// A file attachment.
    File(FileRef),
}

/// The request body of a resolved request.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchBody {
    /// `application/x-www-form-urlencoded` fields.
    Form(SearchParams),
    /// `multipart/form-data` fields, in example order.
    Multipart(Vec<(String, FormValue)>),
    /// A binary upload.
    File(FileRef),
    /// A JSON, XML or text example, or a binary example that is not a file.
    Value(Value),
}

/// The method and body of a request.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchBodyOptions {
    /// The HTTP method.
    pub method: Method,
    /// The body, if the operation sends one.
    pub body: Option<FetchBody>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    FormUrlEncoded,
    Multipart,
    Binary,
    Structured,
    Unsupported,
}

impl BodyKind {
    fn of(media_type: &str) -> Self {
        if media_type.contains("form-urlencoded") {
            Self::FormUrlEncoded
        } else if media_type.contains("form-data") {
            Self::Multipart
        } else if BINARY_MEDIA_TYPE.is_match(media_type) {
            Self::Binary
        } else if ["json", "xml", "text"]
            .iter()
            .any(|kind| media_type.contains(kind))
        {
            Self::Structured
        } else {
            Self::Unsupported
        }
    }
}

fn first_example<'a>(
    media_type: &MediaType,
    examples: &'a IndexMap<String, MediaTypeExample>,
) -> Result<&'a Value, SnippetError> {
    examples
        .values()
        .next()
        .map(|example| &example.value)
        .ok_or_else(|| SnippetError::MissingExample {
            media_type: media_type.name.clone(),
        })
}

fn form_body(examples: &IndexMap<String, MediaTypeExample>) -> Option<FetchBody> {
    let mut form = SearchParams::new();
    for (key, example) in examples {
        if example.mime.contains("file") {
            continue;
        }
        match &example.value {
            Value::Array(_) => form.append(key, value_to_text(&example.value)),
            value if is_truthy(value) => form.append(key, value_to_text(value)),
            _ => {}
        }
    }
    if form.is_empty() {
        None
    } else {
        Some(FetchBody::Form(form))
    }
}

fn multipart_body(media_type: &MediaType, value: &Value) -> Result<FetchBody, SnippetError> {
    let Value::Object(fields) = value else {
        return Err(SnippetError::ExampleNotAnObject {
            media_type: media_type.name.clone(),
            value: value.clone(),
        });
    };
    let fields = fields
        .iter()
        .map(|(key, field)| {
            let value = match FileRef::from_value(field) {
                Some(file) => FormValue::File(file),
                None => FormValue::Text(value_to_text(field)),
            };
            (key.clone(), value)
        })
        .collect();
    Ok(FetchBody::Multipart(fields))
}

impl Operation {
    /// Builds the request body from the first media type of the request body.
    ///
    /// A media type without examples yields no body, as does a media type that
    /// is neither form, multipart, binary, JSON, XML nor text.
    ///
    /// # Errors
    ///
    /// Returns [`SnippetError::MissingExample`] when the example map is empty,
    /// and [`SnippetError::ExampleNotAnObject`] when a multipart example is not an object.
    pub fn build_fetch_body_options(&self) -> Result<FetchBodyOptions, SnippetError> {
        let method = self.method.clone();
        let Some(media_type) = self.request_body.as_ref().and_then(|content| content.first())
        else {
            return Ok(FetchBodyOptions { method, body: None });
        };
        let Some(examples) = &media_type.examples else {
            debug!(media_type = %media_type.name, "request body without examples");
            return Ok(FetchBodyOptions { method, body: None });
        };

        let kind = BodyKind::of(&media_type.name);
        let body = match kind {
            BodyKind::FormUrlEncoded => form_body(examples),
            BodyKind::Multipart => {
                let value = first_example(media_type, examples)?;
                Some(multipart_body(media_type, value)?)
            }
            BodyKind::Binary => {
                let value = first_example(media_type, examples)?;
                let body = match FileRef::from_value(value) {
                    Some(file) => FetchBody::File(file),
                    None => FetchBody::Value(value.clone()),
                };
                Some(body)
            }
            BodyKind::Structured => {
                let value = first_example(media_type, examples)?;
                Some(FetchBody::Value(value.clone()))
            }
            BodyKind::Unsupported => None,
        };

        debug!(
            media_type = %media_type.name,
            ?kind,
            has_body = body.is_some(),
            "request body resolved"
        );
        Ok(FetchBodyOptions { method, body })
    }
}
