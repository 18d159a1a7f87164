use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One example payload for a request body media type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaTypeExample {
    /// The media type of this example, e.g. `application/json` or `file`.
    pub mime: String,
    /// The example value.
    pub value: Value,
}

impl MediaTypeExample {
    /// Creates an example.
    pub fn new(mime: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            mime: mime.into(),
            value: value.into(),
        }
    }
}

/// A request body media type with its examples.
///
/// For `application/x-www-form-urlencoded` bodies, example keys are the form field names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaType {
    /// The media type name, e.g. `application/json`.
    pub name: String,
    /// Examples indexed by example key, in declaration order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<IndexMap<String, MediaTypeExample>>,
}

impl MediaType {
    /// Creates a media type without examples.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            examples: None,
        }
    }

    /// Adds a keyed example.
    pub fn add_example(mut self, key: impl Into<String>, example: MediaTypeExample) -> Self {
        self.examples
            .get_or_insert_with(IndexMap::new)
            .insert(key.into(), example);
        self
    }

    /// Shortcut for a media type with a single example of its own mime.
    pub fn with_example(name: impl Into<String>, value: impl Into<Value>) -> Self {
        let name = name.into();
        let example = MediaTypeExample::new(name.clone(), value);
        Self::new(name).add_example("default", example)
    }
}

/// The request body content: an ordered list of media types.
///
/// Only the first media type is used to render snippets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaContent {
    /// The declared media types.
    #[serde(default)]
    pub media_types: Vec<MediaType>,
}

impl MediaContent {
    /// Creates a content with a single media type.
    pub fn new(media_type: MediaType) -> Self {
        Self {
            media_types: vec![media_type],
        }
    }

    /// Adds a media type.
    pub fn add_media_type(mut self, media_type: MediaType) -> Self {
        self.media_types.push(media_type);
        self
    }

    /// The media type used for snippets.
    pub fn first(&self) -> Option<&MediaType> {
        self.media_types.first()
    }
}
