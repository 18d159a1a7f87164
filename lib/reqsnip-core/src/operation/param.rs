use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Where a parameter is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamLocation {
    /// Substituted into the path template, e.g. `/pets/{petId}`.
    Path,
    /// Appended to the query string.
    Query,
    /// Sent as a request header.
    Header,
    /// Sent as a cookie.
    Cookie,
}

/// Parameter styles defined by OpenAPI 3.1.
///
/// These styles define how array values and complex parameters are serialized
/// in strings.
///
/// # Examples
///
/// ```rust
/// use reqsnip_core::{ParamLocation, ParamStyle, Parameter};
///
/// // Form style (query default) - arrays are repeated: ?tags=rust&tags=web
/// let form = Parameter::new("tags", ParamLocation::Query);
/// assert_eq!(form.style(), ParamStyle::Form);
///
/// // Pipe delimited - arrays are joined with pipes: ?tags=rust|web
/// let pipe = Parameter::new("tags", ParamLocation::Query).with_style(ParamStyle::PipeDelimited);
/// assert_eq!(pipe.style(), ParamStyle::PipeDelimited);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParamStyle {
    /// Form style: `param=value1&param=value2` (query and cookie default)
    Form,
    /// Simple style: `value1,value2` (path and header default)
    Simple,
    /// Space delimited: `param=value1%20value2`
    SpaceDelimited,
    /// Pipe delimited: `param=value1|value2`
    PipeDelimited,
    /// Label style: `/users/.value` (path parameter with . prefix)
    Label,
    /// Matrix style: `/users/;name=value` (path parameter with ; prefix)
    Matrix,
    /// Deep object style: `?obj[key]=value` (query parameter for nested objects)
    DeepObject,
}

/// Schema hints used to derive a fallback example.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParamSchema {
    /// The declared JSON schema type, informational only.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,
    /// The schema default value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// The allowed values, the first one is used as a last-resort example.
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,
}

/// A documented operation parameter with its example value.
///
/// Parameters are immutable inputs: one instance per declared operation parameter.
/// A parameter without any example, default or enum value contributes nothing
/// to the rendered request.
///
/// # Example
///
/// ```rust
/// use reqsnip_core::{ParamLocation, Parameter};
///
/// let pet_id = Parameter::new("petId", ParamLocation::Path).with_example(123);
/// let status = Parameter::new("status", ParamLocation::Query)
///     .with_enum(["available", "pending", "sold"]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    /// The parameter name.
    pub name: String,
    /// Where the parameter is sent.
    #[serde(rename = "in")]
    pub location: ParamLocation,
    /// A single example value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
    /// Several example values, used for multi-valued headers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<Value>>,
    /// Schema hints.
    #[serde(default)]
    pub schema: ParamSchema,
    /// The declared serialization style, see [`Parameter::style`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<ParamStyle>,
    /// The declared explode flag, see [`Parameter::explode`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explode: Option<bool>,
    /// The media type of a content-based parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serialization_mime: Option<String>,
}

impl Parameter {
    /// Creates a parameter without example.
    pub fn new(name: impl Into<String>, location: ParamLocation) -> Self {
        Self {
            name: name.into(),
            location,
            example: None,
            examples: None,
            schema: ParamSchema::default(),
            style: None,
            explode: None,
            serialization_mime: None,
        }
    }

    /// Sets the example value.
    pub fn with_example(mut self, example: impl Into<Value>) -> Self {
        self.example = Some(example.into());
        self
    }

    /// Sets the list of example values.
    pub fn with_examples<V>(mut self, examples: impl IntoIterator<Item = V>) -> Self
    where
        V: Into<Value>,
    {
        self.examples = Some(examples.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the schema default value.
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.schema.default = Some(default.into());
        self
    }

    /// Sets the schema enumeration.
    pub fn with_enum<V>(mut self, values: impl IntoIterator<Item = V>) -> Self
    where
        V: Into<Value>,
    {
        self.schema.enum_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the serialization style.
    pub fn with_style(mut self, style: ParamStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Sets the explode flag.
    pub fn with_explode(mut self, explode: bool) -> Self {
        self.explode = Some(explode);
        self
    }

    /// Marks the parameter as content-based, serialized with the given media type.
    pub fn with_serialization_mime(mut self, mime: impl Into<String>) -> Self {
        self.serialization_mime = Some(mime.into());
        self
    }

    /// Get the actual style, falling back to the location default
    pub fn style(&self) -> ParamStyle {
        self.style.unwrap_or(match self.location {
            ParamLocation::Query | ParamLocation::Cookie => ParamStyle::Form,
            ParamLocation::Path | ParamLocation::Header => ParamStyle::Simple,
        })
    }

    /// Get the actual explode flag, `true` by default for the form style only
    pub fn explode(&self) -> bool {
        self.explode.unwrap_or(self.style() == ParamStyle::Form)
    }

    /// The value used for query parameters: `example ?? default ?? enum[0]`.
    ///
    /// A `null` candidate is skipped.
    pub fn query_value(&self) -> Option<&Value> {
        self.cookie_value().or_else(|| {
            self.schema
                .enum_values
                .as_ref()?
                .first()
                .filter(|value| !value.is_null())
        })
    }

    /// The value used for cookie parameters: `example ?? default`.
    ///
    /// A `null` candidate is skipped.
    pub fn cookie_value(&self) -> Option<&Value> {
        non_null(self.example.as_ref()).or_else(|| non_null(self.schema.default.as_ref()))
    }
}

fn non_null(value: Option<&Value>) -> Option<&Value> {
    value.filter(|value| !value.is_null())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_param_style_defaults_per_location() {
        assert_eq!(
            Parameter::new("a", ParamLocation::Query).style(),
            ParamStyle::Form
        );
        assert_eq!(
            Parameter::new("a", ParamLocation::Cookie).style(),
            ParamStyle::Form
        );
        assert_eq!(
            Parameter::new("a", ParamLocation::Path).style(),
            ParamStyle::Simple
        );
        assert_eq!(
            Parameter::new("a", ParamLocation::Header).style(),
            ParamStyle::Simple
        );
    }

    #[test]
    fn test_explode_defaults_to_form_style() {
        assert!(Parameter::new("a", ParamLocation::Query).explode());
        assert!(!Parameter::new("a", ParamLocation::Path).explode());
        assert!(
            !Parameter::new("a", ParamLocation::Query)
                .with_style(ParamStyle::PipeDelimited)
                .explode()
        );
        assert!(
            Parameter::new("a", ParamLocation::Path)
                .with_explode(true)
                .explode()
        );
    }

    #[test]
    fn test_query_value_fallbacks() {
        let param = Parameter::new("a", ParamLocation::Query)
            .with_enum(["x", "y"])
            .with_default("d");
        assert_eq!(param.query_value(), Some(&json!("d")));

        let param = Parameter::new("a", ParamLocation::Query).with_enum(["x", "y"]);
        assert_eq!(param.query_value(), Some(&json!("x")));

        let param = param.with_example(42);
        assert_eq!(param.query_value(), Some(&json!(42)));

        let param = Parameter::new("a", ParamLocation::Query);
        assert_eq!(param.query_value(), None);
    }

    #[test]
    fn test_null_candidates_fall_through() {
        let param = Parameter::new("a", ParamLocation::Query)
            .with_example(Value::Null)
            .with_default(Value::Null)
            .with_enum(["x"]);
        assert_eq!(param.query_value(), Some(&json!("x")));

        let param = Parameter::new("a", ParamLocation::Cookie)
            .with_example(Value::Null)
            .with_default("dark");
        assert_eq!(param.cookie_value(), Some(&json!("dark")));

        let param = Parameter::new("a", ParamLocation::Query).with_enum([Value::Null]);
        assert_eq!(param.query_value(), None);
    }

    #[test]
    fn test_cookie_value_ignores_enum() {
        let param = Parameter::new("a", ParamLocation::Cookie).with_enum(["x"]);
        assert_eq!(param.cookie_value(), None);

        let param = param.with_default(false);
        assert_eq!(param.cookie_value(), Some(&json!(false)));
    }

    #[test]
    fn should_deserialize_api_description() {
        let param: Parameter = serde_json::from_value(json!({
            "name": "tags",
            "in": "query",
            "style": "pipeDelimited",
            "explode": false,
            "schema": { "type": "array", "enum": [["a", "b"]] },
            "serializationMime": null
        }))
        .expect("valid parameter");

        insta::assert_debug_snapshot!(param, @r#"
        Parameter {
            name: "tags",
            location: Query,
            example: None,
            examples: None,
            schema: ParamSchema {
                schema_type: Some(
                    "array",
                ),
                default: None,
                enum_values: Some(
                    [
                        Array [
                            String("a"),
                            String("b"),
                        ],
                    ],
                ),
            },
            style: Some(
                PipeDelimited,
            ),
            explode: Some(
                false,
            ),
            serialization_mime: None,
        }
        "#);
    }
}
