//! Small helpers over JSON values used by the snippet renderers.
//!
//! - [`object_has`] / [`object_set`] - deep path access with dotted or segmented paths
//! - [`compact`] - strip empty values from a mapping
//! - [`group_params_by_key`] - collapse repeated keys into lists

use serde_json::{Map, Value};

use crate::SnippetError;

/// A deep path into nested JSON objects.
///
/// Built from a dotted string (`"a.b.c"`) or from ordered segments (`["a", "b", "c"]`),
/// both forms address the same location.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Deref)]
pub struct ObjectPath(Vec<String>);

impl ObjectPath {
    fn dotted(&self) -> String {
        self.0.join(".")
    }
}

impl From<&str> for ObjectPath {
    fn from(value: &str) -> Self {
        Self(value.split('.').map(str::to_string).collect())
    }
}

impl From<String> for ObjectPath {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<Vec<String>> for ObjectPath {
    fn from(value: Vec<String>) -> Self {
        Self(value)
    }
}

impl From<&[&str]> for ObjectPath {
    fn from(value: &[&str]) -> Self {
        Self(value.iter().map(|segment| (*segment).to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ObjectPath {
    fn from(value: [&str; N]) -> Self {
        Self::from(value.as_slice())
    }
}

/// Checks whether every segment of the path resolves through nested objects.
///
/// Stops at the first missing key or non-object intermediate value.
///
/// # Example
///
/// ```rust
/// use reqsnip_core::object::object_has;
/// use serde_json::json;
///
/// let value = json!({"a": {"b": {"c": "d"}}});
/// assert!(object_has(&value, "a.b.c"));
/// assert!(object_has(&value, ["a", "b"]));
/// assert!(!object_has(&value, "a.b.c.d"));
/// ```
pub fn object_has(root: &Value, path: impl Into<ObjectPath>) -> bool {
    let path = path.into();
    let mut current = root;
    for segment in path.iter() {
        let Some(next) = current.as_object().and_then(|object| object.get(segment)) else {
            return false;
        };
        current = next;
    }
    true
}

/// Assigns `value` at the path, creating an empty object for every missing
/// (or `null`) intermediate segment.
///
/// This mutates `root` in place.
///
/// # Errors
///
/// Returns [`SnippetError::EmptyPath`] for a path without segment, and
/// [`SnippetError::PathNotAnObject`] when the root or an intermediate value
/// exists but is not an object.
///
/// # Example
///
/// ```rust
/// use reqsnip_core::object::{object_has, object_set};
/// use serde_json::json;
///
/// let mut value = json!({"a": {"b": "b"}});
/// object_set(&mut value, "a.c.d", json!(1))?;
/// assert!(object_has(&value, "a.c.d"));
/// # Ok::<(), reqsnip_core::SnippetError>(())
/// ```
pub fn object_set(
    root: &mut Value,
    path: impl Into<ObjectPath>,
    value: Value,
) -> Result<(), SnippetError> {
    let path = path.into();
    let Some((last, parents)) = path.split_last() else {
        return Err(SnippetError::EmptyPath);
    };

    let not_an_object = |segment: &str| SnippetError::PathNotAnObject {
        path: path.dotted(),
        segment: segment.to_string(),
    };

    let mut current = root;
    let mut segment_name = "";
    for segment in parents {
        let object = current
            .as_object_mut()
            .ok_or_else(|| not_an_object(segment_name))?;
        let child = object
            .entry(segment.as_str())
            .or_insert_with(|| Value::Object(Map::new()));
        if child.is_null() {
            *child = Value::Object(Map::new());
        }
        current = child;
        segment_name = segment.as_str();
    }

    let object = current
        .as_object_mut()
        .ok_or_else(|| not_an_object(segment_name))?;
    object.insert(last.clone(), value);
    Ok(())
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => matches!(text.as_str(), "" | "undefined" | "null" | "NaN"),
        _ => false,
    }
}

/// Returns a copy of the mapping without empty entries.
///
/// `null`, `""`, `"undefined"`, `"null"` and `"NaN"` values are removed,
/// nested objects are compacted recursively. Arrays are kept untouched.
///
/// # Example
///
/// ```rust
/// use reqsnip_core::object::compact;
/// use serde_json::json;
///
/// let value = json!({"foo": "bar", "bar": null, "test": ""});
/// let compacted = compact(value.as_object().expect("an object"));
/// assert_eq!(serde_json::Value::Object(compacted), json!({"foo": "bar"}));
/// ```
pub fn compact(object: &Map<String, Value>) -> Map<String, Value> {
    object
        .iter()
        .filter(|(_, value)| !is_empty_value(value))
        .map(|(key, value)| {
            let value = match value {
                Value::Object(nested) => Value::Object(compact(nested)),
                other => other.clone(),
            };
            (key.clone(), value)
        })
        .collect()
}

/// Groups an ordered list of key/value pairs into a mapping.
///
/// A key seen once maps to its value, a key seen several times maps to the
/// list of its values in order of appearance. Keys keep their first-seen order.
///
/// # Example
///
/// ```rust
/// use reqsnip_core::object::group_params_by_key;
/// use serde_json::json;
///
/// let grouped = group_params_by_key([("a", "b"), ("a", "d"), ("c", "e")]);
/// assert_eq!(serde_json::Value::Object(grouped), json!({"a": ["b", "d"], "c": "e"}));
/// ```
pub fn group_params_by_key<I, K, V>(entries: I) -> Map<String, Value>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    let mut result = Map::new();
    for (key, value) in entries {
        let key = key.into();
        let value = value.into();
        match result.get_mut(&key) {
            Some(Value::Array(values)) => values.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
            None => {
                result.insert(key, value);
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "a": {
                "b": {
                    "c": { "d": "d" },
                    "c1": "c1"
                },
                "b1": "b1"
            },
            "a1": "a1"
        })
    }

    #[test]
    fn should_check_path_as_string() {
        let obj = sample();
        assert!(object_has(&obj, "a.b.c"));
        assert!(object_has(&obj, "a.b.c1"));
        assert!(object_has(&obj, "a.b.c.d"));
        assert!(!object_has(&obj, "a.b.c1.d"));
        assert!(!object_has(&obj, "a.x"));
    }

    #[test]
    fn should_check_path_as_segments() {
        let obj = sample();
        assert!(object_has(&obj, ["a", "b", "c"]));
        assert!(object_has(&obj, ["a", "b", "c1"]));
        assert!(object_has(&obj, ["a", "b", "c", "d"]));
        assert!(!object_has(&obj, ["a", "b", "c1", "d"]));
    }

    #[test]
    fn should_set_value_by_string_path() {
        let mut obj = sample();
        assert!(!object_has(&obj, "a.b.c1.d"));

        object_set(&mut obj, "a.b.c1", json!({"d": "d"})).expect("settable");

        assert!(object_has(&obj, "a.b.c1.d"));
    }

    #[test]
    fn should_set_the_same_value_with_both_path_forms() {
        let mut by_string = sample();
        let mut by_segments = sample();

        object_set(&mut by_string, "a.b.c1", json!({"d": "d"})).expect("settable");
        object_set(&mut by_segments, ["a", "b", "c1"], json!({"d": "d"})).expect("settable");

        assert_eq!(by_string, by_segments);
    }

    #[test]
    fn should_create_missing_intermediate_objects() {
        let mut obj = json!({"a": null});

        object_set(&mut obj, "a.x.y", json!(42)).expect("settable");

        insta::assert_snapshot!(obj, @r#"{"a":{"x":{"y":42}}}"#);
    }

    #[test]
    fn should_fail_through_non_object_values() {
        let mut obj = sample();

        let error = object_set(&mut obj, "a.b.c1.d.e", json!(1)).expect_err("c1 is a string");
        insta::assert_snapshot!(error, @"Cannot set 'a.b.c1.d.e': segment 'c1' is not an object");

        let mut scalar = json!("root");
        let error = object_set(&mut scalar, "a", json!(1)).expect_err("root is a string");
        assert!(matches!(error, SnippetError::PathNotAnObject { .. }));

        let error = object_set(&mut obj, Vec::<String>::new(), json!(1)).expect_err("empty path");
        assert!(matches!(error, SnippetError::EmptyPath));
    }

    #[test]
    fn should_strip_away_nullish_values() {
        let obj = json!({
            "foo": "bar",
            "bar": null,
            "cool": "undefined",
            "test": "",
            "nan": "NaN",
            "nested": { "keep": 0, "drop": "null" },
            "list": [null, ""]
        });

        let compacted = compact(obj.as_object().expect("an object"));

        insta::assert_snapshot!(Value::Object(compacted), @r#"{"foo":"bar","nested":{"keep":0},"list":[null,""]}"#);
    }

    #[test]
    fn should_return_an_equal_object_when_nothing_to_compact() {
        let obj = json!({"foo": "bar"});
        let compacted = compact(obj.as_object().expect("an object"));
        assert_eq!(Value::Object(compacted), obj);
    }

    #[test]
    fn should_group_params_by_key() {
        let grouped = group_params_by_key([("a", "b"), ("a", "d"), ("c", "e")]);
        assert_eq!(Value::Object(grouped), json!({"a": ["b", "d"], "c": "e"}));
    }

    #[test]
    fn should_append_to_existing_groups_in_order() {
        let grouped = group_params_by_key([("x", "1"), ("y", "2"), ("x", "3"), ("x", "4")]);
        insta::assert_snapshot!(Value::Object(grouped), @r#"{"x":["1","3","4"],"y":"2"}"#);
    }
}
