// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tree-structured configuration document with key path addressing.
//!
//! This module provides the `ConfigDocument` type, which wraps a `serde_json::Value`
//! and provides lookup, insertion and removal by [`KeyPath`] as well as typed decoding
//! of the values it holds.

use crate::domain::errors::{ConfigError, Result};
use crate::domain::finite::ensure_finite;
use crate::domain::key_path::KeyPath;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A configuration document.
///
/// The document is a single tree value: objects, arrays, strings, numbers, booleans
/// and null. A fresh document is an empty object.
///
/// # Lookup rules
///
/// A key path is resolved segment by segment from the root. Object fields are
/// addressed by name, array elements by their decimal index. If walking the path
/// finds nothing, a top-level field whose name is the whole key (dots included) is
/// tried, so flat documents such as `{"a.b": 1}` still resolve.
///
/// # Write rules
///
/// Writes always walk the dotted path. Missing intermediates are created as empty
/// objects and any intermediate that is not an object (including arrays) is
/// replaced by one.
///
/// # Examples
///
/// ```
/// use typecfg::domain::{ConfigDocument, KeyPath};
/// use serde_json::json;
///
/// let doc = ConfigDocument::from(json!({"a": {"b": 42, "c": "x"}}));
/// assert_eq!(doc.decode::<i64>(&KeyPath::from("a.b")).unwrap(), 42);
/// assert_eq!(doc.decode::<String>(&KeyPath::from("a.c")).unwrap(), "x");
/// assert!(doc.decode::<i64>(&KeyPath::from("a.d")).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigDocument(Value);

impl ConfigDocument {
    /// Creates an empty document (an empty object).
    pub fn new() -> Self {
        ConfigDocument(Value::Object(Map::new()))
    }

    /// Wraps a freshly read document tree.
    ///
    /// Fails with [`ConfigError::ParseError`] unless `root` is an object, since key
    /// paths can only address the fields of an object-rooted document.
    pub fn from_root(root: Value) -> Result<Self> {
        if root.is_object() {
            return Ok(ConfigDocument(root));
        }
        Err(ConfigError::ParseError {
            message: format!(
                "Configuration root must be an object, found {}",
                kind(&root)
            ),
            source: None,
        })
    }

    /// Returns the root value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consumes the document, returning the root value.
    pub fn into_value(self) -> Value {
        self.0
    }

    /// Returns `true` if the root is null or an object/array with no entries.
    pub fn is_empty(&self) -> bool {
        match &self.0 {
            Value::Null => true,
            Value::Object(map) => map.is_empty(),
            Value::Array(items) => items.is_empty(),
            _ => false,
        }
    }

    /// Looks up the value addressed by `key`.
    pub fn lookup(&self, key: &KeyPath) -> Option<&Value> {
        walk(&self.0, key).or_else(|| {
            if key.segments().nth(1).is_some() {
                self.0.as_object()?.get(key.as_str())
            } else {
                None
            }
        })
    }

    /// Returns `true` if `key` addresses a value (null counts as a value).
    pub fn contains(&self, key: &KeyPath) -> bool {
        self.lookup(key).is_some()
    }

    /// Decodes the value at `key` into `T`.
    ///
    /// Returns [`ConfigError::KeyNotFound`] if nothing is stored at `key` and
    /// [`ConfigError::DecodeError`] if the stored value does not fit `T`.
    pub fn decode<T: DeserializeOwned>(&self, key: &KeyPath) -> Result<T> {
        let value = self.lookup(key).ok_or_else(|| ConfigError::KeyNotFound {
            key: key.as_str().to_string(),
        })?;
        T::deserialize(value).map_err(|e| ConfigError::decode::<T>(key.as_str(), e))
    }

    /// Writes `value` at `key`, returning the value it replaced.
    ///
    /// Writing at the root path replaces the whole document.
    pub fn insert(&mut self, key: &KeyPath, value: Value) -> Option<Value> {
        let segments: Vec<&str> = key.segments().collect();
        let Some((last, parents)) = segments.split_last() else {
            return Some(std::mem::replace(&mut self.0, value));
        };

        let mut node = &mut self.0;
        for segment in parents {
            node = ensure_object(node)
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
        }
        ensure_object(node).insert(last.to_string(), value)
    }

    /// Serializes `value` and writes it at `key`.
    ///
    /// Fails with [`ConfigError::EncodeError`] if `value` cannot be represented as
    /// a document value (see [`encode`]); the document is left unchanged in that case.
    pub fn assign<T: Serialize>(&mut self, key: &KeyPath, value: T) -> Result<()> {
        let encoded = encode(key, value)?;
        self.insert(key, encoded);
        Ok(())
    }

    /// Removes the value at `key`, returning it.
    ///
    /// Both the nested value and a top-level field named by the whole dotted key are
    /// removed, so `key` no longer resolves afterwards. The nested value is returned
    /// when both existed. Removing the root path empties the document.
    pub fn remove(&mut self, key: &KeyPath) -> Option<Value> {
        let segments: Vec<&str> = key.segments().collect();
        if segments.is_empty() {
            return Some(std::mem::replace(&mut self.0, Value::Object(Map::new())));
        }

        let nested = remove_at(&mut self.0, &segments);
        let literal = if segments.len() > 1 {
            self.0
                .as_object_mut()
                .and_then(|map| map.remove(key.as_str()))
        } else {
            None
        };
        nested.or(literal)
    }

    /// Returns the path of every scalar leaf in the document.
    ///
    /// Array elements are addressed by index. Empty objects and arrays contribute
    /// no paths.
    ///
    /// # Examples
    ///
    /// ```
    /// use typecfg::domain::{ConfigDocument, KeyPath};
    /// use serde_json::json;
    ///
    /// let doc = ConfigDocument::from(json!({"db": {"port": 5432}, "tags": ["a", "b"]}));
    /// let keys: Vec<String> = doc.leaf_paths().into_iter().map(String::from).collect();
    /// assert_eq!(keys, vec!["db.port", "tags.0", "tags.1"]);
    /// ```
    pub fn leaf_paths(&self) -> Vec<KeyPath> {
        let mut result = Vec::new();
        collect_leaves(&self.0, &KeyPath::root(), &mut result);
        result
    }
}

/// Serializes `value` for storage at `key`.
///
/// Fails with [`ConfigError::EncodeError`] if `value` cannot be represented as a
/// document value: maps with non-string keys, and NaN or infinite floats anywhere in
/// the value (which `serde_json` would otherwise store as `null`).
pub fn encode<T: Serialize>(key: &KeyPath, value: T) -> Result<Value> {
    let encode_error = |source| ConfigError::EncodeError {
        key: key.as_str().to_string(),
        source,
    };
    ensure_finite(&value).map_err(encode_error)?;
    serde_json::to_value(value).map_err(encode_error)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Walks `key` from `node` without any fallback.
fn walk<'a>(mut node: &'a Value, key: &KeyPath) -> Option<&'a Value> {
    for segment in key.segments() {
        node = match node {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(node)
}

/// Turns `node` into an object if it is not one already.
fn ensure_object(node: &mut Value) -> &mut Map<String, Value> {
    if !node.is_object() {
        *node = Value::Object(Map::new());
    }
    match node {
        Value::Object(map) => map,
        _ => unreachable!("node was just replaced by an object"),
    }
}

fn remove_at(node: &mut Value, segments: &[&str]) -> Option<Value> {
    let (last, parents) = segments.split_last()?;
    let mut node = node;
    for segment in parents {
        node = match node {
            Value::Object(map) => map.get_mut(*segment)?,
            Value::Array(items) => items.get_mut(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    match node {
        Value::Object(map) => map.remove(*last),
        Value::Array(items) => {
            let index = last.parse::<usize>().ok()?;
            (index < items.len()).then(|| items.remove(index))
        }
        _ => None,
    }
}

fn collect_leaves(value: &Value, prefix: &KeyPath, result: &mut Vec<KeyPath>) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                collect_leaves(val, &prefix.join(key), result);
            }
        }
        Value::Array(items) => {
            for (i, val) in items.iter().enumerate() {
                collect_leaves(val, &prefix.join(&i.to_string()), result);
            }
        }
        _ => {
            if !prefix.is_root() {
                result.push(prefix.clone());
            }
        }
    }
}

impl Default for ConfigDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Value> for ConfigDocument {
    fn from(value: Value) -> Self {
        ConfigDocument(value)
    }
}

impl From<ConfigDocument> for Value {
    fn from(doc: ConfigDocument) -> Self {
        doc.0
    }
}

impl AsRef<Value> for ConfigDocument {
    fn as_ref(&self) -> &Value {
        &self.0
    }
}

impl fmt::Display for ConfigDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    fn sample() -> ConfigDocument {
        ConfigDocument::from(json!({
            "application": {"name": "Example", "debug": true},
            "database": {"host": "localhost", "port": 5432, "timeout": 30.0},
            "processing": {"enabled_features": ["feature_a", "feature_b"]}
        }))
    }

    #[test]
    fn test_new_is_empty_object() {
        let doc = ConfigDocument::new();
        assert!(doc.is_empty());
        assert_eq!(doc.as_value(), &json!({}));
    }

    #[test]
    fn test_lookup_nested() {
        let doc = sample();
        assert_eq!(
            doc.lookup(&KeyPath::from("database.host")),
            Some(&json!("localhost"))
        );
        assert_eq!(doc.lookup(&KeyPath::from("database.user")), None);
    }

    #[test]
    fn test_lookup_array_index() {
        let doc = sample();
        let key = KeyPath::from("processing.enabled_features.1");
        assert_eq!(doc.lookup(&key), Some(&json!("feature_b")));
        assert_eq!(
            doc.lookup(&KeyPath::from("processing.enabled_features.9")),
            None
        );
    }

    #[test]
    fn test_lookup_through_scalar_is_none() {
        let doc = sample();
        assert_eq!(doc.lookup(&KeyPath::from("database.port.value")), None);
    }

    #[test]
    fn test_lookup_root() {
        let doc = sample();
        assert_eq!(doc.lookup(&KeyPath::root()), Some(doc.as_value()));
    }

    #[test]
    fn test_lookup_literal_dotted_key() {
        let doc = ConfigDocument::from(json!({"test.key": 1}));
        assert_eq!(doc.lookup(&KeyPath::from("test.key")), Some(&json!(1)));
    }

    #[test]
    fn test_nested_path_wins_over_literal_key() {
        let doc = ConfigDocument::from(json!({"a.b": 1, "a": {"b": 2}}));
        assert_eq!(doc.decode::<i32>(&KeyPath::from("a.b")).unwrap(), 2);
    }

    #[test]
    fn test_decode_types() {
        let doc = sample();
        assert_eq!(
            doc.decode::<String>(&KeyPath::from("application.name"))
                .unwrap(),
            "Example"
        );
        assert!(doc.decode::<bool>(&KeyPath::from("application.debug")).unwrap());
        assert_eq!(doc.decode::<u16>(&KeyPath::from("database.port")).unwrap(), 5432);
        assert_eq!(
            doc.decode::<f64>(&KeyPath::from("database.timeout")).unwrap(),
            30.0
        );
        assert_eq!(
            doc.decode::<Vec<String>>(&KeyPath::from("processing.enabled_features"))
                .unwrap(),
            vec!["feature_a", "feature_b"]
        );
    }

    #[test]
    fn test_decode_integer_as_float() {
        let doc = sample();
        assert_eq!(doc.decode::<f64>(&KeyPath::from("database.port")).unwrap(), 5432.0);
    }

    #[test]
    fn test_decode_mismatch() {
        let doc = sample();
        let result = doc.decode::<i32>(&KeyPath::from("database.host"));
        assert!(matches!(result, Err(ConfigError::DecodeError { .. })));

        let result = doc.decode::<u8>(&KeyPath::from("database.port"));
        assert!(matches!(result, Err(ConfigError::DecodeError { .. })));
    }

    #[test]
    fn test_decode_missing() {
        let doc = sample();
        let result = doc.decode::<i32>(&KeyPath::from("missing"));
        assert!(matches!(result, Err(ConfigError::KeyNotFound { .. })));
    }

    #[test]
    fn test_decode_struct() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Database {
            host: String,
            port: u16,
        }

        let doc = sample();
        let db: Database = doc.decode(&KeyPath::from("database")).unwrap();
        assert_eq!(
            db,
            Database {
                host: "localhost".to_string(),
                port: 5432
            }
        );
    }

    #[test]
    fn test_insert_creates_intermediates() {
        let mut doc = ConfigDocument::new();
        doc.insert(&KeyPath::from("runtime.session.id"), json!(12345));
        assert_eq!(doc.as_value(), &json!({"runtime": {"session": {"id": 12345}}}));
    }

    #[test]
    fn test_insert_returns_previous() {
        let mut doc = sample();
        let previous = doc.insert(&KeyPath::from("database.port"), json!(6543));
        assert_eq!(previous, Some(json!(5432)));
        assert_eq!(doc.lookup(&KeyPath::from("database.port")), Some(&json!(6543)));
    }

    #[test]
    fn test_insert_overwrites_scalar_intermediate() {
        let mut doc = ConfigDocument::from(json!({"a": 5}));
        doc.insert(&KeyPath::from("a.b"), json!(1));
        assert_eq!(doc.as_value(), &json!({"a": {"b": 1}}));
    }

    #[test]
    fn test_insert_overwrites_array_intermediate() {
        let mut doc = ConfigDocument::from(json!({"a": [1, 2]}));
        doc.insert(&KeyPath::from("a.0"), json!("x"));
        assert_eq!(doc.as_value(), &json!({"a": {"0": "x"}}));
    }

    #[test]
    fn test_insert_root_replaces_document() {
        let mut doc = sample();
        doc.insert(&KeyPath::root(), json!({"only": true}));
        assert_eq!(doc.as_value(), &json!({"only": true}));
    }

    #[test]
    fn test_insert_into_non_object_root() {
        let mut doc = ConfigDocument::from(json!([1, 2, 3]));
        doc.insert(&KeyPath::from("a"), json!(1));
        assert_eq!(doc.as_value(), &json!({"a": 1}));
    }

    #[test]
    fn test_assign_serializes() {
        let mut doc = ConfigDocument::new();
        doc.assign(&KeyPath::from("list"), vec![1, 2, 3]).unwrap();
        assert_eq!(doc.lookup(&KeyPath::from("list")), Some(&json!([1, 2, 3])));
    }

    #[test]
    fn test_assign_unrepresentable_value() {
        let mut doc = sample();
        let before = doc.clone();
        let mut map = HashMap::new();
        map.insert(vec![1u8], "value");

        let result = doc.assign(&KeyPath::from("bad"), map);
        assert!(matches!(result, Err(ConfigError::EncodeError { .. })));
        assert_eq!(doc, before);
    }

    #[test]
    fn test_assign_non_finite_float() {
        let mut doc = ConfigDocument::new();
        let before = doc.clone();

        for value in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            let result = doc.assign(&KeyPath::from("limits.max"), value);
            assert!(matches!(result, Err(ConfigError::EncodeError { .. })));
        }
        let result = doc.assign(&KeyPath::from("limits.all"), vec![1.0, f64::NAN]);
        assert!(matches!(result, Err(ConfigError::EncodeError { .. })));

        assert_eq!(doc, before);
        assert!(!doc.contains(&KeyPath::from("limits.max")));
    }

    #[test]
    fn test_assign_none_stores_null() {
        let mut doc = ConfigDocument::new();
        doc.assign(&KeyPath::from("optional"), None::<f64>).unwrap();
        assert_eq!(doc.lookup(&KeyPath::from("optional")), Some(&Value::Null));
    }

    #[test]
    fn test_encode_finite_float() {
        assert_eq!(encode(&KeyPath::from("ratio"), 0.25).unwrap(), json!(0.25));
    }

    #[test]
    fn test_from_root_accepts_object() {
        let doc = ConfigDocument::from_root(json!({"a": 1})).unwrap();
        assert_eq!(doc.as_value(), &json!({"a": 1}));
    }

    #[test]
    fn test_from_root_rejects_non_object() {
        for root in [json!([1, 2]), json!(42), json!("text"), Value::Null] {
            let result = ConfigDocument::from_root(root);
            assert!(matches!(result, Err(ConfigError::ParseError { .. })));
        }
        let err = ConfigDocument::from_root(json!([1])).unwrap_err();
        assert!(err.to_string().contains("an array"));
    }

    #[test]
    fn test_remove_clears_nested_and_literal() {
        let mut doc = ConfigDocument::from(json!({"a.b": 1, "a": {"b": 2, "c": 3}}));
        let key = KeyPath::from("a.b");

        assert_eq!(doc.remove(&key), Some(json!(2)));
        assert!(!doc.contains(&key));
        assert_eq!(doc.as_value(), &json!({"a": {"c": 3}}));
        assert_eq!(doc.remove(&key), None);
    }

    #[test]
    fn test_remove() {
        let mut doc = sample();
        assert_eq!(
            doc.remove(&KeyPath::from("database.host")),
            Some(json!("localhost"))
        );
        assert!(!doc.contains(&KeyPath::from("database.host")));
        assert!(doc.contains(&KeyPath::from("database.port")));
        assert_eq!(doc.remove(&KeyPath::from("database.host")), None);
    }

    #[test]
    fn test_remove_array_element() {
        let mut doc = sample();
        let key = KeyPath::from("processing.enabled_features.0");
        assert_eq!(doc.remove(&key), Some(json!("feature_a")));
        assert_eq!(
            doc.lookup(&KeyPath::from("processing.enabled_features")),
            Some(&json!(["feature_b"]))
        );
    }

    #[test]
    fn test_remove_literal_dotted_key() {
        let mut doc = ConfigDocument::from(json!({"a.b": 1}));
        assert_eq!(doc.remove(&KeyPath::from("a.b")), Some(json!(1)));
        assert!(doc.is_empty());
    }

    #[test]
    fn test_remove_root() {
        let mut doc = sample();
        assert!(doc.remove(&KeyPath::root()).is_some());
        assert!(doc.is_empty());
    }

    #[test]
    fn test_leaf_paths() {
        let doc = sample();
        let keys: Vec<String> = doc.leaf_paths().into_iter().map(String::from).collect();
        assert_eq!(
            keys,
            vec![
                "application.debug",
                "application.name",
                "database.host",
                "database.port",
                "database.timeout",
                "processing.enabled_features.0",
                "processing.enabled_features.1",
            ]
        );
    }

    #[test]
    fn test_leaf_paths_skip_empty_containers() {
        let doc = ConfigDocument::from(json!({"a": {}, "b": [], "c": null}));
        let keys: Vec<String> = doc.leaf_paths().into_iter().map(String::from).collect();
        assert_eq!(keys, vec!["c"]);
    }

    #[test]
    fn test_display() {
        let doc = ConfigDocument::from(json!({"a": 1}));
        assert_eq!(doc.to_string(), "{\"a\":1}");
    }

    #[test]
    fn test_serde_transparent() {
        let doc: ConfigDocument = serde_json::from_str("{\"a\": [true]}").unwrap();
        assert_eq!(doc.as_value(), &json!({"a": [true]}));
        assert_eq!(serde_json::to_string(&doc).unwrap(), "{\"a\":[true]}");
    }
}
