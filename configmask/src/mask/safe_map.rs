//! Safe display maps.
//!
//! [`to_safe_map`] flattens a record into an ordered map of display strings,
//! replacing sensitive values with [`MASKED_PLACEHOLDER`]. Nested records
//! become nested maps. Empty strings and empty nested maps are treated as
//! absent and omitted.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use super::traits::{FieldMeta, FieldVisitor, MaskField, Maskable};

/// Token substituted for non-empty sensitive values in a [`SafeMap`].
pub const MASKED_PLACEHOLDER: &str = "******";

// =============================================================================
// SafeValue / SafeMap
// =============================================================================

/// A single entry of a [`SafeMap`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SafeValue {
    Text(String),
    Map(SafeMap),
}

impl SafeValue {
    /// Returns the text, if this entry is a leaf.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Map(_) => None,
        }
    }

    /// Returns the nested map, if this entry is a record.
    #[must_use]
    pub fn as_map(&self) -> Option<&SafeMap> {
        match self {
            Self::Text(_) => None,
            Self::Map(map) => Some(map),
        }
    }
}

impl fmt::Display for SafeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Map(map) => fmt::Display::fmt(map, f),
        }
    }
}

/// Field name to display value, in field declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SafeMap(IndexMap<String, SafeValue>);

impl SafeMap {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SafeValue> {
        self.0.get(name)
    }

    /// Returns the text stored under `name`, if it is a leaf.
    #[must_use]
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(SafeValue::as_text)
    }

    /// Returns the nested map stored under `name`, if it is a record.
    #[must_use]
    pub fn map(&self, name: &str) -> Option<&SafeMap> {
        self.get(name).and_then(SafeValue::as_map)
    }

    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SafeValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    #[must_use]
    pub fn into_inner(self) -> IndexMap<String, SafeValue> {
        self.0
    }
}

impl fmt::Display for SafeMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (index, (name, value)) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        f.write_str("}")
    }
}

// =============================================================================
// to_safe_map - Operation entrypoint
// =============================================================================

/// Produces a display map of `record` that never contains a sensitive value.
///
/// For each field, in declaration order:
///
/// - a sensitive field whose value supplies [`MaskField::encode_masked`] is
///   shown as that representation (JSON strings are unquoted);
/// - a nested record is walked recursively and kept only if non-empty;
/// - any other value is shown as its display string, skipped when empty, and
///   replaced by [`MASKED_PLACEHOLDER`] when the field is sensitive.
///
/// Sensitivity is not inherited: a sensitive nested record is still walked
/// field by field.
pub fn to_safe_map<T>(record: &T) -> SafeMap
where
    T: Maskable + ?Sized,
{
    let mut builder = SafeMapBuilder::default();
    record.walk_fields(&mut builder);
    builder.map
}

#[derive(Default)]
struct SafeMapBuilder {
    map: SafeMap,
}

impl FieldVisitor for SafeMapBuilder {
    fn visit_field(&mut self, field: &FieldMeta, value: &dyn MaskField) {
        if let Some(entry) = safe_entry(field, value) {
            self.map.0.insert(field.name().to_owned(), entry);
        }
    }
}

fn safe_entry(field: &FieldMeta, value: &dyn MaskField) -> Option<SafeValue> {
    if field.is_sensitive() {
        // A failing custom representation falls back to the generic token.
        if let Some(Ok(masked)) = value.encode_masked() {
            let text = masked_text(masked);
            return (!text.is_empty()).then_some(SafeValue::Text(text));
        }
    }

    if let Some(nested) = value.as_record() {
        let map = to_safe_map(nested);
        return (!map.is_empty()).then_some(SafeValue::Map(map));
    }

    let text = value.display_value();
    if text.is_empty() {
        return None;
    }
    if field.is_sensitive() {
        return Some(SafeValue::Text(MASKED_PLACEHOLDER.to_owned()));
    }
    Some(SafeValue::Text(text))
}

fn masked_text(json: String) -> String {
    serde_json::from_str::<String>(&json).unwrap_or(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Leaf(&'static str);

    impl MaskField for Leaf {
        fn display_value(&self) -> String {
            self.0.to_owned()
        }
    }

    struct PublicKeyOnly;

    impl MaskField for PublicKeyOnly {
        fn display_value(&self) -> String {
            "private".to_owned()
        }

        fn encode_masked(&self) -> Option<Result<String, crate::BoxError>> {
            Some(Ok("\"public\"".to_owned()))
        }
    }

    #[test]
    fn sensitive_leaf_is_masked() {
        let meta = FieldMeta::new("key").sensitive();
        let entry = safe_entry(&meta, &Leaf("hunter2"));
        assert_eq!(entry, Some(SafeValue::Text(MASKED_PLACEHOLDER.to_owned())));
    }

    #[test]
    fn empty_sensitive_leaf_is_absent() {
        let meta = FieldMeta::new("key").sensitive();
        assert_eq!(safe_entry(&meta, &Leaf("")), None);
    }

    #[test]
    fn masked_representation_is_unquoted() {
        let meta = FieldMeta::new("key").sensitive();
        let entry = safe_entry(&meta, &PublicKeyOnly);
        assert_eq!(entry, Some(SafeValue::Text("public".to_owned())));
    }

    #[test]
    fn masked_representation_is_ignored_when_not_sensitive() {
        let meta = FieldMeta::new("key");
        let entry = safe_entry(&meta, &PublicKeyOnly);
        assert_eq!(entry, Some(SafeValue::Text("private".to_owned())));
    }

    #[test]
    fn non_string_masked_representation_is_kept_as_json() {
        assert_eq!(masked_text("{\"a\":1}".to_owned()), "{\"a\":1}");
    }

    #[test]
    fn display_nests_maps() {
        let mut inner = SafeMap::default();
        inner.0.insert("port".into(), SafeValue::Text("5432".into()));
        let mut outer = SafeMap::default();
        outer.0.insert("name".into(), SafeValue::Text("api".into()));
        outer.0.insert("db".into(), SafeValue::Map(inner));
        assert_eq!(outer.to_string(), "{name: api, db: {port: 5432}}");
    }
}
