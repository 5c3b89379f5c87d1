//! Masked JSON encoding.
//!
//! [`to_masked_json`] writes a record as a JSON object keyed by each field's
//! serialization key, in declaration order. Sensitive fields are replaced by
//! [`MASKED_JSON_PLACEHOLDER`] unless the value supplies its own masked
//! representation.
//!
//! The output is meant for display only. A masked field is always emitted as
//! the string `"***"`, so the JSON may not deserialize back into the original
//! type when that field is not a string.

use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::value::RawValue;

use super::{
    error::MaskError,
    traits::{FieldMeta, FieldVisitor, MaskField, Maskable},
};

/// Token emitted as a JSON string in place of sensitive values.
pub const MASKED_JSON_PLACEHOLDER: &str = "***";

// =============================================================================
// Entrypoints
// =============================================================================

/// Encodes `record` as masked JSON text.
///
/// # Errors
///
/// Returns [`MaskError::Encode`] naming the field when a custom encoder, or a
/// nested record, fails.
pub fn to_masked_json<T>(record: &T) -> Result<String, MaskError>
where
    T: Maskable + ?Sized,
{
    let mut encoder = JsonObjectEncoder::default();
    record.walk_fields(&mut encoder);
    encoder.finish()
}

/// Encodes `record` as masked JSON and wraps it as a [`RawValue`], for
/// embedding in a larger JSON document without re-escaping.
///
/// # Errors
///
/// As [`to_masked_json`], plus [`MaskError::InvalidJson`] if a custom encoder
/// produced malformed JSON.
pub fn to_masked_json_raw<T>(record: &T) -> Result<Box<RawValue>, MaskError>
where
    T: Maskable + ?Sized,
{
    let json = to_masked_json(record)?;
    RawValue::from_string(json).map_err(MaskError::InvalidJson)
}

// =============================================================================
// MaskedJson - Owned wrapper for logging boundaries
// =============================================================================

/// Masked JSON of a record, ready to hand to a logger or embed in a response.
///
/// `Display` prints the JSON text; `Serialize` embeds it as JSON rather than
/// as an escaped string.
#[derive(Clone, Debug)]
pub struct MaskedJson(Box<RawValue>);

impl MaskedJson {
    /// Masks `record`.
    ///
    /// # Errors
    ///
    /// As [`to_masked_json_raw`].
    pub fn new<T>(record: &T) -> Result<Self, MaskError>
    where
        T: Maskable + ?Sized,
    {
        to_masked_json_raw(record).map(Self)
    }

    /// Returns the JSON text.
    #[must_use]
    pub fn get(&self) -> &str {
        self.0.get()
    }

    /// Parses the masked JSON into a `serde_json::Value`.
    #[must_use]
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::from_str(self.0.get()).unwrap_or(serde_json::Value::Null)
    }

    #[must_use]
    pub fn into_raw(self) -> Box<RawValue> {
        self.0
    }
}

impl fmt::Display for MaskedJson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.get())
    }
}

impl Serialize for MaskedJson {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// =============================================================================
// Encoder
// =============================================================================

#[derive(Default)]
struct JsonObjectEncoder {
    out: String,
    fields: usize,
    error: Option<MaskError>,
}

impl JsonObjectEncoder {
    fn finish(self) -> Result<String, MaskError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        let mut json = String::with_capacity(self.out.len() + 2);
        json.push('{');
        json.push_str(&self.out);
        json.push('}');
        Ok(json)
    }
}

impl FieldVisitor for JsonObjectEncoder {
    fn visit_field(&mut self, field: &FieldMeta, value: &dyn MaskField) {
        if self.error.is_some() {
            return;
        }
        match encode_field(field, value) {
            Ok(encoded) => {
                if self.fields > 0 {
                    self.out.push(',');
                }
                self.out.push_str(&quote(field.key()));
                self.out.push(':');
                self.out.push_str(&encoded);
                self.fields += 1;
            }
            Err(err) => self.error = Some(err),
        }
    }
}

fn encode_field(field: &FieldMeta, value: &dyn MaskField) -> Result<String, MaskError> {
    if field.is_sensitive() {
        return match value.encode_masked() {
            Some(masked) => masked.map_err(|source| MaskError::encode(field.name(), source)),
            None => Ok(quote(MASKED_JSON_PLACEHOLDER)),
        };
    }

    if let Some(encoded) = value.encode_json() {
        return encoded.map_err(|source| MaskError::encode(field.name(), source));
    }
    if let Some(text) = value.encode_text() {
        return Ok(quote(&text));
    }
    if let Some(nested) = value.as_record() {
        return to_masked_json(nested).map_err(|source| MaskError::encode(field.name(), source));
    }
    Ok(quote(&value.display_value()))
}

fn quote(text: &str) -> String {
    serde_json::Value::from(text).to_string()
}
