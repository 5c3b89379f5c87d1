//! Field adapters for types that do not implement [`MaskField`] themselves.
//!
//! `#[derive(Masked)]` wraps fields annotated with `#[mask(display)]` in
//! [`DisplayField`] and fields annotated with `#[mask(json)]` in
//! [`JsonField`]. They can also be used directly in hand-written
//! [`Maskable`](super::Maskable) impls.

use std::fmt;

use serde::Serialize;

use super::{error::BoxError, traits::MaskField};

/// Encodes a value through its `Display` impl (human-readable capability).
pub struct DisplayField<'a, T: ?Sized>(pub &'a T);

impl<T> MaskField for DisplayField<'_, T>
where
    T: fmt::Display + ?Sized,
{
    fn display_value(&self) -> String {
        self.0.to_string()
    }

    fn encode_text(&self) -> Option<String> {
        Some(self.0.to_string())
    }
}

/// Encodes a value through its `serde::Serialize` impl (self-marshaling
/// capability).
pub struct JsonField<'a, T: ?Sized>(pub &'a T);

impl<T> MaskField for JsonField<'_, T>
where
    T: Serialize + ?Sized,
{
    fn display_value(&self) -> String {
        match serde_json::to_value(self.0) {
            Ok(serde_json::Value::String(text)) => text,
            Ok(value) => value.to_string(),
            Err(_) => String::new(),
        }
    }

    fn encode_json(&self) -> Option<Result<String, BoxError>> {
        Some(serde_json::to_string(self.0).map_err(Into::into))
    }
}
