//! Adapters for emitting masked records through `slog`.
//!
//! This module provides `slog::Value` implementations that serialize masked
//! JSON as structured data via `slog`'s nested-value support. Records derived
//! with `#[derive(Masked)]` get their `slog::Value` impl from
//! [`serialize_masked`].
//!
//! Logging is infallible from the caller's side: a record that cannot be
//! masked is emitted as a placeholder string.

use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::mask::{MaskedJson, Maskable};

impl SlogValue for MaskedJson {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.to_value());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

/// Serializes the masked JSON of `value` under `key`.
///
/// Use it to implement `slog::Value` by hand for a record that implements
/// [`Maskable`] manually.
pub fn serialize_masked<T>(
    value: &T,
    record: &Record<'_>,
    key: Key,
    serializer: &mut dyn Serializer,
) -> SlogResult
where
    T: Maskable + ?Sized,
{
    match MaskedJson::new(value) {
        Ok(json) => SlogValue::serialize(&json, record, key, serializer),
        Err(err) => serializer.emit_arguments(key, &format_args!("<unmaskable: {err}>")),
    }
}

/// A borrowed record that logs as masked JSON. Created by
/// [`SlogMaskedExt::slog_masked`].
pub struct SlogMasked<'a, T: ?Sized>(&'a T);

impl<T> SlogValue for SlogMasked<'_, T>
where
    T: Maskable + ?Sized,
{
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        serialize_masked(self.0, record, key, serializer)
    }
}

/// Extension trait for logging any [`Maskable`] record with slog, including
/// records that implement `Maskable` by hand.
///
/// ## Example
/// ```ignore
/// use configmask::slog::SlogMaskedExt;
///
/// info!(logger, "starting"; "config" => config.slog_masked());
/// ```
pub trait SlogMaskedExt: Maskable {
    fn slog_masked(&self) -> SlogMasked<'_, Self> {
        SlogMasked(self)
    }
}

impl<T> SlogMaskedExt for T where T: Maskable + ?Sized {}
