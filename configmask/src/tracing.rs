//! Adapters for emitting masked records through `tracing`.
//!
//! Masking happens when the adapter is created, so the raw record never
//! reaches a subscriber. Logging never fails: if a record cannot be masked,
//! the event carries a placeholder naming the failure instead.
//!
//! [`log_safe`] logs the safe map (`******` token, empty values omitted)
//! rather than the masked JSON.
//!
//! # Example
//!
//! ```ignore
//! use configmask::tracing::{TracingMaskedExt, log_safe};
//!
//! tracing::info!(config = %config.tracing_masked(), "starting");
//!
//! // Same thing, with a fixed message:
//! log_safe(&config);
//! ```

use tracing::field::{DisplayValue, display};

use crate::mask::{MaskedJson, Maskable, to_safe_map};

/// Extension trait for logging records as masked JSON display values.
pub trait TracingMaskedExt {
    /// Masks the record and wraps the JSON text for a `tracing` field.
    fn tracing_masked(&self) -> DisplayValue<String>;
}

impl<T> TracingMaskedExt for T
where
    T: Maskable + ?Sized,
{
    fn tracing_masked(&self) -> DisplayValue<String> {
        display(masked_or_placeholder(self))
    }
}

/// Logs the safe map of `config` at `info` level.
pub fn log_safe<T>(config: &T)
where
    T: Maskable + ?Sized,
{
    tracing::info!(config = %to_safe_map(config), "loaded configuration");
}

fn masked_or_placeholder<T>(record: &T) -> String
where
    T: Maskable + ?Sized,
{
    match MaskedJson::new(record) {
        Ok(json) => json.to_string(),
        Err(err) => {
            tracing::warn!(error = %err, "failed to mask record for logging");
            format!("<unmaskable: {err}>")
        }
    }
}
