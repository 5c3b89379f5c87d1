//! Errors produced while encoding masked output.

use thiserror::Error;

/// Boxed error returned by custom field encoders and fetchers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while producing masked JSON.
#[derive(Debug, Error)]
pub enum MaskError {
    /// A field's custom encoder, or a nested record, failed to encode.
    #[error("encode field `{field}`")]
    Encode {
        /// Name of the field that failed.
        field: &'static str,
        #[source]
        source: BoxError,
    },

    /// The assembled output is not valid JSON (a custom encoder returned
    /// malformed text).
    #[error("masked output is not valid JSON")]
    InvalidJson(#[source] serde_json::Error),
}

impl MaskError {
    pub(crate) fn encode(field: &'static str, source: impl Into<BoxError>) -> Self {
        Self::Encode {
            field,
            source: source.into(),
        }
    }

    /// Returns the path of field names leading to the failing field.
    ///
    /// Nested record failures are wrapped once per level, so a failure in
    /// `database.password` yields `["database", "password"]`.
    #[must_use]
    pub fn field_path(&self) -> Vec<&'static str> {
        let mut path = Vec::new();
        let mut current = self;
        while let Self::Encode { field, source } = current {
            path.push(*field);
            match source.downcast_ref::<MaskError>() {
                Some(inner) => current = inner,
                None => break,
            }
        }
        path
    }
}
