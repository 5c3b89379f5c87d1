//! Error types for secret resolution.

use thiserror::Error;

use crate::mask::BoxError;

/// Errors that can occur while resolving a config value.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The value could not be parsed as a URI.
    #[error("parse secret reference")]
    Parse(#[source] url::ParseError),

    /// The value has a scheme that is neither a pass-through literal nor a
    /// known secret store.
    #[error("unresolvable scheme `{scheme}`")]
    Unresolvable {
        /// The scheme found in the value.
        scheme: String,
    },

    /// A secret store reference without a secret name (`secretsmanager://`).
    #[error("secret reference has no secret name")]
    MissingSecretName,

    /// The secret name does not percent-decode to UTF-8.
    #[error("secret name `{name}` is not valid UTF-8")]
    InvalidSecretName {
        /// The name as written in the reference.
        name: String,
    },

    /// The fetcher failed to retrieve the secret.
    #[error("fetch secret `{name}`")]
    Fetch {
        /// Logical name of the secret.
        name: String,
        #[source]
        source: BoxError,
    },

    /// The fetched secret does not have the expected JSON shape.
    #[error("decode secret `{name}`")]
    Decode {
        /// Logical name of the secret.
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Returned by [`MemoryFetcher`](super::MemoryFetcher) for unknown names.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("secret not found: {name}")]
pub struct SecretNotFound {
    /// The name that was looked up.
    pub name: String,
}
