//! Classification of config values into literals and secret references.

use percent_encoding::percent_decode_str;
use url::Url;

use super::error::ResolveError;

/// Scheme of references into the secret store (`secretsmanager://<name>`).
pub const SECRETS_MANAGER_SCHEME: &str = "secretsmanager";

/// Schemes starting with this prefix are complete connection strings and are
/// used as they are (`postgres://`, `postgresql://`, ...).
pub const PASS_THROUGH_SCHEME_PREFIX: &str = "postgres";

/// What a config value refers to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SecretReference<'a> {
    /// The value is usable as it is.
    Literal(&'a str),
    /// The value names a secret in the secret store.
    SecretsManager {
        /// Logical secret name: the decoded URI host, with its port if any.
        name: String,
    },
}

impl<'a> SecretReference<'a> {
    /// Classifies `value` without fetching anything.
    ///
    /// A value with no scheme, or with a pass-through scheme, is a literal and
    /// is not validated further. Only secret store references are parsed as
    /// URIs.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::Unresolvable`] for any other scheme
    /// - [`ResolveError::Parse`] if a secret store reference is not a valid URI
    /// - [`ResolveError::MissingSecretName`] for a secret store reference
    ///   without a host
    /// - [`ResolveError::InvalidSecretName`] if the host does not decode to
    ///   UTF-8
    pub fn parse(value: &'a str) -> Result<Self, ResolveError> {
        let Some(scheme) = scheme_of(value) else {
            return Ok(Self::Literal(value));
        };
        let scheme = scheme.to_ascii_lowercase();
        if scheme.starts_with(PASS_THROUGH_SCHEME_PREFIX) {
            return Ok(Self::Literal(value));
        }
        if scheme != SECRETS_MANAGER_SCHEME {
            return Err(ResolveError::Unresolvable { scheme });
        }

        let url = Url::parse(value).map_err(ResolveError::Parse)?;
        let host = match url.host_str() {
            Some(host) if !host.is_empty() => host,
            _ => return Err(ResolveError::MissingSecretName),
        };
        let mut name = percent_decode_str(host)
            .decode_utf8()
            .map_err(|_| ResolveError::InvalidSecretName {
                name: host.to_owned(),
            })?
            .into_owned();
        if let Some(port) = url.port() {
            name.push(':');
            name.push_str(&port.to_string());
        }
        Ok(Self::SecretsManager { name })
    }

    #[must_use]
    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }
}

/// Returns the leading `scheme:` of `value` (RFC 3986: a letter followed by
/// letters, digits, `+`, `-` or `.`), without the colon.
fn scheme_of(value: &str) -> Option<&str> {
    let (scheme, _) = value.split_once(':')?;
    let mut chars = scheme.chars();
    let first = chars.next()?;
    let valid = first.is_ascii_alphabetic()
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    valid.then_some(scheme)
}
