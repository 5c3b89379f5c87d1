//! Resolution of config values that may point into a secret store.

use std::borrow::Cow;

use super::{error::ResolveError, fetcher::Fetcher, rds::RdsSecret, reference::SecretReference};

/// Turns config values into usable values, fetching secrets when a value is a
/// secret store reference.
///
/// The resolver keeps no state besides its fetcher: every reference is
/// fetched again on each call.
///
/// ```
/// use configmask::{MemoryFetcher, SecretResolver};
///
/// let fetcher = MemoryFetcher::new().with_secret(
///     "my-db",
///     r#"{"host":"h","port":5432,"engine":"postgres","dbname":"d","username":"u","password":"p"}"#,
/// );
/// let resolver = SecretResolver::new(fetcher);
///
/// assert_eq!(resolver.resolve("secretsmanager://my-db").unwrap(), "postgres://u:p@h:5432/d");
/// assert_eq!(resolver.resolve("postgres://local/dev").unwrap(), "postgres://local/dev");
/// ```
#[derive(Clone, Debug)]
pub struct SecretResolver<F> {
    fetcher: F,
}

impl<F: Fetcher> SecretResolver<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Resolves `value`.
    ///
    /// Literals (no scheme, or a `postgres*` scheme) are returned borrowed and
    /// unchanged. A `secretsmanager://<name>` reference is fetched, decoded as
    /// an [`RdsSecret`] and returned as its connection string.
    ///
    /// # Errors
    ///
    /// See [`SecretReference::parse`] for classification errors, plus
    /// [`ResolveError::Fetch`] and [`ResolveError::Decode`].
    pub fn resolve<'a>(&self, value: &'a str) -> Result<Cow<'a, str>, ResolveError> {
        let name = match SecretReference::parse(value)? {
            SecretReference::Literal(literal) => {
                tracing::trace!("config value is a literal");
                return Ok(Cow::Borrowed(literal));
            }
            SecretReference::SecretsManager { name } => name,
        };

        tracing::debug!(secret = %name, "fetching secret");
        let bytes = match self.fetcher.fetch(&name) {
            Ok(bytes) => bytes,
            Err(source) => return Err(ResolveError::Fetch { name, source }),
        };
        let secret = match RdsSecret::from_slice(&bytes) {
            Ok(secret) => secret,
            Err(source) => return Err(ResolveError::Decode { name, source }),
        };
        tracing::debug!(secret = %name, engine = %secret.engine, "resolved secret");

        Ok(Cow::Owned(secret.connection_string()))
    }

    /// Resolves `value` and replaces it with the result.
    ///
    /// `value` is left untouched on error.
    ///
    /// # Errors
    ///
    /// As [`resolve`](Self::resolve).
    pub fn resolve_in_place(&self, value: &mut String) -> Result<(), ResolveError> {
        let resolved = match self.resolve(value)? {
            Cow::Borrowed(_) => return Ok(()),
            Cow::Owned(resolved) => resolved,
        };
        *value = resolved;
        Ok(())
    }
}
