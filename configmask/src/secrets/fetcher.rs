//! The `Fetcher` capability and the fetchers shipped with this crate.

use std::{collections::HashMap, fmt, sync::Arc};

use super::error::SecretNotFound;
use crate::mask::BoxError;

/// Retrieves raw secret bytes by logical name.
///
/// One call is one backend round trip: implementations are not expected to
/// cache or retry, and the resolver does not either. Timeouts and
/// cancellation belong to the implementation.
///
/// Implement this over your secret store client:
///
/// ```ignore
/// impl Fetcher for SecretsManagerClient {
///     fn fetch(&self, name: &str) -> Result<Vec<u8>, BoxError> {
///         let out = self.get_secret_value(name)?;
///         Ok(out.secret_string.into_bytes())
///     }
/// }
/// ```
pub trait Fetcher {
    /// Returns the secret stored under `name`.
    fn fetch(&self, name: &str) -> Result<Vec<u8>, BoxError>;
}

impl<T> Fetcher for &T
where
    T: Fetcher + ?Sized,
{
    fn fetch(&self, name: &str) -> Result<Vec<u8>, BoxError> {
        (**self).fetch(name)
    }
}

impl<T> Fetcher for Box<T>
where
    T: Fetcher + ?Sized,
{
    fn fetch(&self, name: &str) -> Result<Vec<u8>, BoxError> {
        (**self).fetch(name)
    }
}

impl<T> Fetcher for Arc<T>
where
    T: Fetcher + ?Sized,
{
    fn fetch(&self, name: &str) -> Result<Vec<u8>, BoxError> {
        (**self).fetch(name)
    }
}

// =============================================================================
// FnFetcher - Closure adapter
// =============================================================================

/// Fetcher backed by a closure. Created with [`from_fn`].
#[derive(Clone)]
pub struct FnFetcher<F>(F);

/// Adapts a closure into a [`Fetcher`].
///
/// ```rust
/// use configmask::{Fetcher, from_fn};
///
/// let fetcher = from_fn(|name: &str| Ok(format!("value-of-{name}").into_bytes()));
/// assert_eq!(fetcher.fetch("a").unwrap(), b"value-of-a");
/// ```
pub fn from_fn<F>(f: F) -> FnFetcher<F>
where
    F: Fn(&str) -> Result<Vec<u8>, BoxError>,
{
    FnFetcher(f)
}

impl<F> Fetcher for FnFetcher<F>
where
    F: Fn(&str) -> Result<Vec<u8>, BoxError>,
{
    fn fetch(&self, name: &str) -> Result<Vec<u8>, BoxError> {
        (self.0)(name)
    }
}

impl<F> fmt::Debug for FnFetcher<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnFetcher")
    }
}

// =============================================================================
// MemoryFetcher - In-memory secrets
// =============================================================================

/// Fetcher over an in-memory map of secrets, for local development and tests.
///
/// `Debug` lists secret names only.
#[derive(Clone, Default)]
pub struct MemoryFetcher {
    secrets: HashMap<String, Vec<u8>>,
}

impl MemoryFetcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a secret, builder style.
    #[must_use]
    pub fn with_secret(mut self, name: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        self.insert(name, value);
        self
    }

    /// Stores a secret, returning the previous value under that name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Vec<u8>>) -> Option<Vec<u8>> {
        self.secrets.insert(name.into(), value.into())
    }

    pub fn remove(&mut self, name: &str) -> Option<Vec<u8>> {
        self.secrets.remove(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.secrets.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.secrets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.secrets.is_empty()
    }
}

impl Fetcher for MemoryFetcher {
    fn fetch(&self, name: &str) -> Result<Vec<u8>, BoxError> {
        self.secrets.get(name).cloned().ok_or_else(|| {
            SecretNotFound {
                name: name.to_owned(),
            }
            .into()
        })
    }
}

impl<N, V> FromIterator<(N, V)> for MemoryFetcher
where
    N: Into<String>,
    V: Into<Vec<u8>>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut fetcher = Self::new();
        for (name, value) in iter {
            fetcher.insert(name, value);
        }
        fetcher
    }
}

impl fmt::Debug for MemoryFetcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.secrets.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("MemoryFetcher")
            .field("secrets", &names)
            .finish()
    }
}
