//! Secret reference resolution.
//!
//! A config value is either a literal or a `secretsmanager://<name>`
//! reference. [`SecretResolver`] fetches referenced secrets through a
//! [`Fetcher`] and turns them into database connection strings.

mod error;
mod fetcher;
mod rds;
mod reference;
mod resolver;

pub use error::{ResolveError, SecretNotFound};
pub use fetcher::{Fetcher, FnFetcher, MemoryFetcher, from_fn};
pub use rds::RdsSecret;
pub use reference::{PASS_THROUGH_SCHEME_PREFIX, SECRETS_MANAGER_SCHEME, SecretReference};
pub use resolver::SecretResolver;
