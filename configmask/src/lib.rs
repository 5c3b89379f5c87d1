//! Masked views of configuration records, and resolution of secret references.
//!
//! This crate provides:
//! - **Masking**: `#[derive(Masked)]` describes a record's fields, and
//!   [`to_safe_map`] / [`to_masked_json`] render the record with sensitive
//!   fields replaced, for display and logging.
//! - **Secret resolution** (`secrets` feature): [`SecretResolver`] turns
//!   config values such as `secretsmanager://prod-db` into database
//!   connection strings through a [`Fetcher`].
//! - **Durations**: [`Duration`], whose text and JSON forms are Go-style
//!   strings like `"30m0s"`.
//!
//! What it does not do:
//! - load configuration from the environment, files or parameter stores
//! - talk to a secret store (bring your own [`Fetcher`])
//! - cache or refresh secrets
//!
//! ```rust
//! use configmask::{Masked, to_masked_json, to_safe_map};
//!
//! #[derive(Masked)]
//! struct Database {
//!     host: String,
//!     #[sensitive]
//!     password: String,
//! }
//!
//! let db = Database { host: "db.internal".into(), password: "hunter2".into() };
//! assert_eq!(to_safe_map(&db).to_string(), "{host: db.internal, password: ******}");
//! assert_eq!(
//!     to_masked_json(&db).unwrap(),
//!     r#"{"host":"db.internal","password":"***"}"#,
//! );
//! ```

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::needless_ifs,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::struct_excessive_bools,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::future_not_send,
    clippy::option_if_let_else,
    clippy::from_over_into,
    clippy::manual_inspect
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

pub use configmask_derive::{MaskDisplay, Masked};

#[allow(unused_extern_crates)]
extern crate self as configmask;

// Module declarations
mod duration;
mod mask;
#[cfg(feature = "secrets")]
mod secrets;
#[cfg(feature = "slog")]
pub mod slog;
pub mod tracing;

// Re-exports from mask module
pub use mask::{
    BoxError, DisplayField, FieldMeta, FieldVisitor, JsonField, MASKED_JSON_PLACEHOLDER,
    MASKED_PLACEHOLDER, MaskError, MaskField, Maskable, MaskedJson, SafeMap, SafeValue,
    to_masked_json, to_masked_json_raw, to_safe_map,
};
// Re-exports from duration module
pub use duration::{Duration, DurationParseError};
// Re-exports from secrets module
#[cfg(feature = "secrets")]
pub use secrets::{
    Fetcher, FnFetcher, MemoryFetcher, PASS_THROUGH_SCHEME_PREFIX, RdsSecret, ResolveError,
    SECRETS_MANAGER_SCHEME, SecretNotFound, SecretReference, SecretResolver, from_fn,
};
#[cfg(feature = "slog")]
pub use self::slog::SlogMaskedExt;

#[doc(hidden)]
pub mod __private {
    pub use serde::Serialize;
    #[cfg(feature = "slog")]
    pub use ::slog;
}
