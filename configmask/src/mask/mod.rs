//! Masked views of configuration records.
//!
//! This module provides the machinery for producing display-safe output:
//!
//! - **`traits`**: Core traits (`Maskable`, `MaskField`, `FieldVisitor`) and
//!   the `FieldMeta` descriptor
//! - **`safe_map`**: Flattened display maps (`to_safe_map`)
//! - **`json`**: Masked JSON encoding (`to_masked_json`, `MaskedJson`)
//! - **`adapters`**: Field adapters for `Display` and `Serialize` types
//! - **`containers`**: `MaskField` implementations for std and third-party types
//! - **`error`**: Encoding errors

mod adapters;
mod containers;
mod error;
mod json;
mod safe_map;
mod traits;

pub use adapters::{DisplayField, JsonField};
pub use error::{BoxError, MaskError};
pub use json::{MASKED_JSON_PLACEHOLDER, MaskedJson, to_masked_json, to_masked_json_raw};
pub use safe_map::{MASKED_PLACEHOLDER, SafeMap, SafeValue, to_safe_map};
pub use traits::{FieldMeta, FieldVisitor, MaskField, Maskable};
