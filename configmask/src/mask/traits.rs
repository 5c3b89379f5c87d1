//! Core traits for walking configuration records.
//!
//! This module defines the fundamental traits:
//!
//! - [`Maskable`]: A record whose fields can be walked by the masking engine
//! - [`MaskField`]: The capabilities a single field value offers to the engine
//! - [`FieldVisitor`]: Receives each field of a record in declaration order
//! - [`FieldMeta`]: Per-field descriptor (name, serialization key, sensitivity)

use super::error::BoxError;

// =============================================================================
// FieldMeta - Per-field descriptor
// =============================================================================

/// Describes one field of a record.
///
/// Descriptors are normally generated by `#[derive(Masked)]`, but they can be
/// built by hand for records that implement [`Maskable`] manually:
///
/// ```rust
/// use configmask::FieldMeta;
///
/// const PASSWORD: FieldMeta = FieldMeta::new("password").with_key("db_password").sensitive();
/// assert_eq!(PASSWORD.key(), "db_password");
/// assert!(PASSWORD.is_sensitive());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldMeta {
    name: &'static str,
    key: &'static str,
    sensitive: bool,
}

impl FieldMeta {
    /// Creates a non-sensitive field whose serialization key is its name.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            key: name,
            sensitive: false,
        }
    }

    /// Overrides the key used in masked JSON output.
    #[must_use]
    pub const fn with_key(mut self, key: &'static str) -> Self {
        self.key = key;
        self
    }

    /// Flags the field as sensitive.
    #[must_use]
    pub const fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    /// Display key used in the safe map.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Key used in masked JSON output.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        self.key
    }

    #[must_use]
    pub const fn is_sensitive(&self) -> bool {
        self.sensitive
    }
}

// =============================================================================
// FieldVisitor - Receives fields during a walk
// =============================================================================

/// Receives the fields of a record, in declaration order.
///
/// Visitors are infallible at the call site: a visitor that can fail records
/// its first error and ignores the remaining fields.
pub trait FieldVisitor {
    fn visit_field(&mut self, field: &FieldMeta, value: &dyn MaskField);
}

// =============================================================================
// Maskable - Records
// =============================================================================

/// A structured configuration value whose fields can be walked.
///
/// Implemented by `#[derive(Masked)]`. Fields that should stay invisible to
/// the engine (`#[mask(skip)]`) are simply never passed to the visitor.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Maskable`",
    label = "this type cannot be walked for masked output",
    note = "use `#[derive(Masked)]` on the type definition"
)]
pub trait Maskable {
    /// Passes every visible field to `visitor`, in declaration order.
    fn walk_fields(&self, visitor: &mut dyn FieldVisitor);
}

// =============================================================================
// MaskField - Field value capabilities
// =============================================================================

/// Capabilities a field value offers to the masking engine.
///
/// Only [`display_value`](MaskField::display_value) is required. The other
/// methods advertise optional capabilities and return `None` by default.
///
/// ## Encoding order
///
/// When a field is **not** sensitive, masked JSON output takes the first
/// capability that is present:
///
/// 1. [`encode_json`](MaskField::encode_json), emitted verbatim
/// 2. [`encode_text`](MaskField::encode_text), emitted as a JSON string
/// 3. [`as_record`](MaskField::as_record), encoded recursively
/// 4. [`display_value`](MaskField::display_value), emitted as a JSON string
///
/// When a field **is** sensitive, [`encode_masked`](MaskField::encode_masked)
/// is emitted verbatim if present, otherwise the mask token is emitted as a
/// JSON string whatever the field's type.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a masked config field",
    label = "this type does not implement `MaskField`",
    note = "derive `Masked` for nested records or `MaskDisplay` for leaf types",
    note = "or annotate the field with `#[mask(display)]`, `#[mask(json)]` or `#[mask(skip)]`"
)]
pub trait MaskField {
    /// Default display form of the value. An empty string means "absent".
    fn display_value(&self) -> String;

    /// Returns the value as a nested record, if it is one.
    fn as_record(&self) -> Option<&dyn Maskable> {
        None
    }

    /// Self-encoded JSON text.
    fn encode_json(&self) -> Option<Result<String, BoxError>> {
        None
    }

    /// Human-readable form, emitted as a JSON string.
    fn encode_text(&self) -> Option<String> {
        None
    }

    /// Redacted JSON to emit in place of the mask token when the field is
    /// flagged sensitive.
    ///
    /// A private key might return its public key here, for example.
    fn encode_masked(&self) -> Option<Result<String, BoxError>> {
        None
    }
}
