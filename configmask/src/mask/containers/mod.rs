//! `MaskField` implementations for standard library and third-party types.
//!
//! Leaf types render through `Display` and take the default fallback when
//! encoded (a quoted display string). Smart pointers and `Option` delegate
//! every capability to their contents. Collections render their elements
//! through each element's own display value, so a nested record inside a
//! collection shows its safe map rather than its raw fields.
//!
//! ## Map Keys Are Not Masked
//!
//! For `HashMap` and `BTreeMap` only values are rendered through `MaskField`.
//! Keys are printed with `Display` as they are. Do not place sensitive data in
//! map keys.

mod collections;
mod leaves;
mod pointers;


// =============================================================================
// Display leaf implementation helper
// =============================================================================

macro_rules! impl_mask_field_display {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl crate::mask::traits::MaskField for $ty {
                fn display_value(&self) -> String {
                    self.to_string()
                }
            }
        )+
    };
}

pub(super) use impl_mask_field_display;
