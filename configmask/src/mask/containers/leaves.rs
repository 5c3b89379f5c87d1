//! Leaf `MaskField` implementations for scalar-like types.

use std::{
    borrow::Cow,
    net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6},
    num::{
        NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI128, NonZeroIsize, NonZeroU8,
        NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU128, NonZeroUsize,
    },
    path::{Path, PathBuf},
};

use super::impl_mask_field_display;
use crate::{
    duration::format_duration,
    mask::{error::BoxError, traits::MaskField},
};

// =============================================================================
// Strings and primitives
// =============================================================================

impl_mask_field_display!(String, str, bool, char);

impl_mask_field_display!(i8, i16, i32, i64, i128, isize);
impl_mask_field_display!(u8, u16, u32, u64, u128, usize);
impl_mask_field_display!(f32, f64);

impl_mask_field_display!(
    NonZeroI8,
    NonZeroI16,
    NonZeroI32,
    NonZeroI64,
    NonZeroI128,
    NonZeroIsize,
    NonZeroU8,
    NonZeroU16,
    NonZeroU32,
    NonZeroU64,
    NonZeroU128,
    NonZeroUsize,
);

impl MaskField for Cow<'_, str> {
    fn display_value(&self) -> String {
        self.as_ref().to_owned()
    }
}

// =============================================================================
// Network addresses and paths
// =============================================================================

impl_mask_field_display!(
    IpAddr,
    Ipv4Addr,
    Ipv6Addr,
    SocketAddr,
    SocketAddrV4,
    SocketAddrV6
);

impl MaskField for PathBuf {
    fn display_value(&self) -> String {
        self.display().to_string()
    }
}

impl MaskField for Path {
    fn display_value(&self) -> String {
        self.display().to_string()
    }
}

#[cfg(feature = "secrets")]
impl_mask_field_display!(url::Url);

// =============================================================================
// Durations
// =============================================================================

/// Rendered with the same text as [`crate::Duration`] (`"1m30s"`).
impl MaskField for std::time::Duration {
    fn display_value(&self) -> String {
        format_duration(*self)
    }
}

// =============================================================================
// JSON values
// =============================================================================

impl MaskField for serde_json::Value {
    fn display_value(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::String(text) => text.clone(),
            other => other.to_string(),
        }
    }

    fn encode_json(&self) -> Option<Result<String, BoxError>> {
        Some(Ok(self.to_string()))
    }
}

// =============================================================================
// Date/time and identifier leaves (feature-gated)
// =============================================================================

#[cfg(feature = "chrono")]
mod chrono_leaves {
    use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

    use super::impl_mask_field_display;
    use crate::mask::traits::MaskField;

    impl_mask_field_display!(NaiveDate, NaiveDateTime, NaiveTime, FixedOffset);

    impl<Tz> MaskField for DateTime<Tz>
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        fn display_value(&self) -> String {
            self.to_rfc3339()
        }
    }
}

#[cfg(feature = "time")]
mod time_leaves {
    use time::{Date, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset};

    use super::impl_mask_field_display;

    impl_mask_field_display!(Date, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset);
}

#[cfg(feature = "uuid")]
mod uuid_leaves {
    use super::impl_mask_field_display;

    impl_mask_field_display!(uuid::Uuid);
}
