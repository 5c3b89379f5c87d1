//! Durations that read and write the same text in every config source.
//!
//! [`Duration`] wraps `std::time::Duration` and uses one textual form for
//! environment variables, `FromStr`, `Display` and JSON: `"5s"`, `"30m0s"`,
//! `"4h0m0s"`, `"1.5ms"`. Inputs accept a sequence of decimal numbers with
//! unit suffixes (`ns`, `us`/`µs`, `ms`, `s`, `m`, `h`), such as `"1h15m"` or
//! `"2.5s"`.

use std::{borrow::Cow, fmt, str::FromStr, time::Duration as StdDuration};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use thiserror::Error;

use crate::mask::{BoxError, MaskField};

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SEC: u128 = 1_000_000_000;
const NANOS_PER_MIN: u128 = 60 * NANOS_PER_SEC;
const NANOS_PER_HOUR: u128 = 60 * NANOS_PER_MIN;

/// A configuration duration.
///
/// ```rust
/// use configmask::Duration;
///
/// let timeout: Duration = "30m".parse().unwrap();
/// assert_eq!(timeout.to_string(), "30m0s");
/// assert_eq!(serde_json::to_string(&timeout).unwrap(), "\"30m0s\"");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration(StdDuration);

impl Duration {
    #[must_use]
    pub const fn new(duration: StdDuration) -> Self {
        Self(duration)
    }

    #[must_use]
    pub const fn from_secs(secs: u64) -> Self {
        Self(StdDuration::from_secs(secs))
    }

    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self(StdDuration::from_millis(millis))
    }

    /// Returns the wrapped `std::time::Duration`.
    #[must_use]
    pub const fn get(self) -> StdDuration {
        self.0
    }
}

impl From<StdDuration> for Duration {
    fn from(duration: StdDuration) -> Self {
        Self(duration)
    }
}

impl From<Duration> for StdDuration {
    fn from(duration: Duration) -> Self {
        duration.0
    }
}

impl std::ops::Deref for Duration {
    type Target = StdDuration;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_duration(self.0))
    }
}

impl FromStr for Duration {
    type Err = DurationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_duration(s).map(Self)
    }
}

impl Serialize for Duration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = Cow::<'de, str>::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}

impl MaskField for Duration {
    fn display_value(&self) -> String {
        self.to_string()
    }

    fn encode_json(&self) -> Option<Result<String, BoxError>> {
        Some(serde_json::to_string(self).map_err(Into::into))
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Errors from parsing duration text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DurationParseError {
    #[error("invalid duration {0:?}")]
    Invalid(String),

    #[error("missing unit in duration {0:?}")]
    MissingUnit(String),

    #[error("unknown unit {unit:?} in duration {input:?}")]
    UnknownUnit { unit: String, input: String },

    #[error("negative duration {0:?}")]
    Negative(String),

    #[error("duration {0:?} is out of range")]
    Overflow(String),
}

// =============================================================================
// Formatting
// =============================================================================

/// Formats a duration as `"72h3m0.5s"`. Durations under one second use a
/// smaller unit (`"1.5ms"`, `"250µs"`, `"10ns"`); zero is `"0s"`.
pub(crate) fn format_duration(duration: StdDuration) -> String {
    let nanos = duration.as_nanos();
    if nanos == 0 {
        return "0s".to_owned();
    }

    if nanos < NANOS_PER_SEC {
        return if nanos < NANOS_PER_MICRO {
            format!("{nanos}ns")
        } else if nanos < NANOS_PER_MILLI {
            format!("{}µs", with_fraction(nanos, NANOS_PER_MICRO))
        } else {
            format!("{}ms", with_fraction(nanos, NANOS_PER_MILLI))
        };
    }

    let hours = nanos / NANOS_PER_HOUR;
    let minutes = (nanos % NANOS_PER_HOUR) / NANOS_PER_MIN;
    let seconds = with_fraction(nanos % NANOS_PER_MIN, NANOS_PER_SEC);

    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{hours}h"));
    }
    if hours > 0 || minutes > 0 {
        out.push_str(&format!("{minutes}m"));
    }
    out.push_str(&seconds);
    out.push('s');
    out
}

/// Renders `nanos / unit` with trailing fractional zeros trimmed.
fn with_fraction(nanos: u128, unit: u128) -> String {
    let whole = nanos / unit;
    let remainder = nanos % unit;
    if remainder == 0 {
        return whole.to_string();
    }
    let width = unit.ilog10() as usize;
    let fraction = format!("{remainder:0width$}");
    format!("{whole}.{}", fraction.trim_end_matches('0'))
}

// =============================================================================
// Parsing
// =============================================================================

fn parse_duration(input: &str) -> Result<StdDuration, DurationParseError> {
    let invalid = || DurationParseError::Invalid(input.to_owned());

    let mut rest = input;
    if let Some(stripped) = rest.strip_prefix('+') {
        rest = stripped;
    } else if let Some(stripped) = rest.strip_prefix('-') {
        if stripped.chars().any(|c| c.is_ascii_digit() && c != '0') {
            return Err(DurationParseError::Negative(input.to_owned()));
        }
        rest = stripped;
    }

    if rest == "0" {
        return Ok(StdDuration::ZERO);
    }
    if rest.is_empty() {
        return Err(invalid());
    }

    let mut total: u128 = 0;
    while !rest.is_empty() {
        let (whole, after_whole) = split_digits(rest);
        let (fraction, after_fraction) = match after_whole.strip_prefix('.') {
            Some(after_dot) => split_digits(after_dot),
            None => ("", after_whole),
        };
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }

        let unit_len = after_fraction
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(after_fraction.len());
        let (unit, remaining) = after_fraction.split_at(unit_len);
        if unit.is_empty() {
            return Err(DurationParseError::MissingUnit(input.to_owned()));
        }
        let scale = unit_nanos(unit).ok_or_else(|| DurationParseError::UnknownUnit {
            unit: unit.to_owned(),
            input: input.to_owned(),
        })?;

        let overflow = || DurationParseError::Overflow(input.to_owned());
        let whole_value: u128 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| overflow())?
        };
        let mut component = whole_value.checked_mul(scale).ok_or_else(overflow)?;
        if !fraction.is_empty() {
            // Digits beyond nanosecond precision do not change the result.
            let digits = &fraction[..fraction.len().min(18)];
            let numerator: u128 = digits.parse().map_err(|_| overflow())?;
            let denominator = 10u128.pow(u32::try_from(digits.len()).map_err(|_| overflow())?);
            component = component
                .checked_add(numerator * scale / denominator)
                .ok_or_else(overflow)?;
        }
        total = total.checked_add(component).ok_or_else(overflow)?;
        rest = remaining;
    }

    let secs = u64::try_from(total / NANOS_PER_SEC)
        .map_err(|_| DurationParseError::Overflow(input.to_owned()))?;
    // Always below one billion.
    #[allow(clippy::cast_possible_truncation)]
    let subsec = (total % NANOS_PER_SEC) as u32;
    Ok(StdDuration::new(secs, subsec))
}

fn split_digits(text: &str) -> (&str, &str) {
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    text.split_at(end)
}

fn unit_nanos(unit: &str) -> Option<u128> {
    Some(match unit {
        "ns" => 1,
        "us" | "µs" | "μs" => NANOS_PER_MICRO,
        "ms" => NANOS_PER_MILLI,
        "s" => NANOS_PER_SEC,
        "m" => NANOS_PER_MIN,
        "h" => NANOS_PER_HOUR,
        _ => return None,
    })
}
