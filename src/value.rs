//! Value conversion for typed configuration access
//!
//! [`FromValue`] is the single parse seam behind every typed accessor on
//! [`Config`](crate::Config): one impl per supported type, each reporting
//! its failure as [`Error::ParseValue`]. Implement it for your own types to
//! read them with [`Config::get`](crate::Config::get).

use std::fmt;
use std::net::IpAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use path_clean::PathClean;
use url::Url;

use crate::error::{Error, Result};

/// A type that can be produced from a raw configuration string
pub trait FromValue: Sized {
    /// Parse `raw` into `Self`, reporting failure as [`Error::ParseValue`]
    fn from_value(raw: &str) -> Result<Self>;
}

impl FromValue for String {
    fn from_value(raw: &str) -> Result<Self> {
        Ok(raw.to_string())
    }
}

/// Accepts exactly `1 t T TRUE true True` and `0 f F FALSE false False`.
/// Notably `yes`/`no` and `on`/`off` are not booleans.
impl FromValue for bool {
    fn from_value(raw: &str) -> Result<Self> {
        match raw {
            "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
            "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
            other => Err(Error::ParseValue(format!("invalid boolean: {:?}", other))),
        }
    }
}

/// Standard decimal and scientific notation. A literal that overflows to
/// infinity is out of range; explicit `inf` and `NaN` stay valid.
impl FromValue for f64 {
    fn from_value(raw: &str) -> Result<Self> {
        let value: f64 = raw
            .parse()
            .map_err(|e| Error::ParseValue(format!("{}: {:?}", e, raw)))?;
        if value.is_infinite() && !is_infinity_literal(raw) {
            return Err(Error::ParseValue(format!("value out of range: {:?}", raw)));
        }
        Ok(value)
    }
}

/// Parsed at 64-bit precision, then narrowed. A finite value beyond the
/// 32-bit range is out of range, not an infinity.
impl FromValue for f32 {
    fn from_value(raw: &str) -> Result<Self> {
        let wide = f64::from_value(raw)?;
        let narrow = wide as f32;
        if narrow.is_infinite() && wide.is_finite() {
            return Err(Error::ParseValue(format!("value out of range: {:?}", raw)));
        }
        Ok(narrow)
    }
}

/// True for the spellings the float grammar parses to an infinity on purpose
fn is_infinity_literal(raw: &str) -> bool {
    let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

impl FromValue for isize {
    fn from_value(raw: &str) -> Result<Self> {
        raw.parse()
            .map_err(|e| Error::ParseValue(format!("{}: {:?}", e, raw)))
    }
}

impl FromValue for i32 {
    fn from_value(raw: &str) -> Result<Self> {
        raw.parse()
            .map_err(|e| Error::ParseValue(format!("{}: {:?}", e, raw)))
    }
}

impl FromValue for i64 {
    fn from_value(raw: &str) -> Result<Self> {
        raw.parse()
            .map_err(|e| Error::ParseValue(format!("{}: {:?}", e, raw)))
    }
}

/// No sign character is accepted on unsigned values, not even a leading `+`
impl FromValue for usize {
    fn from_value(raw: &str) -> Result<Self> {
        if raw.starts_with('+') {
            return Err(Error::ParseValue(format!(
                "sign character in unsigned value: {:?}",
                raw
            )));
        }
        raw.parse()
            .map_err(|e| Error::ParseValue(format!("{}: {:?}", e, raw)))
    }
}

impl FromValue for u32 {
    fn from_value(raw: &str) -> Result<Self> {
        if raw.starts_with('+') {
            return Err(Error::ParseValue(format!(
                "sign character in unsigned value: {:?}",
                raw
            )));
        }
        raw.parse()
            .map_err(|e| Error::ParseValue(format!("{}: {:?}", e, raw)))
    }
}

impl FromValue for u64 {
    fn from_value(raw: &str) -> Result<Self> {
        if raw.starts_with('+') {
            return Err(Error::ParseValue(format!(
                "sign character in unsigned value: {:?}",
                raw
            )));
        }
        raw.parse()
            .map_err(|e| Error::ParseValue(format!("{}: {:?}", e, raw)))
    }
}

/// Durations use the humantime grammar: unit-suffixed segments such as
/// `300ms`, `3m20s`, `16h12m`, or the fractional `1.5h`. A bare number
/// with no unit is rejected.
impl FromValue for Duration {
    fn from_value(raw: &str) -> Result<Self> {
        humantime::parse_duration(raw)
            .map_err(|e| Error::ParseValue(format!("{}: {:?}", e, raw)))
    }
}

/// Absolute URLs only; a bare word has no base to resolve against
impl FromValue for Url {
    fn from_value(raw: &str) -> Result<Self> {
        Url::parse(raw).map_err(|e| Error::ParseValue(format!("{}: {:?}", e, raw)))
    }
}

/// Lexically cleaned: redundant separators and `.`/`..` segments resolve
/// without touching the filesystem. Conversion itself cannot fail.
impl FromValue for PathBuf {
    fn from_value(raw: &str) -> Result<Self> {
        Ok(PathBuf::from(raw).clean())
    }
}

impl FromValue for IpAddr {
    fn from_value(raw: &str) -> Result<Self> {
        raw.parse()
            .map_err(|e| Error::ParseValue(format!("{}: {:?}", e, raw)))
    }
}

/// A wall-clock time of day with minute precision
///
/// Parsed from `HH:MM`. Fields are public so defaults can be built
/// directly; range validation happens only when parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    /// Hour in `0..=23`
    pub hour: u8,
    /// Minute in `0..=59`
    pub minute: u8,
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (hour, minute) = s
            .split_once(':')
            .ok_or_else(|| Error::ParseValue(format!("expected HH:MM, got {:?}", s)))?;
        let hour: u8 = hour
            .parse()
            .map_err(|e| Error::ParseValue(format!("invalid hour: {} in {:?}", e, s)))?;
        let minute: u8 = minute
            .parse()
            .map_err(|e| Error::ParseValue(format!("invalid minute: {} in {:?}", e, s)))?;
        if hour > 23 {
            return Err(Error::ParseValue(format!("hour out of range: {:?}", s)));
        }
        if minute > 59 {
            return Err(Error::ParseValue(format!("minute out of range: {:?}", s)));
        }
        Ok(TimeOfDay { hour, minute })
    }
}

impl FromValue for TimeOfDay {
    fn from_value(raw: &str) -> Result<Self> {
        raw.parse()
    }
}
