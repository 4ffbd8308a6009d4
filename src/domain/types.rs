//! Value types carried on synthesized events
//!
//! Numeric fields keep their bounds through private constructors: values the
//! synthesizer draws are produced in range, values arriving from elsewhere go
//! through `try_new`/`FromStr` and are rejected when out of bounds.

use derive_more::{Display, Into};
use nutype::nutype;
use rand::Rng;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::domain::validation_constants::{
    duration, field_key, request_id as request_id_format, status_code, user_id,
};

/// Errors raised when constructing value types from untrusted input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("{field} value {value} is outside [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("Unsupported status code: {0}")]
    UnsupportedStatusCode(u16),

    #[error("Malformed request id: {0}")]
    MalformedRequestId(String),

    #[error("Invalid context field key: {0}")]
    InvalidFieldKey(String),
}

/// The user action a synthesized event describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Action {
    #[display("login")]
    Login,
    #[display("view_page")]
    ViewPage,
    #[display("purchase")]
    Purchase,
    #[display("logout")]
    Logout,
    #[display("search")]
    Search,
}

impl Action {
    pub const ALL: [Self; 5] = [
        Self::Login,
        Self::ViewPage,
        Self::Purchase,
        Self::Logout,
        Self::Search,
    ];

    /// Uniform choice over every action
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// Numeric user identifier in `[1000, 9999]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Into)]
pub struct UserId(u16);

impl UserId {
    pub fn try_new(value: u16) -> Result<Self, DomainError> {
        if (user_id::MIN..=user_id::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::OutOfRange {
                field: "user_id",
                value: value.into(),
                min: user_id::MIN.into(),
                max: user_id::MAX.into(),
            })
        }
    }

    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self(rng.random_range(user_id::MIN..=user_id::MAX))
    }

    pub fn into_inner(self) -> u16 {
        self.0
    }
}

/// Request identifier rendered as `req-` followed by an eight digit serial
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(u32);

impl RequestId {
    pub fn try_new(serial: u32) -> Result<Self, DomainError> {
        if (request_id_format::SERIAL_MIN..=request_id_format::SERIAL_MAX).contains(&serial) {
            Ok(Self(serial))
        } else {
            Err(DomainError::OutOfRange {
                field: "request_id",
                value: serial.into(),
                min: request_id_format::SERIAL_MIN.into(),
                max: request_id_format::SERIAL_MAX.into(),
            })
        }
    }

    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self(rng.random_range(request_id_format::SERIAL_MIN..=request_id_format::SERIAL_MAX))
    }

    pub fn serial(self) -> u32 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", request_id_format::PREFIX, self.0)
    }
}

impl FromStr for RequestId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || DomainError::MalformedRequestId(s.to_string());
        let digits = s
            .strip_prefix(request_id_format::PREFIX)
            .ok_or_else(malformed)?;
        if digits.len() != request_id_format::SERIAL_DIGITS
            || !digits.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(malformed());
        }
        let serial = digits.parse::<u32>().map_err(|_| malformed())?;
        Self::try_new(serial)
    }
}

/// Request duration in milliseconds, always within `[10, 500]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Into)]
pub struct DurationMs(u32);

impl DurationMs {
    pub fn try_new(value: u32) -> Result<Self, DomainError> {
        if (duration::MIN_MS..=duration::MAX_MS).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::OutOfRange {
                field: "duration_ms",
                value: value.into(),
                min: duration::MIN_MS.into(),
                max: duration::MAX_MS.into(),
            })
        }
    }

    /// Truncates a raw sample toward zero, then clamps it into bounds.
    ///
    /// Truncation happens first, so `505.7` becomes `505` and then `500`.
    pub fn from_sample(sample: f64) -> Self {
        if sample.is_nan() {
            return Self(duration::MIN_MS);
        }
        let truncated = sample.trunc();
        let clamped = truncated.clamp(f64::from(duration::MIN_MS), f64::from(duration::MAX_MS));
        Self(clamped as u32)
    }

    pub fn into_inner(self) -> u32 {
        self.0
    }
}

/// HTTP status code from the known set `{200, 404, 500, 502, 503, 504}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Into)]
pub struct StatusCode(u16);

impl StatusCode {
    pub fn try_new(code: u16) -> Result<Self, DomainError> {
        if status_code::KNOWN.contains(&code) {
            Ok(Self(code))
        } else {
            Err(DomainError::UnsupportedStatusCode(code))
        }
    }

    /// Uniform choice over the weighted multiset
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self(status_code::WEIGHTED[rng.random_range(0..status_code::WEIGHTED.len())])
    }

    pub fn is_server_error(self) -> bool {
        self.0 >= status_code::SERVER_ERROR_FLOOR
    }

    pub fn into_inner(self) -> u16 {
        self.0
    }
}

/// Name of the component that emits records
///
/// Limited to 100 characters; dotted and dashed names such as `test-app` or
/// `shop.checkout` are accepted.
#[nutype(
    validate(
        not_empty,
        len_char_max = 100,
        regex = r"^[a-zA-Z0-9][a-zA-Z0-9._-]*$"
    ),
    derive(Debug, Clone, PartialEq, Eq, Hash, AsRef, Display)
)]
pub struct LoggerName(String);

fn is_snake_case_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    chars.next().is_some_and(|first| first.is_ascii_lowercase())
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

/// Key of an additional context field
///
/// Keys are lowercase snake-case and never collide with the keys the record
/// layout already owns.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldKey(Cow<'static, str>);

impl FieldKey {
    pub const ACTION: Self = Self(Cow::Borrowed("action"));
    pub const ERROR_TYPE: Self = Self(Cow::Borrowed("error_type"));
    pub const VERSION: Self = Self(Cow::Borrowed("version"));

    pub fn try_new(key: impl Into<Cow<'static, str>>) -> Result<Self, DomainError> {
        let key = key.into();
        if key.len() > field_key::MAX_LENGTH
            || !is_snake_case_identifier(&key)
            || field_key::RESERVED.contains(&&*key)
        {
            return Err(DomainError::InvalidFieldKey(key.into_owned()));
        }
        Ok(Self(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Value of an additional context field
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum FieldValue {
    Integer(i64),
    Text(String),
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}
