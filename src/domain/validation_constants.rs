//! Validation constants for domain types
//!
//! This module centralizes the bounds, weights and distribution parameters
//! the synthesizer draws from, so the value types and the sampling code agree
//! on a single source of truth.

/// User identifier bounds
pub mod user_id {
    /// Smallest synthesized user identifier
    pub const MIN: u16 = 1000;

    /// Largest synthesized user identifier
    pub const MAX: u16 = 9999;
}

/// Request identifier format
pub mod request_id {
    /// Prefix placed in front of the numeric serial
    pub const PREFIX: &str = "req-";

    /// Number of digits in the serial
    pub const SERIAL_DIGITS: usize = 8;

    /// Smallest serial
    pub const SERIAL_MIN: u32 = 10_000_000;

    /// Largest serial
    pub const SERIAL_MAX: u32 = 99_999_999;
}

/// Request duration distribution and bounds
pub mod duration {
    /// Mean of the normal distribution durations are drawn from
    pub const MEAN_MS: f64 = 255.0;

    /// Standard deviation of the duration distribution
    pub const STD_DEV_MS: f64 = 80.0;

    /// Lower clamp bound
    pub const MIN_MS: u32 = 10;

    /// Upper clamp bound
    pub const MAX_MS: u32 = 500;
}

/// HTTP status codes reported by synthesized requests
pub mod status_code {
    /// Weighted multiset: success three times as likely as each error code
    pub const WEIGHTED: [u16; 8] = [200, 200, 200, 404, 500, 502, 503, 504];

    /// Every status code the synthesizer can report
    pub const KNOWN: [u16; 6] = [200, 404, 500, 502, 503, 504];

    /// Codes at or above this value get a companion error event
    pub const SERVER_ERROR_FLOOR: u16 = 500;
}

/// Additional context field keys
pub mod field_key {
    /// Maximum key length
    pub const MAX_LENGTH: usize = 64;

    /// Keys owned by the record layout; additional fields may not reuse them
    pub const RESERVED: &[&str] = &[
        "timestamp",
        "level",
        "logger",
        "message",
        "module",
        "function",
        "line",
        "user_id",
        "request_id",
        "duration_ms",
        "status_code",
    ];

    /// Keys that pass validation
    pub const TEST_VALID: &[&str] = &["action", "error_type", "version", "retry_count_2"];

    /// Keys that fail validation
    pub const TEST_INVALID: &[&str] = &["", "Action", "2fast", "error-type", "user_id", "level"];
}
