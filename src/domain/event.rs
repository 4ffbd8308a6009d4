//! Log events and their optional context
//!
//! A `LogEvent` is built once, handed to the record sink and dropped. Context
//! fields are explicit optional slots rather than attributes discovered at
//! runtime, so the formatter can inspect them directly.

use chrono::{DateTime, Utc};
use derive_more::Display;

use crate::domain::types::{
    DurationMs, FieldKey, FieldValue, LoggerName, RequestId, StatusCode, UserId,
};

/// Severity of a log event
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum LogLevel {
    #[display("DEBUG")]
    Debug,
    #[display("INFO")]
    Info,
    #[display("WARNING")]
    Warning,
    #[display("ERROR")]
    Error,
    #[display("CRITICAL")]
    Critical,
}

/// Where an event was constructed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    pub module: &'static str,
    pub function: &'static str,
    pub line: u32,
}

impl SourceLocation {
    pub const fn new(module: &'static str, function: &'static str, line: u32) -> Self {
        Self {
            module,
            function,
            line,
        }
    }
}

/// Captures the module path and line of the invocation site.
///
/// The function name has to be passed in; Rust has no stable macro for it.
#[macro_export]
macro_rules! source_location {
    ($function:expr) => {
        $crate::domain::event::SourceLocation::new(module_path!(), $function, line!())
    };
}

/// Optional contextual fields attached to an event
///
/// The four well-known fields have dedicated slots and are rendered first.
/// Any other field is kept in insertion order; setting an existing key again
/// replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventContext {
    user_id: Option<UserId>,
    request_id: Option<RequestId>,
    duration_ms: Option<DurationMs>,
    status_code: Option<StatusCode>,
    extra: Vec<(FieldKey, FieldValue)>,
}

impl EventContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user_id(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: DurationMs) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    pub fn with_status_code(mut self, status_code: StatusCode) -> Self {
        self.status_code = Some(status_code);
        self
    }

    pub fn with_field(mut self, key: FieldKey, value: impl Into<FieldValue>) -> Self {
        let value = value.into();
        match self.extra.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.extra.push((key, value)),
        }
        self
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.user_id
    }

    pub fn request_id(&self) -> Option<RequestId> {
        self.request_id
    }

    pub fn duration_ms(&self) -> Option<DurationMs> {
        self.duration_ms
    }

    pub fn status_code(&self) -> Option<StatusCode> {
        self.status_code
    }

    pub fn field(&self, key: &str) -> Option<&FieldValue> {
        self.extra
            .iter()
            .find(|(existing, _)| existing.as_str() == key)
            .map(|(_, value)| value)
    }

    /// Additional fields in insertion order
    pub fn extra_fields(&self) -> impl Iterator<Item = (&FieldKey, &FieldValue)> {
        self.extra.iter().map(|(key, value)| (key, value))
    }

    pub fn is_empty(&self) -> bool {
        self.user_id.is_none()
            && self.request_id.is_none()
            && self.duration_ms.is_none()
            && self.status_code.is_none()
            && self.extra.is_empty()
    }
}

/// One structured log event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEvent {
    timestamp: DateTime<Utc>,
    level: LogLevel,
    logger: LoggerName,
    message: String,
    location: SourceLocation,
    context: EventContext,
}

impl LogEvent {
    /// Creates an event stamped with the current time and no context
    pub fn new(
        level: LogLevel,
        logger: LoggerName,
        message: impl Into<String>,
        location: SourceLocation,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            logger,
            message: message.into(),
            location,
            context: EventContext::default(),
        }
    }

    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_context(mut self, context: EventContext) -> Self {
        self.context = context;
        self
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn logger(&self) -> &LoggerName {
        &self.logger
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn location(&self) -> SourceLocation {
        self.location
    }

    pub fn context(&self) -> &EventContext {
        &self.context
    }
}
