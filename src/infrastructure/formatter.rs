//! Structured record formatting
//!
//! Records are flat JSON objects on a single line. Key order is fixed:
//! `timestamp, level, logger, message, module, function, line`, then the
//! well-known context fields that are present, then any additional fields in
//! the order they were attached.

use chrono::SecondsFormat;
use serde_json::{Map, Value};

use crate::domain::event::LogEvent;
use crate::domain::types::FieldValue;

/// Renders `LogEvent`s as single-line JSON records
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRecordFormatter;

impl JsonRecordFormatter {
    /// Formats one event. Absent context fields are left out.
    pub fn format(&self, event: &LogEvent) -> String {
        Value::Object(self.build_record(event)).to_string()
    }

    fn build_record(&self, event: &LogEvent) -> Map<String, Value> {
        let location = event.location();
        let context = event.context();
        let mut record = Map::new();

        record.insert(
            "timestamp".into(),
            event
                .timestamp()
                .to_rfc3339_opts(SecondsFormat::Micros, true)
                .into(),
        );
        record.insert("level".into(), event.level().to_string().into());
        record.insert("logger".into(), event.logger().as_ref().into());
        record.insert("message".into(), event.message().into());
        record.insert("module".into(), location.module.into());
        record.insert("function".into(), location.function.into());
        record.insert("line".into(), location.line.into());

        if let Some(user_id) = context.user_id() {
            record.insert("user_id".into(), user_id.into_inner().into());
        }
        if let Some(request_id) = context.request_id() {
            record.insert("request_id".into(), request_id.to_string().into());
        }
        if let Some(duration_ms) = context.duration_ms() {
            record.insert("duration_ms".into(), duration_ms.into_inner().into());
        }
        if let Some(status_code) = context.status_code() {
            record.insert("status_code".into(), status_code.into_inner().into());
        }

        for (key, value) in context.extra_fields() {
            let value = match value {
                FieldValue::Integer(n) => Value::from(*n),
                FieldValue::Text(s) => Value::from(s.as_str()),
            };
            record.insert(key.as_str().to_string(), value);
        }

        record
    }
}
