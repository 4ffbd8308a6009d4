use proptest::prelude::*;
use serde_json::{Map, Value};
use synthlog::domain::event::{EventContext, LogEvent, LogLevel, SourceLocation};
use synthlog::domain::types::{
    DurationMs, FieldKey, FieldValue, LoggerName, RequestId, StatusCode, UserId,
};
use synthlog::domain::validation_constants::{duration, request_id, status_code, user_id};
use synthlog::infrastructure::JsonRecordFormatter;

const FIXED_KEYS: [&str; 7] = [
    "timestamp", "level", "logger", "message", "module", "function", "line",
];
const WELL_KNOWN_KEYS: [&str; 4] = ["user_id", "request_id", "duration_ms", "status_code"];

// Property test generators
pub mod generators {
    use super::*;

    pub fn level() -> impl Strategy<Value = LogLevel> {
        prop_oneof![
            Just(LogLevel::Debug),
            Just(LogLevel::Info),
            Just(LogLevel::Warning),
            Just(LogLevel::Error),
            Just(LogLevel::Critical),
        ]
    }

    pub fn user_id() -> impl Strategy<Value = UserId> {
        (user_id::MIN..=user_id::MAX).prop_map(|id| UserId::try_new(id).unwrap())
    }

    pub fn request_id() -> impl Strategy<Value = RequestId> {
        (request_id::SERIAL_MIN..=request_id::SERIAL_MAX)
            .prop_map(|serial| RequestId::try_new(serial).unwrap())
    }

    pub fn duration_ms() -> impl Strategy<Value = DurationMs> {
        (duration::MIN_MS..=duration::MAX_MS).prop_map(|ms| DurationMs::try_new(ms).unwrap())
    }

    pub fn status_code() -> impl Strategy<Value = StatusCode> {
        prop::sample::select(status_code::KNOWN.to_vec())
            .prop_map(|code| StatusCode::try_new(code).unwrap())
    }

    pub fn field_value() -> impl Strategy<Value = FieldValue> {
        prop_oneof![
            any::<i64>().prop_map(FieldValue::Integer),
            ".*".prop_map(FieldValue::Text),
        ]
    }

    pub fn extra_fields() -> impl Strategy<Value = Vec<(FieldKey, FieldValue)>> {
        prop::collection::vec(("[a-z][a-z0-9_]{0,15}", field_value()), 0..5).prop_map(
            |pairs| {
                pairs
                    .into_iter()
                    .filter_map(|(key, value)| FieldKey::try_new(key).ok().map(|k| (k, value)))
                    .collect()
            },
        )
    }

    pub fn event() -> impl Strategy<Value = LogEvent> {
        (
            level(),
            ".*",
            proptest::option::of(user_id()),
            proptest::option::of(request_id()),
            proptest::option::of(duration_ms()),
            proptest::option::of(status_code()),
            extra_fields(),
            1u32..10_000,
        )
            .prop_map(
                |(level, message, user, request, duration, status, extra, line)| {
                    let mut context = EventContext::new();
                    for (key, value) in extra {
                        context = context.with_field(key, value);
                    }
                    if let Some(id) = user {
                        context = context.with_user_id(id);
                    }
                    if let Some(id) = request {
                        context = context.with_request_id(id);
                    }
                    if let Some(ms) = duration {
                        context = context.with_duration_ms(ms);
                    }
                    if let Some(code) = status {
                        context = context.with_status_code(code);
                    }
                    LogEvent::new(
                        level,
                        LoggerName::try_new("test-app".to_string()).unwrap(),
                        message,
                        SourceLocation::new("property_tests", "event", line),
                    )
                    .with_context(context)
                },
            )
    }
}

fn parse(line: &str) -> Map<String, Value> {
    serde_json::from_str(line).expect("record is a JSON object")
}

proptest! {
    #[test]
    fn prop_record_is_a_single_json_line(event in generators::event()) {
        let line = JsonRecordFormatter.format(&event);
        prop_assert!(!line.contains('\n'));
        let record = parse(&line);
        let level = event.level().to_string();
        prop_assert_eq!(record["message"].as_str(), Some(event.message()));
        prop_assert_eq!(record["level"].as_str(), Some(level.as_str()));
    }

    #[test]
    fn prop_keys_follow_fixed_order(event in generators::event()) {
        let record = parse(&JsonRecordFormatter.format(&event));
        let context = event.context();

        let mut expected: Vec<String> = FIXED_KEYS.iter().map(ToString::to_string).collect();
        let present = [
            context.user_id().is_some(),
            context.request_id().is_some(),
            context.duration_ms().is_some(),
            context.status_code().is_some(),
        ];
        for (key, is_present) in WELL_KNOWN_KEYS.iter().zip(present) {
            if is_present {
                expected.push((*key).to_string());
            }
        }
        expected.extend(context.extra_fields().map(|(key, _)| key.to_string()));

        let actual: Vec<String> = record.keys().cloned().collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_formatting_is_idempotent(event in generators::event()) {
        let formatter = JsonRecordFormatter;
        prop_assert_eq!(formatter.format(&event), formatter.format(&event));
    }

    #[test]
    fn prop_contextless_event_has_no_context_keys(
        level in generators::level(),
        message in ".*",
    ) {
        let event = LogEvent::new(
            level,
            LoggerName::try_new("test-app".to_string()).unwrap(),
            message,
            SourceLocation::new("property_tests", "contextless", 1),
        );
        let record = parse(&JsonRecordFormatter.format(&event));
        for key in WELL_KNOWN_KEYS {
            prop_assert!(!record.contains_key(key));
        }
        prop_assert_eq!(record.len(), FIXED_KEYS.len());
    }

    #[test]
    fn prop_timestamp_is_utc_iso8601(event in generators::event()) {
        let record = parse(&JsonRecordFormatter.format(&event));
        let timestamp = record["timestamp"].as_str().unwrap();
        prop_assert!(timestamp.ends_with('Z'));
        prop_assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
    }
}
