//! Infrastructure layer: record formatting and output
//!
//! This module turns events into JSON lines and writes them to stdout.

pub mod formatter;
pub mod log_messages;
pub mod sink;

pub use formatter::JsonRecordFormatter;
pub use sink::RecordSink;
