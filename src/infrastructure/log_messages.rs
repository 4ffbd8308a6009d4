//! Log message constants for stderr diagnostics
//!
//! This module centralizes the operational messages written through
//! `tracing`, so they are easy to find and change. Record text lives in
//! `domain::messages`.

/// Diagnostics written to stderr through `tracing`
pub mod diagnostics {
    pub const DRIVER_STARTED: &str = "Driver started";
    pub const DRIVER_STOPPED: &str = "Driver stopped";
    pub const SHUTDOWN_REQUESTED: &str = "Shutdown requested";
    pub const SHUTDOWN_CHANNEL_CLOSED: &str = "Shutdown channel closed, stopping";
    pub const SIGNAL_RECEIVED: &str = "Termination signal received";
    pub const SIGNAL_FORWARD_FAILED: &str = "Driver already gone, shutdown not delivered";
    pub const SIGNAL_LISTEN_FAILED: &str = "Failed to listen for Ctrl-C, running until killed";
    pub const RECORD_WRITE_FAILED: &str = "Failed to write record";
}
