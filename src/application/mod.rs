//! Application services and run-loop orchestration
//!
//! This module contains the driver loop, its pacing policy, signal handling
//! and the `Application` that wires them to stdout.

pub mod app;
pub mod driver;
pub mod pacing;
pub mod shutdown;

pub use app::Application;
pub use driver::{Driver, DriverState, RunSummary};
