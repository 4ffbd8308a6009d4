//! synthlog - a synthetic structured-log workload generator
//!
//! Emits one JSON record per simulated user action on stdout, for exercising
//! log collection and observability pipelines.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::Application;
pub use error::{Error, Result};
