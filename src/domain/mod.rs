//! Domain types and synthesis logic for synthlog
//!
//! This module contains the event model, the validated value types carried on
//! events and the synthesizer that draws plausible user activity.

pub mod event;
pub mod messages;
pub mod synthesis;
pub mod types;
pub mod validation_constants;

pub use event::*;
pub use synthesis::*;
pub use types::*;
