//! Message text of emitted records
//!
//! These strings are part of the record contract downstream collectors match
//! on, so they live with the domain rather than with the output plumbing.

use crate::domain::types::Action;

/// Application lifecycle records
pub mod lifecycle {
    pub const STARTED: &str = "Application started";
    pub const STOPPED: &str = "Application stopped";
}

/// Synthesized activity records
pub mod activity {
    pub const USER_ACTION_PREFIX: &str = "User action: ";
    pub const ERROR_PROCESSING_PREFIX: &str = "Error processing ";
    pub const SERVER_ERROR_TYPE: &str = "server_error";
}

/// Message of the primary event for an action
pub fn user_action(action: Action) -> String {
    format!("{}{action}", activity::USER_ACTION_PREFIX)
}

/// Message of the companion error event for an action
pub fn error_processing(action: Action) -> String {
    format!("{}{action}", activity::ERROR_PROCESSING_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_messages_are_not_empty() {
        assert!(lifecycle::STARTED.len() > 10);
        assert!(lifecycle::STOPPED.len() > 10);
    }

    #[test]
    fn test_activity_messages_render_action() {
        assert_eq!(user_action(Action::Purchase), "User action: purchase");
        assert_eq!(error_processing(Action::ViewPage), "Error processing view_page");
        assert_eq!(activity::SERVER_ERROR_TYPE, "server_error");
    }
}
