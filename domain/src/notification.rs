//! Toast notification value objects
//!
//! A notification is a single-slot, transient status message. The empty
//! message is the canonical "nothing to show" state and is idempotent to
//! render.

use serde::{Deserialize, Serialize};

/// Visual weight of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Info,
}

/// The content of the single toast slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    /// The empty slot. Renders as nothing.
    pub fn none() -> Self {
        Self::new("", Severity::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Info)
    }

    /// Whether the presentation layer should show anything at all.
    pub fn is_visible(&self) -> bool {
        !self.message.is_empty()
    }
}

impl Default for Notification {
    fn default() -> Self {
        Self::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_message_is_not_visible() {
        assert!(!Notification::none().is_visible());
        assert!(!Notification::new("", Severity::Error).is_visible());
    }

    #[test]
    fn constructors_set_severity() {
        assert_eq!(Notification::success("ok").severity, Severity::Success);
        assert_eq!(Notification::error("boom").severity, Severity::Error);
        assert_eq!(Notification::info("fyi").severity, Severity::Info);
        assert!(Notification::success("ok").is_visible());
    }

    #[test]
    fn default_is_the_empty_slot() {
        assert_eq!(Notification::default(), Notification::none());
    }
}
