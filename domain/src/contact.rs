//! Contact form draft and field transitions
//!
//! The draft is mutated on every keystroke through [`ContactDraft::set`].
//! Invalidation of a previously drafted response is an explicit rule keyed
//! on the edited field ([`ContactField::invalidates_draft`]), not an
//! observed side effect, so the owning service can apply it directly.

use serde::{Deserialize, Serialize};

/// The three bound form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    /// Whether editing this field makes a previously drafted response
    /// stale. Only the message body participates in generation, so only
    /// it invalidates.
    pub fn invalidates_draft(&self) -> bool {
        matches!(self, Self::Message)
    }
}

/// The contact form's field values. Created empty at mount, reset to empty
/// on successful submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a single field value.
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    /// All three fields present — the native required-field rule for
    /// submission.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && !self.message.is_empty()
    }

    /// Whether a draft-assistant request must be refused: the assistant
    /// needs the sender's name and the message body.
    pub fn missing_for_draft(&self) -> bool {
        self.name.is_empty() || self.message.is_empty()
    }

    /// Clear all fields back to the mount state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
