//! Domain layer for folio
//!
//! This crate contains the pure state types and transition rules behind the
//! portfolio's interaction layer. It has no dependencies on infrastructure
//! or presentation concerns, no timers, and no I/O.
//!
//! # Core Concepts
//!
//! ## State slices
//!
//! The interaction layer is four independent slices with no shared mutable
//! data: theme preference, the single-slot toast notification, the contact
//! form draft, and the generated project idea. This crate holds the values
//! those slices own and the rules that transition them; the slices
//! themselves (timers, pending flags, ports) live in `folio-application`.

pub mod contact;
pub mod generation;
pub mod notification;
pub mod theme;
pub mod util;

// Re-export commonly used types
pub use contact::{ContactDraft, ContactField};
pub use generation::{GenerationRequest, canned_reply, message_preview};
pub use notification::{Notification, Severity};
pub use theme::{ParseThemeModeError, ThemeMode};
