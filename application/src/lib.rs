//! Application layer for folio
//!
//! This crate contains the four state slices (theme, toast, contact form,
//! idea generator) and the port definitions their collaborators implement.
//! It depends only on the domain layer.
//!
//! All slices run on one logical thread of an event-loop style host; the
//! only suspension points are timers standing in for real asynchronous
//! work. Every slice owns its own timer handles and cancels them on
//! teardown, so nothing mutates state after unmount.

pub mod ports;
pub mod services;

// Re-export commonly used types
pub use ports::{
    ambient_scheme::{AmbientScheme, NoAmbientScheme},
    content_generator::{ContentGenerator, GenerationError},
    message_delivery::{DeliveryError, MessageDelivery},
    preference_store::PreferenceStore,
    theme_applier::{NoThemeApplier, ThemeApplier},
};
pub use services::{
    contact::ContactFormService, idea::IdeaService, theme::ThemeService, toast::ToastNotifier,
};
