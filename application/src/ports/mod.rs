//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod ambient_scheme;
pub mod content_generator;
pub mod message_delivery;
pub mod preference_store;
pub mod theme_applier;
