//! Infrastructure layer for folio
//!
//! Concrete adapters behind the application layer's ports: preference
//! storage, the ambient color-scheme signal, the fixed-latency content
//! generator mock, the message delivery stub, and the configuration
//! loader.

pub mod ambient;
pub mod applier;
pub mod config;
pub mod delivery;
pub mod generator;
pub mod preferences;

// Re-export commonly used types
pub use ambient::{EnvAmbientScheme, FixedAmbientScheme};
pub use applier::TracingThemeApplier;
pub use config::{ConfigLoader, FileConfig, ProfileConfig, ProjectEntry, ThemeConfig};
pub use delivery::NoopDelivery;
pub use generator::CannedGenerator;
pub use preferences::{FilePreferenceStore, MemoryPreferenceStore};
