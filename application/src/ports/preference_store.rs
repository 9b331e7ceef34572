//! Preference store port
//!
//! A single key-value slot for the persisted theme preference. Absence of
//! a stored value is a valid state, not an error, and storage failures
//! degrade silently — the theme controller has no error path.

use folio_domain::ThemeMode;

/// Persistent storage for the theme preference.
///
/// Implementations (adapters) live in the infrastructure layer; tests
/// substitute an in-memory store.
pub trait PreferenceStore: Send + Sync {
    /// The persisted mode, if any was ever stored.
    fn load_theme(&self) -> Option<ThemeMode>;

    /// Persist the mode. Called on every change.
    fn store_theme(&self, mode: ThemeMode);
}
