//! In-memory preference store
//!
//! The substitutable store for tests and ephemeral hosts.

use folio_application::PreferenceStore;
use folio_domain::ThemeMode;
use std::sync::Mutex;

/// A single in-process slot.
#[derive(Default)]
pub struct MemoryPreferenceStore {
    slot: Mutex<Option<ThemeMode>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed the slot, as if a previous session had persisted a value.
    pub fn with_stored(mode: ThemeMode) -> Self {
        Self {
            slot: Mutex::new(Some(mode)),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load_theme(&self) -> Option<ThemeMode> {
        *self.slot.lock().unwrap()
    }

    fn store_theme(&self, mode: ThemeMode) {
        *self.slot.lock().unwrap() = Some(mode);
    }
}
