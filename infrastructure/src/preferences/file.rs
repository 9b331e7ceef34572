//! File-backed preference store
//!
//! One small file holding the lowercase mode string — the headless
//! analogue of the browser's single localStorage key. All I/O failures
//! degrade silently: the theme controller has no error path, so a broken
//! store just behaves like an empty one.

use folio_application::PreferenceStore;
use folio_domain::ThemeMode;
use std::fs;
use std::path::PathBuf;
use tracing::warn;

/// Persists the theme preference to a file.
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store under the platform config directory
    /// (e.g. `~/.config/folio/theme`).
    pub fn default_location() -> Option<Self> {
        dirs::config_dir().map(|d| Self::new(d.join("folio").join("theme")))
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load_theme(&self) -> Option<ThemeMode> {
        let contents = fs::read_to_string(&self.path).ok()?;
        match contents.parse::<ThemeMode>() {
            Ok(mode) => Some(mode),
            Err(e) => {
                warn!("ignoring unreadable theme preference: {e}");
                None
            }
        }
    }

    fn store_theme(&self, mode: ThemeMode) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                warn!("could not create preference directory: {e}");
                return;
            }
        }
        if let Err(e) = fs::write(&self.path, mode.as_str()) {
            warn!("could not persist theme preference: {e}");
        }
    }
}
