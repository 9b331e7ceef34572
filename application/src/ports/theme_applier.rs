//! Theme applier port
//!
//! The document-wide style flag the presentation layer keys its palette
//! on. The theme controller drives it as a side effect of every mode
//! change.

use folio_domain::ThemeMode;

/// Applies the active mode to the rendering host.
pub trait ThemeApplier: Send + Sync {
    fn apply(&self, mode: ThemeMode);
}

/// A headless host with nothing to repaint.
pub struct NoThemeApplier;

impl ThemeApplier for NoThemeApplier {
    fn apply(&self, _mode: ThemeMode) {}
}
