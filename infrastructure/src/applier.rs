//! Theme applier adapter for headless hosts

use folio_application::ThemeApplier;
use folio_domain::ThemeMode;
use tracing::info;

/// Logs palette switches — the stand-in for toggling the document-wide
/// style class in a browser host.
pub struct TracingThemeApplier;

impl ThemeApplier for TracingThemeApplier {
    fn apply(&self, mode: ThemeMode) {
        info!("switching palette to {mode}");
    }
}
