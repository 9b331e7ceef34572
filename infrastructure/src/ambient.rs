//! Ambient color-scheme adapters
//!
//! The headless analogues of the browser's `prefers-color-scheme` query.

use folio_application::AmbientScheme;
use folio_domain::ThemeMode;
use tracing::debug;

/// A pinned ambient preference, typically sourced from configuration.
pub struct FixedAmbientScheme(pub Option<ThemeMode>);

impl AmbientScheme for FixedAmbientScheme {
    fn preferred(&self) -> Option<ThemeMode> {
        self.0
    }
}

/// Reads the ambient preference from an environment variable
/// (`FOLIO_COLOR_SCHEME=dark|light`). Unset or unparsable values mean no
/// signal.
pub struct EnvAmbientScheme {
    var: String,
}

impl EnvAmbientScheme {
    pub const DEFAULT_VAR: &'static str = "FOLIO_COLOR_SCHEME";

    pub fn new() -> Self {
        Self::from_var(Self::DEFAULT_VAR)
    }

    pub fn from_var(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvAmbientScheme {
    fn default() -> Self {
        Self::new()
    }
}

impl AmbientScheme for EnvAmbientScheme {
    fn preferred(&self) -> Option<ThemeMode> {
        let value = std::env::var(&self.var).ok()?;
        match value.parse::<ThemeMode>() {
            Ok(mode) => Some(mode),
            Err(e) => {
                debug!("ignoring ambient scheme from ${}: {e}", self.var);
                None
            }
        }
    }
}
