//! Ambient color-scheme port
//!
//! Read-only query of the platform's preferred color scheme, consulted
//! only when no persisted preference exists.

use folio_domain::ThemeMode;

/// The platform's ambient dark/light signal.
pub trait AmbientScheme: Send + Sync {
    /// The platform preference, or `None` when the host exposes none.
    fn preferred(&self) -> Option<ThemeMode>;
}

/// A host with no ambient signal; resolution falls through to the default.
pub struct NoAmbientScheme;

impl AmbientScheme for NoAmbientScheme {
    fn preferred(&self) -> Option<ThemeMode> {
        None
    }
}
