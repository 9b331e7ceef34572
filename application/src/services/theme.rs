//! Theme controller slice
//!
//! Owns the dark/light preference. `initialize` reconciles the persisted
//! value with the platform's ambient signal once after mount; `toggle`
//! flips unconditionally. Every mode change persists the new value and
//! drives the document-wide style flag through [`ThemeApplier`].

use crate::ports::ambient_scheme::AmbientScheme;
use crate::ports::preference_store::PreferenceStore;
use crate::ports::theme_applier::ThemeApplier;
use folio_domain::ThemeMode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Process-wide theme preference service with an explicit
/// `initialize`/`teardown` lifecycle and injected storage.
pub struct ThemeService {
    store: Arc<dyn PreferenceStore>,
    ambient: Arc<dyn AmbientScheme>,
    applier: Arc<dyn ThemeApplier>,
    mode: Mutex<ThemeMode>,
    initialized: AtomicBool,
}

impl ThemeService {
    pub fn new(
        store: Arc<dyn PreferenceStore>,
        ambient: Arc<dyn AmbientScheme>,
        applier: Arc<dyn ThemeApplier>,
    ) -> Self {
        Self {
            store,
            ambient,
            applier,
            mode: Mutex::new(ThemeMode::Light),
            initialized: AtomicBool::new(false),
        }
    }

    /// Resolve and apply the startup mode, exactly once.
    ///
    /// Deferred one scheduling tick so a host that calls this during its
    /// own mount does not re-enter rendering synchronously. Priority:
    /// persisted value, else ambient signal, else light. Dropping the
    /// returned future before it completes leaves the slice untouched.
    pub async fn initialize(&self) -> ThemeMode {
        if self.initialized.load(Ordering::SeqCst) {
            return self.mode();
        }
        tokio::task::yield_now().await;

        // Commit the one-shot only after the deferral: a host that drops
        // the future mid-tick must be able to initialize again later.
        if self.initialized.swap(true, Ordering::SeqCst) {
            return self.mode();
        }

        let resolved = ThemeMode::resolve(self.store.load_theme(), self.ambient.preferred());
        debug!(mode = %resolved, "theme resolved at mount");
        self.transition(resolved);
        resolved
    }

    /// Flip the mode unconditionally.
    pub fn toggle(&self) -> ThemeMode {
        let next = self.mode().flip();
        self.transition(next);
        next
    }

    /// The active mode. Light until startup resolution completes.
    pub fn mode(&self) -> ThemeMode {
        *self.mode.lock().unwrap()
    }

    /// Lifecycle end. The controller holds no live timers; the deferral
    /// inside [`initialize`](Self::initialize) is cancelled by dropping
    /// its future.
    pub fn teardown(&self) {
        debug!("theme controller torn down");
    }

    fn transition(&self, mode: ThemeMode) {
        *self.mode.lock().unwrap() = mode;
        self.applier.apply(mode);
        self.store.store_theme(mode);
    }
}
