//! Toast notifier slice
//!
//! One live notification, one live timer. A new `notify` replaces the slot
//! unconditionally and invalidates the previous dismissal timer, so an
//! earlier timer can never clear a newer message. The slot also carries a
//! generation stamp the timer re-checks before clearing, covering the
//! window between abort and an already-scheduled wakeup.

use folio_domain::{Notification, Severity};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Fixed auto-dismiss delay.
pub const DISMISS_AFTER: Duration = Duration::from_millis(3000);

struct Slot {
    current: Notification,
    generation: u64,
}

/// The single-slot transient notification service.
///
/// Shared by handle (`Arc<ToastNotifier>`); every producer slice calls
/// [`notify`](Self::notify).
pub struct ToastNotifier {
    slot: Arc<Mutex<Slot>>,
    dismiss_after: Duration,
    cancel: CancellationToken,
    timer: Mutex<Option<JoinHandle<()>>>,
}

impl ToastNotifier {
    pub fn new() -> Self {
        Self {
            slot: Arc::new(Mutex::new(Slot {
                current: Notification::none(),
                generation: 0,
            })),
            dismiss_after: DISMISS_AFTER,
            cancel: CancellationToken::new(),
            timer: Mutex::new(None),
        }
    }

    /// Override the dismissal delay (tests, demos).
    pub fn with_dismiss_after(mut self, delay: Duration) -> Self {
        self.dismiss_after = delay;
        self
    }

    /// Replace the current notification and restart the dismissal timer.
    pub fn notify(&self, message: impl Into<String>, severity: Severity) {
        self.replace(Notification::new(message, severity));
    }

    /// Install a pre-built notification, restarting the dismissal timer.
    pub fn replace(&self, notification: Notification) {
        debug!(severity = ?notification.severity, "toast: {}", notification.message);

        let generation = {
            let mut slot = self.slot.lock().unwrap();
            slot.generation += 1;
            slot.current = notification;
            slot.generation
        };

        self.invalidate_timer();

        let slot = Arc::clone(&self.slot);
        let cancel = self.cancel.clone();
        let delay = self.dismiss_after;
        let handle = tokio::spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    let mut slot = slot.lock().unwrap();
                    // A newer notify or dismiss owns the slot now
                    if slot.generation == generation {
                        slot.current = Notification::none();
                    }
                }
            }
        });
        *self.timer.lock().unwrap() = Some(handle);
    }

    /// Clear the slot immediately.
    pub fn dismiss(&self) {
        let mut slot = self.slot.lock().unwrap();
        slot.generation += 1;
        slot.current = Notification::none();
        drop(slot);
        self.invalidate_timer();
    }

    /// The notification to render. Empty message means render nothing.
    pub fn current(&self) -> Notification {
        self.slot.lock().unwrap().current.clone()
    }

    /// Cancel the pending dismissal, leaving the slot as-is. After
    /// teardown no timer mutates the slot.
    pub fn teardown(&self) {
        self.cancel.cancel();
        self.invalidate_timer();
    }

    fn invalidate_timer(&self) {
        if let Some(handle) = self.timer.lock().unwrap().take() {
            handle.abort();
        }
    }
}

impl Default for ToastNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ToastNotifier {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Convenience constructors used by producer slices.
impl ToastNotifier {
    pub fn success(&self, message: impl Into<String>) {
        self.replace(Notification::success(message));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.replace(Notification::error(message));
    }

    pub fn info(&self, message: impl Into<String>) {
        self.replace(Notification::info(message));
    }
}
