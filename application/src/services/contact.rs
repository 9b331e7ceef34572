//! Contact form slice
//!
//! Owns the form draft, the drafted acknowledgment artifact, and the draft
//! assistant's pending flag. The assistant's state machine is
//! `Idle -> Pending -> Idle-with-artifact`, returning to `Idle` on any
//! edit of the message field.
//!
//! Staleness is tracked with a message revision: every message edit bumps
//! it and clears the artifact, and a generation landing against an older
//! revision is discarded. Re-invocation while pending is rejected here,
//! not only by the disabled trigger in the UI.

use crate::ports::content_generator::ContentGenerator;
use crate::ports::message_delivery::MessageDelivery;
use crate::services::toast::ToastNotifier;
use folio_domain::{ContactDraft, ContactField, GenerationRequest};
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

struct FormState {
    draft: ContactDraft,
    drafted_response: String,
    drafting: bool,
    /// Bumped on every message edit and on submit; a draft generation is
    /// installed only if the revision it started from is still current.
    revision: u64,
}

/// The contact form state slice.
pub struct ContactFormService {
    state: Arc<Mutex<FormState>>,
    toasts: Arc<ToastNotifier>,
    generator: Arc<dyn ContentGenerator>,
    delivery: Arc<dyn MessageDelivery>,
    cancel: CancellationToken,
}

impl ContactFormService {
    pub fn new(
        toasts: Arc<ToastNotifier>,
        generator: Arc<dyn ContentGenerator>,
        delivery: Arc<dyn MessageDelivery>,
    ) -> Self {
        Self {
            state: Arc::new(Mutex::new(FormState {
                draft: ContactDraft::new(),
                drafted_response: String::new(),
                drafting: false,
                revision: 0,
            })),
            toasts,
            generator,
            delivery,
            cancel: CancellationToken::new(),
        }
    }

    /// Bind a field value. Editing the message invalidates any previously
    /// drafted response.
    pub fn update_field(&self, field: ContactField, value: impl Into<String>) {
        let mut state = self.state.lock().unwrap();
        state.draft.set(field, value);
        if field.invalidates_draft() {
            state.drafted_response.clear();
            state.revision += 1;
        }
    }

    /// Submit the form: hand the draft to the delivery collaborator, emit
    /// one success toast naming the sender, then reset the slice.
    ///
    /// Required-field presence is enforced by the surrounding form
    /// control, not here. On delivery failure the form is left untouched
    /// so user input is never destroyed.
    pub async fn submit(&self) {
        let draft = self.state.lock().unwrap().draft.clone();
        match self.delivery.deliver(&draft).await {
            Ok(()) => {
                self.toasts
                    .success(format!("Message sent! Thanks, {}.", draft.name));
                let mut state = self.state.lock().unwrap();
                state.draft.reset();
                state.drafted_response.clear();
                state.revision += 1;
            }
            Err(e) => {
                warn!("message delivery failed: {e}");
                self.toasts
                    .error("Your message could not be sent. Please try again.");
            }
        }
    }

    /// Ask the assistant to draft an acknowledgment reply.
    ///
    /// Refused with an info toast when name or message is empty, and
    /// silently rejected while a draft is already pending. Otherwise the
    /// generation runs in the background; the slice returns to idle when
    /// it lands.
    pub fn request_draft(&self) {
        let (request, revision) = {
            let mut state = self.state.lock().unwrap();
            if state.drafting {
                warn!("draft request rejected: already pending");
                return;
            }
            if state.draft.missing_for_draft() {
                drop(state);
                self.toasts
                    .info("Please fill in your Name and Message to draft a response.");
                return;
            }
            state.drafting = true;
            (
                GenerationRequest::acknowledgment(state.draft.name.clone(), &state.draft.message),
                state.revision,
            )
        };

        let state = Arc::clone(&self.state);
        let generator = Arc::clone(&self.generator);
        let toasts = Arc::clone(&self.toasts);
        let cancel = self.cancel.clone();
        tokio::spawn(async move {
            let result = tokio::select! {
                _ = cancel.cancelled() => return,
                result = generator.generate(&request) => result,
            };
            let mut state = state.lock().unwrap();
            state.drafting = false;
            match result {
                Ok(text) if state.revision == revision => state.drafted_response = text,
                Ok(_) => debug!("discarding draft generated against an edited message"),
                Err(e) => {
                    warn!("draft generation failed: {e}");
                    drop(state);
                    toasts.error("Could not draft a response. Please try again.");
                }
            }
        });
    }

    /// Current field values.
    pub fn draft(&self) -> ContactDraft {
        self.state.lock().unwrap().draft.clone()
    }

    /// The drafted acknowledgment, empty when none (or stale).
    pub fn drafted_response(&self) -> String {
        self.state.lock().unwrap().drafted_response.clone()
    }

    /// Whether a draft generation is in flight. The rendering host
    /// disables the trigger while this is set.
    pub fn is_drafting(&self) -> bool {
        self.state.lock().unwrap().drafting
    }

    /// Cancel any in-flight generation so nothing mutates the slice after
    /// unmount.
    pub fn teardown(&self) {
        self.cancel.cancel();
    }
}

impl Drop for ContactFormService {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::content_generator::GenerationError;
    use crate::ports::message_delivery::DeliveryError;
    use async_trait::async_trait;
    use folio_domain::{Severity, canned_reply};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    // ==================== Test Mocks ====================

    /// Fixed-latency generator mirroring the shipped mock, with a call
    /// counter for re-entrancy assertions.
    struct SlowGenerator {
        latency: Duration,
        calls: AtomicUsize,
        fail: bool,
    }

    impl SlowGenerator {
        fn new(latency_ms: u64) -> Self {
            Self {
                latency: Duration::from_millis(latency_ms),
                calls: AtomicUsize::new(0),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::new(1200)
            }
        }
    }

    #[async_trait]
    impl ContentGenerator for SlowGenerator {
        async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(self.latency).await;
            if self.fail {
                return Err(GenerationError::Backend("mock failure".to_string()));
            }
            Ok(canned_reply(request))
        }
    }

    struct AlwaysDeliver;

    #[async_trait]
    impl MessageDelivery for AlwaysDeliver {
        async fn deliver(&self, _draft: &ContactDraft) -> Result<(), DeliveryError> {
            Ok(())
        }
    }

    struct NeverDeliver;

    #[async_trait]
    impl MessageDelivery for NeverDeliver {
        async fn deliver(&self, _draft: &ContactDraft) -> Result<(), DeliveryError> {
            Err(DeliveryError::Failed("wire down".to_string()))
        }
    }

    fn form_with(generator: Arc<SlowGenerator>) -> (ContactFormService, Arc<ToastNotifier>) {
        let toasts = Arc::new(ToastNotifier::new());
        let form = ContactFormService::new(toasts.clone(), generator, Arc::new(AlwaysDeliver));
        (form, toasts)
    }

    fn form() -> (ContactFormService, Arc<ToastNotifier>) {
        form_with(Arc::new(SlowGenerator::new(1200)))
    }

    // ==================== Tests ====================

    #[tokio::test(start_paused = true)]
    async fn drafting_produces_the_acknowledgment_after_latency() {
        let (form, _) = form();
        form.update_field(ContactField::Name, "Ada");
        form.update_field(
            ContactField::Message,
            "Hello world this message exceeds thirty characters total",
        );

        form.request_draft();
        assert!(form.is_drafting());
        assert!(form.drafted_response().is_empty());

        tokio::time::sleep(Duration::from_millis(1201)).await;
        let response = form.drafted_response();
        assert!(!form.is_drafting());
        assert!(response.contains("Ada"));
        assert!(response.contains("...\""));
        // Preview is capped at 30 source characters
        assert!(response.contains("Hello world this message excee..."));
    }

    #[tokio::test(start_paused = true)]
    async fn draft_request_without_name_or_message_is_refused() {
        let (form, toasts) = form();
        form.update_field(ContactField::Name, "Ada");

        form.request_draft();

        assert!(!form.is_drafting());
        assert!(form.drafted_response().is_empty());
        let toast = toasts.current();
        assert_eq!(toast.severity, Severity::Info);
        assert_eq!(
            toast.message,
            "Please fill in your Name and Message to draft a response."
        );
    }

    #[tokio::test(start_paused = true)]
    async fn editing_the_message_clears_the_draft() {
        let (form, _) = form();
        form.update_field(ContactField::Name, "Ada");
        form.update_field(ContactField::Message, "Original message");
        form.request_draft();
        tokio::time::sleep(Duration::from_millis(1201)).await;
        assert!(!form.drafted_response().is_empty());

        form.update_field(ContactField::Message, "Edited");
        assert!(form.drafted_response().is_empty());

        // Name and email edits leave the artifact alone
        form.request_draft();
        tokio::time::sleep(Duration::from_millis(1201)).await;
        form.update_field(ContactField::Name, "Grace");
        form.update_field(ContactField::Email, "g@example.com");
        assert!(!form.drafted_response().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn generation_landing_against_an_edited_message_is_discarded() {
        let (form, _) = form();
        form.update_field(ContactField::Name, "Ada");
        form.update_field(ContactField::Message, "Original message");
        form.request_draft();

        tokio::time::sleep(Duration::from_millis(600)).await;
        form.update_field(ContactField::Message, "Edited mid-flight");

        tokio::time::sleep(Duration::from_millis(601)).await;
        assert!(!form.is_drafting());
        assert!(form.drafted_response().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn reentrant_draft_requests_are_rejected_while_pending() {
        let generator = Arc::new(SlowGenerator::new(1200));
        let (form, _) = form_with(generator.clone());
        form.update_field(ContactField::Name, "Ada");
        form.update_field(ContactField::Message, "Hello");

        form.request_draft();
        form.request_draft();
        form.request_draft();

        tokio::time::sleep(Duration::from_millis(1300)).await;
        assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
        assert!(!form.is_drafting());
    }

    #[tokio::test(start_paused = true)]
    async fn submit_resets_everything_and_toasts_the_sender() {
        let (form, toasts) = form();
        form.update_field(ContactField::Name, "Ada");
        form.update_field(ContactField::Email, "ada@example.com");
        form.update_field(ContactField::Message, "Hello");
        form.request_draft();
        tokio::time::sleep(Duration::from_millis(1201)).await;
        assert!(!form.drafted_response().is_empty());

        form.submit().await;

        assert_eq!(form.draft(), ContactDraft::default());
        assert!(form.drafted_response().is_empty());
        let toast = toasts.current();
        assert_eq!(toast.severity, Severity::Success);
        assert_eq!(toast.message, "Message sent! Thanks, Ada.");
    }

    #[tokio::test(start_paused = true)]
    async fn delivery_failure_preserves_the_form() {
        let toasts = Arc::new(ToastNotifier::new());
        let form = ContactFormService::new(
            toasts.clone(),
            Arc::new(SlowGenerator::new(1200)),
            Arc::new(NeverDeliver),
        );
        form.update_field(ContactField::Name, "Ada");
        form.update_field(ContactField::Email, "ada@example.com");
        form.update_field(ContactField::Message, "Hello");

        form.submit().await;

        // Non-destructive failure: input survives, error toast raised
        assert_eq!(form.draft().name, "Ada");
        assert_eq!(form.draft().message, "Hello");
        assert_eq!(toasts.current().severity, Severity::Error);
    }

    #[tokio::test(start_paused = true)]
    async fn generator_failure_leaves_the_form_untouched() {
        let toasts = Arc::new(ToastNotifier::new());
        let form = ContactFormService::new(
            toasts.clone(),
            Arc::new(SlowGenerator::failing()),
            Arc::new(AlwaysDeliver),
        );
        form.update_field(ContactField::Name, "Ada");
        form.update_field(ContactField::Message, "Hello");

        form.request_draft();
        tokio::time::sleep(Duration::from_millis(1201)).await;

        assert!(!form.is_drafting());
        assert!(form.drafted_response().is_empty());
        assert_eq!(form.draft().name, "Ada");
        assert_eq!(toasts.current().severity, Severity::Error);
    }

    #[tokio::test(start_paused = true)]
    async fn teardown_cancels_an_inflight_draft() {
        let (form, _) = form();
        form.update_field(ContactField::Name, "Ada");
        form.update_field(ContactField::Message, "Hello");
        form.request_draft();

        form.teardown();
        tokio::time::sleep(Duration::from_millis(2000)).await;

        // The cancelled flight never installed its artifact
        assert!(form.drafted_response().is_empty());
    }
}
