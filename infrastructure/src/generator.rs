//! Fixed-latency canned content generator
//!
//! The shipped [`ContentGenerator`] implementation: deterministic template
//! output after a fixed simulated latency, and it never fails. A real
//! backend adapter replaces this without touching any state slice.

use async_trait::async_trait;
use folio_application::{ContentGenerator, GenerationError};
use folio_domain::{GenerationRequest, canned_reply};
use std::time::Duration;
use tokio::time::sleep;
use tracing::debug;

/// Simulated latency for a contact acknowledgment draft.
pub const DRAFT_LATENCY: Duration = Duration::from_millis(1200);
/// Simulated latency for a project idea.
pub const IDEA_LATENCY: Duration = Duration::from_millis(1800);

/// Deterministic mock generator.
pub struct CannedGenerator {
    draft_latency: Duration,
    idea_latency: Duration,
}

impl CannedGenerator {
    pub fn new() -> Self {
        Self {
            draft_latency: DRAFT_LATENCY,
            idea_latency: IDEA_LATENCY,
        }
    }

    /// Override both latencies (demos that should not dawdle).
    pub fn with_latencies(draft: Duration, idea: Duration) -> Self {
        Self {
            draft_latency: draft,
            idea_latency: idea,
        }
    }

    fn latency_for(&self, request: &GenerationRequest) -> Duration {
        match request {
            GenerationRequest::ContactAcknowledgment { .. } => self.draft_latency,
            GenerationRequest::ProjectIdea { .. } => self.idea_latency,
        }
    }
}

impl Default for CannedGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentGenerator for CannedGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        debug!("canned generation for prompt: {}", request.prompt());
        sleep(self.latency_for(request)).await;
        Ok(canned_reply(request))
    }
}
