//! Content generator port
//!
//! The asynchronous boundary behind the draft assistant and the idea
//! generator. The fixed-latency deterministic mock in the infrastructure
//! layer is one implementation; a real backend substitutes here without
//! changing any state machine shape.

use async_trait::async_trait;
use folio_domain::GenerationRequest;
use thiserror::Error;

/// Errors a real generation backend can surface.
///
/// The mock never fails; callers must still treat failure as
/// non-destructive and leave form state untouched.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Generation timed out")]
    Timeout,

    #[error("Generation backend error: {0}")]
    Backend(String),
}

/// Produces generated text for a typed request.
///
/// [`GenerationRequest::prompt`] renders the instruction text, so an
/// adapter wrapping a real backend only forwards a string.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError>;
}
