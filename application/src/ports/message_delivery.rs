//! Message delivery port
//!
//! The boundary `submit()` hands the finished contact draft to. The
//! shipped stub always succeeds and never calls out; a production adapter
//! that can fail must leave the form untouched on failure so user input is
//! never destroyed.

use async_trait::async_trait;
use folio_domain::ContactDraft;
use thiserror::Error;

/// Errors a real delivery backend can surface.
#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("Delivery failed: {0}")]
    Failed(String),
}

/// Accepts a completed contact draft.
#[async_trait]
pub trait MessageDelivery: Send + Sync {
    async fn deliver(&self, draft: &ContactDraft) -> Result<(), DeliveryError>;
}
