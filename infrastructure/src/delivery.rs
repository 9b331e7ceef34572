//! Message delivery stub
//!
//! Accepts the finished draft and always reports success without calling
//! out anywhere.

use async_trait::async_trait;
use folio_application::{DeliveryError, MessageDelivery};
use folio_domain::ContactDraft;
use tracing::info;

/// The always-success delivery collaborator.
pub struct NoopDelivery;

#[async_trait]
impl MessageDelivery for NoopDelivery {
    async fn deliver(&self, draft: &ContactDraft) -> Result<(), DeliveryError> {
        info!(
            sender = %draft.name,
            email = %draft.email,
            "accepting contact message ({} bytes)",
            draft.message.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_domain::ContactField;

    #[tokio::test]
    async fn always_succeeds() {
        let mut draft = ContactDraft::new();
        draft.set(ContactField::Name, "Ada");
        assert!(NoopDelivery.deliver(&draft).await.is_ok());
    }
}
