use serde_json::Value;
use thiserror::Error;

use crate::domain::AuditEvent;

#[derive(Error, Debug, PartialEq)]
pub enum AuditPublishError {
    #[error("activity publisher failure")]
    UnexpectedError,
}

/// Audit/activity feed. Delivery is best effort: publish failures are
/// logged by the caller and swallowed, they never block authentication.
#[async_trait::async_trait]
pub trait ActivityPublisher: Send + Sync {
    async fn publish(&self, event: AuditEvent) -> Result<(), AuditPublishError>;
}

/// Domain event bus, fire-and-forget.
#[async_trait::async_trait]
pub trait EventDispatcher: Send + Sync {
    async fn dispatch(&self, event_name: &str, payload: Value);
}
