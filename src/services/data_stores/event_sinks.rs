use serde_json::Value;

use crate::domain::{ActivityPublisher, AuditEvent, AuditPublishError, EventDispatcher};

/// Activity sink that writes entries to the tracing layer. Good enough for
/// hosts without an activity feed of their own.
#[derive(Default)]
pub struct TracingActivityPublisher;

#[async_trait::async_trait]
impl ActivityPublisher for TracingActivityPublisher {
    async fn publish(&self, event: AuditEvent) -> Result<(), AuditPublishError> {
        tracing::info!(
            app = %event.app,
            event_type = %event.event_type,
            actor = event.actor_uid.as_ref(),
            subject = %event.subject,
            params = %event.params,
            "activity event"
        );
        Ok(())
    }
}

/// Dispatcher that drops domain events, logging them at debug level.
#[derive(Default)]
pub struct NullEventDispatcher;

#[async_trait::async_trait]
impl EventDispatcher for NullEventDispatcher {
    async fn dispatch(&self, event_name: &str, payload: Value) {
        tracing::debug!(event = event_name, payload = %payload, "domain event dropped");
    }
}
