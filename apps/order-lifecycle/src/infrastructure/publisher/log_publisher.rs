//! Publishes every updated aggregate as a tracing event.

use async_trait::async_trait;

use crate::application::ports::{PublishError, StatePublisherPort};
use crate::domain::order_lifecycle::OrderState;
use crate::domain::shared::OrderId;
use crate::infrastructure::codec::encode_state;

/// Logs each updated aggregate at INFO, tagged with a stream label.
#[derive(Debug, Clone)]
pub struct LoggingStatePublisher {
    label: String,
}

impl LoggingStatePublisher {
    /// Create a publisher that tags every event with `label`.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// Get the stream label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

#[async_trait]
impl StatePublisherPort for LoggingStatePublisher {
    async fn publish(&self, key: &OrderId, state: &OrderState) -> Result<(), PublishError> {
        let body = encode_state(state).map_err(|e| PublishError::SerializationError {
            message: e.to_string(),
        })?;
        tracing::info!(label = %self.label, key = %key, state = %body, "Order state");
        Ok(())
    }
}
