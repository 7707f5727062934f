//! State Publisher Port (Driven Port)
//!
//! Interface for emitting updated aggregates downstream.

use async_trait::async_trait;

use crate::domain::order_lifecycle::OrderState;
use crate::domain::shared::OrderId;

/// State publishing error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PublishError {
    /// Serialization error.
    #[error("State serialization error: {message}")]
    SerializationError { message: String },

    /// Publishing failed.
    #[error("State publish failed: {message}")]
    PublishFailed { message: String },
}

/// Port for publishing updated order state, keyed by root order id.
#[async_trait]
pub trait StatePublisherPort: Send + Sync {
    /// Publish one updated aggregate.
    async fn publish(&self, key: &OrderId, state: &OrderState) -> Result<(), PublishError>;
}

/// No-op state publisher.
#[derive(Debug, Clone, Default)]
pub struct NoOpStatePublisher;

#[async_trait]
impl StatePublisherPort for NoOpStatePublisher {
    async fn publish(&self, _key: &OrderId, _state: &OrderState) -> Result<(), PublishError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn no_op_publisher_succeeds() {
        let publisher = NoOpStatePublisher;
        let result = publisher
            .publish(&OrderId::new("order-1"), &OrderState::new())
            .await;
        assert!(result.is_ok());
    }

    #[test]
    fn publish_error_display() {
        let err = PublishError::PublishFailed {
            message: "broken pipe".to_string(),
        };
        assert_eq!(err.to_string(), "State publish failed: broken pipe");
    }
}
