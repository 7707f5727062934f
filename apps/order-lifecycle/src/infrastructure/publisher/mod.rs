//! State Publisher Adapters
//!
//! Downstream sinks for updated aggregates.

mod log_publisher;
mod stdout_publisher;

use async_trait::async_trait;

pub use log_publisher::LoggingStatePublisher;
pub use stdout_publisher::{JsonLinesStatePublisher, StdoutStatePublisher};

use crate::application::ports::{NoOpStatePublisher, PublishError, StatePublisherPort};
use crate::config::{PublisherConfig, PublisherKind};
use crate::domain::order_lifecycle::OrderState;
use crate::domain::shared::OrderId;

/// Publisher selected by configuration.
#[derive(Debug)]
pub enum ConfiguredPublisher {
    /// Tracing log sink.
    Log(LoggingStatePublisher),
    /// Stdout JSON lines sink.
    Stdout(StdoutStatePublisher),
    /// Discard.
    Discard(NoOpStatePublisher),
}

impl ConfiguredPublisher {
    /// Build the publisher described by `config`.
    #[must_use]
    pub fn from_config(config: &PublisherConfig) -> Self {
        match config.kind {
            PublisherKind::Log => Self::Log(LoggingStatePublisher::new(config.label.clone())),
            PublisherKind::Stdout => Self::Stdout(StdoutStatePublisher::stdout(config.label.clone())),
            PublisherKind::None => Self::Discard(NoOpStatePublisher),
        }
    }
}

#[async_trait]
impl StatePublisherPort for ConfiguredPublisher {
    async fn publish(&self, key: &OrderId, state: &OrderState) -> Result<(), PublishError> {
        match self {
            Self::Log(publisher) => publisher.publish(key, state).await,
            Self::Stdout(publisher) => publisher.publish(key, state).await,
            Self::Discard(publisher) => publisher.publish(key, state).await,
        }
    }
}
