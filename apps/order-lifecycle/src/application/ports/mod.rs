//! Application Ports (Driven)
//!
//! Ports define interfaces for interacting with external systems.
//! The state store port lives with the domain as
//! [`OrderStateStore`](crate::domain::order_lifecycle::OrderStateStore).

mod state_publisher_port;

pub use state_publisher_port::{NoOpStatePublisher, PublishError, StatePublisherPort};
