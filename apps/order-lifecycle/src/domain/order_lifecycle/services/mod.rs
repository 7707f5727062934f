//! Order Lifecycle Domain Services
//!
//! Stateless logic that routes reports into the aggregate and derives status.

mod aggregator;
mod completion_evaluator;
mod event_classifier;
mod node_resolver;
mod order_state_updater;

pub use aggregator::OrderLifecycleAggregator;
pub use completion_evaluator::CompletionEvaluator;
pub use event_classifier::{EventClassifier, EventKind};
pub use node_resolver::NodeResolver;
pub use order_state_updater::OrderStateUpdater;
