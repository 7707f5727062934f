//! Order Lifecycle Bounded Context
//!
//! Folds a stream of execution reports into one state aggregate per root
//! order, tracking fills and completion across a parent and its children.
//!
//! # Key Concepts
//!
//! - **Order State**: Root order node plus last activity time, keyed by root order id
//! - **Fill Ledger**: Per-node map from fill id to quantity; replays are harmless
//! - **Completion**: FILLED once filled quantity (children included) meets expected quantity

pub mod aggregate;
pub mod errors;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use aggregate::{OrderNode, OrderState};
pub use errors::{StoreError, ValidationError};
pub use repository::OrderStateStore;
pub use services::{
    CompletionEvaluator, EventClassifier, EventKind, NodeResolver, OrderLifecycleAggregator,
    OrderStateUpdater,
};
pub use value_objects::{
    ExecType, ExecutionReport, Fill, FillLogPolicy, OrderDefinition, OrderStatus,
};
