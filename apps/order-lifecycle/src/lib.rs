// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::items_after_statements
    )
)]

//! Order Lifecycle - Rust Core Library
//!
//! Folds a stream of execution reports into one lifecycle snapshot per root
//! order: definition, fills, children, and completion status.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic
//!   - `order_lifecycle`: `OrderState` aggregate, fill ledger, completion, the fold
//!   - `shared`: Identifiers, quantities, prices, timestamps
//!
//! - **Application**: Use cases and orchestration
//!   - `ports`: `StatePublisherPort`
//!   - `use_cases`: `ProcessExecutionReport`
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `codec`: JSON records and state
//!   - `persistence`: Order state store (in-memory)
//!   - `publisher`: Log, stdout, and no-op sinks
//!   - `runtime`: Partitioned worker pool (per-key serialization)

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

// =============================================================================
// Cross-cutting
// =============================================================================

/// YAML configuration.
pub mod config;

/// Tracing subscriber setup.
pub mod telemetry;

// =============================================================================
// Re-exports
// =============================================================================

// Domain re-exports
pub use domain::order_lifecycle::{
    ExecType, ExecutionReport, Fill, FillLogPolicy, OrderLifecycleAggregator, OrderNode,
    OrderState, OrderStateStore, OrderStatus,
};
pub use domain::shared::{ExecId, OrderId, Price, Quantity, Timestamp};

// Application re-exports
pub use application::ports::{NoOpStatePublisher, StatePublisherPort};
pub use application::use_cases::{ProcessExecutionReportUseCase, ProcessingError};

// Infrastructure re-exports
pub use infrastructure::persistence::InMemoryOrderStateStore;
pub use infrastructure::runtime::PartitionedProcessor;
