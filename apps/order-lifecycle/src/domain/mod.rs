//! Domain Layer
//!
//! The innermost layer containing business logic with zero infrastructure dependencies.
//! This layer defines:
//!
//! - **Aggregates**: The per-root order state tree
//! - **Value Objects**: Execution reports, fills, identifiers, quantities
//! - **Domain Services**: Classification, routing, completion, and the fold itself
//! - **Repository Traits**: State store abstraction (implemented in adapters)
//!
//! # Bounded Contexts
//!
//! - [`order_lifecycle`]: Execution report aggregation into order state

pub mod order_lifecycle;
pub mod shared;
