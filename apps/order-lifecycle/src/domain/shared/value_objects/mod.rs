//! Shared Value Objects
//!
//! Immutable domain types used across bounded contexts.
//! Value objects are compared by value, not identity.

mod identifiers;
mod price;
mod quantity;
mod timestamp;

pub use identifiers::{ExecId, OrderId};
pub use price::Price;
pub use quantity::Quantity;
pub use timestamp::Timestamp;
