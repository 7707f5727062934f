//! Persistence Adapters
//!
//! Implementations of the order state store.

mod in_memory;

pub use in_memory::InMemoryOrderStateStore;
