//! Order State Store Trait
//!
//! Persistence abstraction for lifecycle aggregates, keyed by root order id.
//! Implemented by adapters in the infrastructure layer.

use async_trait::async_trait;

use super::aggregate::OrderState;
use super::errors::StoreError;
use crate::domain::shared::OrderId;

/// Keyed store of lifecycle aggregates.
///
/// Only root order ids are ever used as keys; child orders live inside
/// their root's aggregate.
#[async_trait]
pub trait OrderStateStore: Send + Sync {
    /// Load the aggregate for `key`.
    ///
    /// # Errors
    ///
    /// Returns error if the store is unavailable or the state is corrupt.
    async fn get(&self, key: &OrderId) -> Result<Option<OrderState>, StoreError>;

    /// Insert or replace the aggregate for `key`.
    ///
    /// # Errors
    ///
    /// Returns error if the store is unavailable.
    async fn put(&self, key: &OrderId, state: &OrderState) -> Result<(), StoreError>;

    /// All stored keys, sorted.
    ///
    /// # Errors
    ///
    /// Returns error if the store is unavailable.
    async fn keys(&self) -> Result<Vec<OrderId>, StoreError>;

    /// Number of stored aggregates.
    ///
    /// # Errors
    ///
    /// Returns error if the store is unavailable.
    async fn len(&self) -> Result<usize, StoreError>;

    /// Returns true if nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns error if the store is unavailable.
    async fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len().await? == 0)
    }
}
