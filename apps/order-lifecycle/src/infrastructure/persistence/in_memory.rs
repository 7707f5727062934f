//! In-memory order state store.
//!
//! Aggregates are held in their encoded JSON form, the same bytes a
//! changelog-backed store would keep, so every read goes through the codec.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::order_lifecycle::{OrderState, OrderStateStore, StoreError};
use crate::domain::shared::OrderId;
use crate::infrastructure::codec::{decode_state, encode_state};

/// In-memory implementation of `OrderStateStore`.
///
/// Suitable for a single process and for tests. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct InMemoryOrderStateStore {
    states: RwLock<HashMap<OrderId, String>>,
}

fn poisoned<T>(_: T) -> StoreError {
    StoreError::Unavailable {
        message: "state store lock poisoned".to_string(),
    }
}

impl InMemoryOrderStateStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store raw encoded state under `key` (for restore and test setup).
    ///
    /// # Errors
    ///
    /// Returns error if the store lock is poisoned.
    pub fn put_raw(&self, key: OrderId, encoded: String) -> Result<(), StoreError> {
        self.states.write().map_err(poisoned)?.insert(key, encoded);
        Ok(())
    }
}

#[async_trait]
impl OrderStateStore for InMemoryOrderStateStore {
    async fn get(&self, key: &OrderId) -> Result<Option<OrderState>, StoreError> {
        let encoded = {
            let states = self.states.read().map_err(poisoned)?;
            states.get(key).cloned()
        };
        encoded
            .map(|json| {
                decode_state(&json).map_err(|e| StoreError::Corrupt {
                    key: key.clone(),
                    message: e.to_string(),
                })
            })
            .transpose()
    }

    async fn put(&self, key: &OrderId, state: &OrderState) -> Result<(), StoreError> {
        let encoded = encode_state(state).map_err(|e| StoreError::Corrupt {
            key: key.clone(),
            message: e.to_string(),
        })?;
        self.put_raw(key.clone(), encoded)
    }

    async fn keys(&self) -> Result<Vec<OrderId>, StoreError> {
        let mut keys: Vec<OrderId> = self
            .states
            .read()
            .map_err(poisoned)?
            .keys()
            .cloned()
            .collect();
        keys.sort();
        Ok(keys)
    }

    async fn len(&self) -> Result<usize, StoreError> {
        Ok(self.states.read().map_err(poisoned)?.len())
    }
}
