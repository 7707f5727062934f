//! Order State Aggregate
//!
//! One lifecycle aggregate per root order id. The root node's fields are
//! flattened into the serialized form, alongside the last action timestamp.

use serde::{Deserialize, Serialize};

use super::OrderNode;
use crate::domain::order_lifecycle::value_objects::{Fill, OrderStatus};
use crate::domain::shared::{OrderId, Quantity, Timestamp};

/// Lifecycle state of a root order and its children.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderState {
    #[serde(flatten)]
    root: OrderNode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_action_timestamp: Option<Timestamp>,
}

impl OrderState {
    /// Create an empty aggregate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the root order node.
    #[must_use]
    pub const fn root(&self) -> &OrderNode {
        &self.root
    }

    pub(crate) const fn root_mut(&mut self) -> &mut OrderNode {
        &mut self.root
    }

    /// Get the root order id.
    #[must_use]
    pub const fn order_id(&self) -> Option<&OrderId> {
        self.root.order_id()
    }

    /// Get the root status.
    #[must_use]
    pub const fn status(&self) -> OrderStatus {
        self.root.status()
    }

    /// Get the root expected quantity.
    #[must_use]
    pub const fn expected_quantity(&self) -> Quantity {
        self.root.expected_quantity()
    }

    /// Quantity filled across the whole hierarchy.
    #[must_use]
    pub fn filled_quantity(&self) -> Quantity {
        self.root.filled_quantity()
    }

    /// Every fill in the hierarchy, root fills first.
    #[must_use]
    pub fn all_fills(&self) -> Vec<&Fill> {
        self.root.all_fills()
    }

    /// Look up a child of the root.
    #[must_use]
    pub fn child(&self, order_id: &OrderId) -> Option<&OrderNode> {
        self.root.child(order_id)
    }

    /// Wall-clock time of the last report folded into this aggregate.
    #[must_use]
    pub const fn last_action_timestamp(&self) -> Option<Timestamp> {
        self.last_action_timestamp
    }

    /// Adopt the partition key as the root order id if none is set yet.
    pub(crate) fn initialize_key(&mut self, key: &OrderId) {
        self.root.set_order_id_if_absent(key);
    }

    pub(crate) const fn touch(&mut self, at: Timestamp) {
        self.last_action_timestamp = Some(at);
    }
}
