//! Order Node
//!
//! The recursive unit of lifecycle state: one order's definition, its fill
//! ledger, its status, and its child orders.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::order_lifecycle::value_objects::{
    Fill, FillLogPolicy, OrderDefinition, OrderStatus,
};
use crate::domain::shared::{ExecId, OrderId, Quantity, Timestamp};

/// State of a single order within a lifecycle aggregate.
///
/// Children are owned by their parent node and keyed by their own order id.
/// Only one level of children is ever populated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    order_id: Option<OrderId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    msg_id: Option<ExecId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent_order_id: Option<OrderId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    trade_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    transaction_time: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    currency: Option<String>,
    status: OrderStatus,
    #[serde(skip_serializing_if = "Quantity::is_zero")]
    expected_quantity: Quantity,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    fills: Vec<Fill>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    filled_quantity_map: BTreeMap<ExecId, Quantity>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    child_orders: BTreeMap<OrderId, Self>,
}

impl OrderNode {
    /// Create an empty node.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty child node under `parent_order_id`.
    #[must_use]
    pub fn child_of(order_id: OrderId, parent_order_id: OrderId) -> Self {
        Self {
            order_id: Some(order_id),
            parent_order_id: Some(parent_order_id),
            ..Self::default()
        }
    }

    // ========================================================================
    // Getters
    // ========================================================================

    /// Get the order id, if known.
    #[must_use]
    pub const fn order_id(&self) -> Option<&OrderId> {
        self.order_id.as_ref()
    }

    /// Get the id of the last definition report applied.
    #[must_use]
    pub const fn msg_id(&self) -> Option<&ExecId> {
        self.msg_id.as_ref()
    }

    /// Get the parent order id (children only).
    #[must_use]
    pub const fn parent_order_id(&self) -> Option<&OrderId> {
        self.parent_order_id.as_ref()
    }

    /// Get the trade date.
    #[must_use]
    pub const fn trade_date(&self) -> Option<NaiveDate> {
        self.trade_date
    }

    /// Get the transaction time of the definition.
    #[must_use]
    pub const fn transaction_time(&self) -> Option<Timestamp> {
        self.transaction_time
    }

    /// Get the currency.
    #[must_use]
    pub fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }

    /// Get the current status.
    #[must_use]
    pub const fn status(&self) -> OrderStatus {
        self.status
    }

    /// Get the expected quantity (zero until a definition is applied).
    #[must_use]
    pub const fn expected_quantity(&self) -> Quantity {
        self.expected_quantity
    }

    /// Get the fill log in arrival order.
    #[must_use]
    pub fn fills(&self) -> &[Fill] {
        &self.fills
    }

    /// Get the fill ledger (fill id -> quantity).
    #[must_use]
    pub const fn filled_quantity_map(&self) -> &BTreeMap<ExecId, Quantity> {
        &self.filled_quantity_map
    }

    /// Get the child orders keyed by order id.
    #[must_use]
    pub const fn child_orders(&self) -> &BTreeMap<OrderId, Self> {
        &self.child_orders
    }

    /// Look up a child order.
    #[must_use]
    pub fn child(&self, order_id: &OrderId) -> Option<&Self> {
        self.child_orders.get(order_id)
    }

    // ========================================================================
    // Derived values
    // ========================================================================

    /// Quantity filled directly against this node's ledger.
    #[must_use]
    pub fn own_filled_quantity(&self) -> Quantity {
        self.filled_quantity_map.values().sum()
    }

    /// Quantity filled against this node and all of its children.
    #[must_use]
    pub fn filled_quantity(&self) -> Quantity {
        self.own_filled_quantity()
            + self
                .child_orders
                .values()
                .map(Self::filled_quantity)
                .sum::<Quantity>()
    }

    /// Returns true once the expected quantity is known and met.
    #[must_use]
    pub fn is_fully_filled(&self) -> bool {
        self.expected_quantity.is_positive() && self.filled_quantity() >= self.expected_quantity
    }

    /// Fill logs of all children, concatenated in child id order.
    #[must_use]
    pub fn child_fills(&self) -> Vec<&Fill> {
        self.child_orders
            .values()
            .flat_map(|child| child.fills.iter())
            .collect()
    }

    /// This node's fill log followed by its children's.
    #[must_use]
    pub fn all_fills(&self) -> Vec<&Fill> {
        self.fills.iter().chain(self.child_fills()).collect()
    }

    /// Returns true if the fill log holds more entries than the ledger,
    /// i.e. some fill id was delivered more than once.
    #[must_use]
    pub fn has_replayed_fills(&self) -> bool {
        self.fills.len() != self.filled_quantity_map.len()
    }

    // ========================================================================
    // Mutations (driven by the lifecycle services)
    // ========================================================================

    pub(crate) fn set_order_id_if_absent(&mut self, order_id: &OrderId) {
        if self.order_id.is_none() {
            self.order_id = Some(order_id.clone());
        }
    }

    /// Get the child node, creating it under `parent_order_id` if absent.
    ///
    /// An existing child keeps the parent it was created with.
    pub(crate) fn child_entry(
        &mut self,
        order_id: &OrderId,
        parent_order_id: &OrderId,
    ) -> &mut Self {
        self.child_orders
            .entry(order_id.clone())
            .or_insert_with(|| Self::child_of(order_id.clone(), parent_order_id.clone()))
    }

    /// Overwrite the definition fields. Fills and the ledger are untouched.
    pub(crate) fn apply_definition(&mut self, definition: OrderDefinition) {
        if let Some(order_id) = definition.order_id {
            self.order_id = Some(order_id);
        }
        self.msg_id = definition.msg_id;
        self.expected_quantity = definition.expected_quantity;
        self.trade_date = definition.trade_date;
        self.transaction_time = definition.transaction_time;
        self.currency = definition.currency;
    }

    /// Record a fill in the ledger and the fill log.
    pub(crate) fn record_fill(&mut self, fill: Fill, policy: FillLogPolicy) {
        self.filled_quantity_map
            .insert(fill.fill_id.clone(), fill.quantity);

        let replayed = match policy {
            FillLogPolicy::AppendAll => None,
            FillLogPolicy::DeduplicateById => self
                .fills
                .iter_mut()
                .find(|existing| existing.fill_id == fill.fill_id),
        };
        match replayed {
            Some(existing) => *existing = fill,
            None => self.fills.push(fill),
        }
    }

    pub(crate) const fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
    }
}
