//! A single recorded execution against an order.

use serde::{Deserialize, Serialize};

use crate::domain::shared::{ExecId, Price, Quantity, Timestamp};

/// One execution against an order, identified by its fill id.
///
/// Immutable once recorded in a node's fill log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fill {
    /// Fill identifier (the execution report id).
    pub fill_id: ExecId,
    /// Venue transaction time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_time: Option<Timestamp>,
    /// Quantity executed.
    pub quantity: Quantity,
    /// Execution price.
    #[serde(default)]
    pub price: Price,
}

impl Fill {
    /// Create a new fill.
    #[must_use]
    pub fn new(
        fill_id: impl Into<ExecId>,
        transaction_time: Option<Timestamp>,
        quantity: Quantity,
        price: Price,
    ) -> Self {
        Self {
            fill_id: fill_id.into(),
            transaction_time,
            quantity,
            price,
        }
    }
}
