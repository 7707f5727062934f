//! Order lifecycle errors.
//!
//! The fold itself has no failure path; these errors belong to the edges
//! around it (report validation and state storage).

use thiserror::Error;

use crate::domain::shared::{OrderId, Quantity};

/// A report that must not reach the aggregator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Report has no usable order id.
    #[error("Execution report has no order id")]
    MissingOrderId,

    /// Parent id present but blank.
    #[error("Execution report for {order_id} has a blank parent id")]
    BlankParentId {
        /// Order id of the report.
        order_id: OrderId,
    },

    /// Fill without an exec id cannot be keyed in the ledger.
    #[error("Fill for {order_id} has no exec id")]
    MissingFillId {
        /// Order id of the report.
        order_id: OrderId,
    },

    /// Fill quantity must be strictly positive.
    #[error("Fill for {order_id} has non-positive quantity {quantity}")]
    NonPositiveFillQuantity {
        /// Order id of the report.
        order_id: OrderId,
        /// Offending quantity.
        quantity: Quantity,
    },

    /// Wire quantities are whole numbers within `i64` range.
    #[error("Report for {order_id} has non-integral or out of range {field} {quantity}")]
    InvalidQuantity {
        /// Order id of the report.
        order_id: OrderId,
        /// Wire field name.
        field: &'static str,
        /// Offending quantity.
        quantity: Quantity,
    },
}

/// Failure reading or writing aggregate state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The backing store is unusable (e.g. a poisoned lock).
    #[error("State store unavailable: {message}")]
    Unavailable {
        /// Error message.
        message: String,
    },

    /// Stored bytes could not be decoded.
    #[error("Corrupt state for {key}: {message}")]
    Corrupt {
        /// Partition key.
        key: OrderId,
        /// Error message.
        message: String,
    },
}
