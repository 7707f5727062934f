//! Definition fields carried by an order definition report.

use chrono::NaiveDate;

use super::ExecutionReport;
use crate::domain::shared::{ExecId, OrderId, Quantity, Timestamp};

/// The subset of an order definition report that describes the order itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDefinition {
    /// Order id.
    pub order_id: Option<OrderId>,
    /// Id of the definition report.
    pub msg_id: Option<ExecId>,
    /// Total quantity the order expects to fill.
    pub expected_quantity: Quantity,
    /// Trade date.
    pub trade_date: Option<NaiveDate>,
    /// Venue transaction time of the definition.
    pub transaction_time: Option<Timestamp>,
    /// Order currency.
    pub currency: Option<String>,
}

impl From<&ExecutionReport> for OrderDefinition {
    fn from(report: &ExecutionReport) -> Self {
        Self {
            order_id: report.order_id.clone(),
            msg_id: report.exec_id.clone(),
            expected_quantity: report.order_quantity,
            trade_date: report.trade_date,
            transaction_time: report.txn_time,
            currency: report.currency.clone(),
        }
    }
}
