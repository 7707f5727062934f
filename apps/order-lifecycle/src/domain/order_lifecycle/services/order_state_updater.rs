//! Order State Updater
//!
//! Applies the financial effect of a classified report to a single node.

use crate::domain::order_lifecycle::aggregate::OrderNode;
use crate::domain::order_lifecycle::value_objects::{
    ExecutionReport, Fill, FillLogPolicy, OrderDefinition,
};

/// Applies order definitions and fills to order nodes.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderStateUpdater {
    fill_log: FillLogPolicy,
}

impl OrderStateUpdater {
    /// Create an updater with the given fill log policy.
    #[must_use]
    pub const fn new(fill_log: FillLogPolicy) -> Self {
        Self { fill_log }
    }

    /// Get the fill log policy.
    #[must_use]
    pub const fn fill_log(&self) -> FillLogPolicy {
        self.fill_log
    }

    /// Overwrite the node's definition fields from the report.
    ///
    /// Applying the same definition twice leaves the node unchanged.
    pub fn apply_definition(&self, report: &ExecutionReport, node: &mut OrderNode) {
        node.apply_definition(OrderDefinition::from(report));
    }

    /// Record the report as a fill on the node.
    ///
    /// Returns false without touching the node if the report carries no
    /// exec id to key the ledger with.
    pub fn apply_fill(&self, report: &ExecutionReport, node: &mut OrderNode) -> bool {
        let Some(fill_id) = report.exec_id.clone() else {
            return false;
        };
        let fill = Fill::new(fill_id, report.txn_time, report.last_qty, report.last_px);
        node.record_fill(fill, self.fill_log);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::{ExecId, OrderId, Price, Quantity};
    use rust_decimal_macros::dec;

    #[test]
    fn definition_sets_expected_quantity_and_msg_id() {
        let updater = OrderStateUpdater::default();
        let mut node = OrderNode::new();
        let report = ExecutionReport::order_definition("ord-1", "def-1", Quantity::from_i64(100))
            .with_currency("EUR");

        updater.apply_definition(&report, &mut node);
        let once = node.clone();
        updater.apply_definition(&report, &mut node);

        assert_eq!(node, once);
        assert_eq!(node.order_id(), Some(&OrderId::new("ord-1")));
        assert_eq!(node.msg_id(), Some(&ExecId::new("def-1")));
        assert_eq!(node.expected_quantity(), Quantity::from_i64(100));
        assert_eq!(node.currency(), Some("EUR"));
    }

    #[test]
    fn fill_records_quantity_and_price() {
        let updater = OrderStateUpdater::default();
        let mut node = OrderNode::new();
        let report =
            ExecutionReport::fill("ord-1", "f1", Quantity::from_i64(60), Price::new(dec!(9.5)));

        assert!(updater.apply_fill(&report, &mut node));
        assert_eq!(node.fills().len(), 1);
        assert_eq!(node.fills()[0].price, Price::new(dec!(9.5)));
        assert_eq!(node.filled_quantity(), Quantity::from_i64(60));
    }

    #[test]
    fn fill_without_exec_id_is_ignored() {
        let updater = OrderStateUpdater::default();
        let mut node = OrderNode::new();
        let mut report = ExecutionReport::fill("ord-1", "f1", Quantity::from_i64(60), Price::ZERO);
        report.exec_id = None;

        assert!(!updater.apply_fill(&report, &mut node));
        assert!(node.fills().is_empty());
    }

    #[test]
    fn dedup_policy_is_passed_to_the_node() {
        let updater = OrderStateUpdater::new(FillLogPolicy::DeduplicateById);
        let mut node = OrderNode::new();
        let report = ExecutionReport::fill("ord-1", "f1", Quantity::from_i64(60), Price::ZERO);

        updater.apply_fill(&report, &mut node);
        updater.apply_fill(&report, &mut node);
        assert_eq!(node.fills().len(), 1);
    }
}
