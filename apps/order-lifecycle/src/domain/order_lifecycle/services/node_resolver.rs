//! Node Resolver
//!
//! Picks the one node of an aggregate that a report mutates.

use super::EventClassifier;
use crate::domain::order_lifecycle::aggregate::{OrderNode, OrderState};
use crate::domain::order_lifecycle::value_objects::ExecutionReport;

/// Routes a report to the root or to a (lazily created) child node.
pub struct NodeResolver;

impl NodeResolver {
    /// Resolve the target node for `report`.
    ///
    /// Child reports land on `childOrders[report.orderId]`, created under the
    /// report's parent id on first sight. A child report without an order id
    /// cannot be keyed and falls back to the root.
    pub fn resolve<'a>(state: &'a mut OrderState, report: &ExecutionReport) -> &'a mut OrderNode {
        let root = state.root_mut();
        if !EventClassifier::is_child_target(report) {
            return root;
        }
        match (&report.order_id, &report.parent_id) {
            (Some(child_id), Some(parent_id)) => root.child_entry(child_id, parent_id),
            _ => root,
        }
    }
}
