//! Order Lifecycle Aggregator
//!
//! The fold function: previous aggregate + one execution report -> updated
//! aggregate.

use tracing::{debug, info};

use super::{CompletionEvaluator, EventClassifier, EventKind, NodeResolver, OrderStateUpdater};
use crate::domain::order_lifecycle::aggregate::OrderState;
use crate::domain::order_lifecycle::value_objects::{ExecutionReport, FillLogPolicy};
use crate::domain::shared::{OrderId, Timestamp};

/// Folds execution reports into an [`OrderState`].
///
/// Pure and synchronous. The caller is responsible for delivering reports
/// for a given key one at a time.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderLifecycleAggregator {
    updater: OrderStateUpdater,
}

impl OrderLifecycleAggregator {
    /// Create an aggregator with the given fill log policy.
    #[must_use]
    pub const fn new(fill_log: FillLogPolicy) -> Self {
        Self {
            updater: OrderStateUpdater::new(fill_log),
        }
    }

    /// Get the fill log policy.
    #[must_use]
    pub const fn fill_log(&self) -> FillLogPolicy {
        self.updater.fill_log()
    }

    /// Fold `report` into `state`, stamping the current wall-clock time.
    #[must_use]
    pub fn aggregate(&self, key: &OrderId, report: &ExecutionReport, state: OrderState) -> OrderState {
        self.aggregate_at(key, report, state, Timestamp::now())
    }

    /// Fold `report` into `state`, stamping `now` as the last action time.
    ///
    /// Exactly one node receives the report's effect. Completion is then
    /// re-evaluated on that node and on the root.
    #[must_use]
    pub fn aggregate_at(
        &self,
        key: &OrderId,
        report: &ExecutionReport,
        mut state: OrderState,
        now: Timestamp,
    ) -> OrderState {
        state.initialize_key(key);

        let kind = EventClassifier::classify(report);
        {
            let node = NodeResolver::resolve(&mut state, report);
            match kind {
                EventKind::OrderDefinition => self.updater.apply_definition(report, node),
                EventKind::Fill => {
                    if !self.updater.apply_fill(report, node) {
                        debug!(order_id = %key, "Fill without exec id ignored");
                    }
                }
                EventKind::Unrecognized => {
                    debug!(
                        order_id = %key,
                        exec_type = ?report.exec_type,
                        "Unrecognized execution report"
                    );
                }
            }
            if CompletionEvaluator::recompute(node) {
                info!(
                    order_id = ?node.order_id().map(OrderId::as_str),
                    parent_order_id = ?node.parent_order_id().map(OrderId::as_str),
                    "Order filled"
                );
            }
        }
        if CompletionEvaluator::recompute(state.root_mut()) {
            info!(order_id = %key, "Root order filled");
        }

        state.touch(now);
        state
    }
}
