//! Event Classifier
//!
//! Labels an execution report by the effect it has on order state.

use crate::domain::order_lifecycle::value_objects::{ExecType, ExecutionReport};

/// Effect an execution report has on its target node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Defines (or redefines) the order.
    OrderDefinition,
    /// Records one execution.
    Fill,
    /// No financial effect; only the activity timestamp moves.
    Unrecognized,
}

/// Stateless classifier for execution reports.
pub struct EventClassifier;

impl EventClassifier {
    /// Classify a report by its type discriminator.
    #[must_use]
    pub const fn classify(report: &ExecutionReport) -> EventKind {
        match report.exec_type {
            Some(ExecType::Order) => EventKind::OrderDefinition,
            Some(ExecType::Fill) => EventKind::Fill,
            Some(ExecType::Other(_)) | None => EventKind::Unrecognized,
        }
    }

    /// Returns true if the report targets a child of the root order.
    #[must_use]
    pub const fn is_child_target(report: &ExecutionReport) -> bool {
        report.is_child()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::{Price, Quantity};
    use test_case::test_case;

    #[test_case(Some(ExecType::Order), EventKind::OrderDefinition ; "order definition")]
    #[test_case(Some(ExecType::Fill), EventKind::Fill ; "fill")]
    #[test_case(Some(ExecType::Other('8')), EventKind::Unrecognized ; "rejected")]
    #[test_case(None, EventKind::Unrecognized ; "missing type")]
    fn classify_by_type(exec_type: Option<ExecType>, expected: EventKind) {
        let report = ExecutionReport {
            exec_type,
            ..ExecutionReport::default()
        };
        assert_eq!(EventClassifier::classify(&report), expected);
    }

    #[test]
    fn child_target_follows_parent_id() {
        let root = ExecutionReport::fill("ord-1", "f1", Quantity::from_i64(1), Price::ZERO);
        assert!(!EventClassifier::is_child_target(&root));
        assert!(EventClassifier::is_child_target(&root.with_parent("root")));
    }
}
