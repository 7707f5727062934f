//! Completion Evaluator
//!
//! Derives a node's status from its expected and filled quantities.

use crate::domain::order_lifecycle::aggregate::OrderNode;
use crate::domain::order_lifecycle::value_objects::OrderStatus;
use crate::domain::shared::DomainError;

/// Recomputes node status after a mutation.
pub struct CompletionEvaluator;

impl CompletionEvaluator {
    /// Validate a status transition.
    ///
    /// # Errors
    ///
    /// Returns error if the transition would un-fill an order.
    pub fn validate_transition(from: OrderStatus, to: OrderStatus) -> Result<(), DomainError> {
        if from.can_transition_to(to) {
            Ok(())
        } else {
            Err(DomainError::InvalidStateTransition {
                entity: "OrderNode".to_string(),
                from: from.to_string(),
                to: to.to_string(),
            })
        }
    }

    /// Status the node's quantities call for, ignoring its current status.
    #[must_use]
    pub fn target_status(node: &OrderNode) -> OrderStatus {
        if node.is_fully_filled() {
            OrderStatus::Filled
        } else {
            OrderStatus::NotFilled
        }
    }

    /// Move the node to FILLED if it is fully filled.
    ///
    /// Never downgrades. Returns true if the status changed.
    pub fn recompute(node: &mut OrderNode) -> bool {
        let from = node.status();
        let to = Self::target_status(node);
        if from == to {
            return false;
        }
        if let Err(e) = Self::validate_transition(from, to) {
            tracing::trace!(error = %e, "Status kept");
            return false;
        }
        node.set_status(to);
        true
    }
}
