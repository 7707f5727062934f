//! Process Execution Report Use Case

use std::sync::Arc;

use crate::application::ports::{PublishError, StatePublisherPort};
use crate::domain::order_lifecycle::{
    ExecutionReport, OrderLifecycleAggregator, OrderState, OrderStateStore, StoreError,
    ValidationError,
};
use crate::domain::shared::OrderId;

/// Failure processing one execution report.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProcessingError {
    /// Report is malformed; the aggregate was not touched.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Report was delivered under a key other than its own root order id.
    #[error("Report for root {derived} delivered under key {key}")]
    PartitionMismatch {
        /// Delivery key.
        key: OrderId,
        /// Root order id derived from the report.
        derived: OrderId,
    },

    /// Loading or saving the aggregate failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The aggregate was saved but could not be published.
    #[error(transparent)]
    Publish(#[from] PublishError),
}

impl ProcessingError {
    /// Returns true if the report itself was at fault (as opposed to the
    /// store or publisher).
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::PartitionMismatch { .. })
    }
}

/// Use case for folding one execution report into its root aggregate.
///
/// Validate, load (or start) the aggregate, fold, save, publish.
pub struct ProcessExecutionReportUseCase<S, P>
where
    S: OrderStateStore,
    P: StatePublisherPort,
{
    store: Arc<S>,
    publisher: Arc<P>,
    aggregator: OrderLifecycleAggregator,
}

impl<S, P> ProcessExecutionReportUseCase<S, P>
where
    S: OrderStateStore,
    P: StatePublisherPort,
{
    /// Create a new `ProcessExecutionReportUseCase`.
    pub const fn new(
        store: Arc<S>,
        publisher: Arc<P>,
        aggregator: OrderLifecycleAggregator,
    ) -> Self {
        Self {
            store,
            publisher,
            aggregator,
        }
    }

    /// Get the state store.
    #[must_use]
    pub const fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Fold `report` into the aggregate stored under `key`.
    ///
    /// Returns the updated aggregate.
    ///
    /// # Errors
    ///
    /// Returns error if the report is malformed, was delivered under the
    /// wrong key, or the store or publisher fails.
    pub async fn execute(
        &self,
        key: &OrderId,
        report: ExecutionReport,
    ) -> Result<OrderState, ProcessingError> {
        // 1. Reject malformed reports before they reach the fold
        report.validate()?;

        // 2. Child reports must arrive under their root's key
        let derived = report
            .partition_key()
            .ok_or(ValidationError::MissingOrderId)?;
        if derived != key {
            return Err(ProcessingError::PartitionMismatch {
                key: key.clone(),
                derived: derived.clone(),
            });
        }

        // 3. Load or start the aggregate
        let previous = self.store.get(key).await?.unwrap_or_default();

        // 4. Fold
        let state = self.aggregator.aggregate(key, &report, previous);

        // 5. Save
        self.store.put(key, &state).await?;

        tracing::debug!(
            order_id = %key,
            status = %state.status(),
            filled = %state.filled_quantity(),
            expected = %state.expected_quantity(),
            "Order state updated"
        );

        // 6. Publish
        self.publisher.publish(key, &state).await?;

        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::NoOpStatePublisher;
    use crate::domain::order_lifecycle::OrderStatus;
    use crate::domain::shared::{Price, Quantity};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::RwLock;

    #[derive(Default)]
    struct MapStore {
        states: RwLock<HashMap<OrderId, OrderState>>,
    }

    #[async_trait]
    impl OrderStateStore for MapStore {
        async fn get(&self, key: &OrderId) -> Result<Option<OrderState>, StoreError> {
            Ok(self.states.read().unwrap().get(key).cloned())
        }

        async fn put(&self, key: &OrderId, state: &OrderState) -> Result<(), StoreError> {
            self.states
                .write()
                .unwrap()
                .insert(key.clone(), state.clone());
            Ok(())
        }

        async fn keys(&self) -> Result<Vec<OrderId>, StoreError> {
            let mut keys: Vec<_> = self.states.read().unwrap().keys().cloned().collect();
            keys.sort();
            Ok(keys)
        }

        async fn len(&self) -> Result<usize, StoreError> {
            Ok(self.states.read().unwrap().len())
        }
    }

    struct FailingPublisher;

    #[async_trait]
    impl StatePublisherPort for FailingPublisher {
        async fn publish(&self, _key: &OrderId, _state: &OrderState) -> Result<(), PublishError> {
            Err(PublishError::PublishFailed {
                message: "downstream closed".to_string(),
            })
        }
    }

    fn use_case() -> ProcessExecutionReportUseCase<MapStore, NoOpStatePublisher> {
        ProcessExecutionReportUseCase::new(
            Arc::new(MapStore::default()),
            Arc::new(NoOpStatePublisher),
            OrderLifecycleAggregator::default(),
        )
    }

    #[tokio::test]
    async fn folds_and_saves() {
        let use_case = use_case();
        let key = OrderId::new("ord-1");

        use_case
            .execute(
                &key,
                ExecutionReport::order_definition("ord-1", "d", Quantity::from_i64(10)),
            )
            .await
            .unwrap();
        let state = use_case
            .execute(
                &key,
                ExecutionReport::fill("ord-1", "f1", Quantity::from_i64(10), Price::ZERO),
            )
            .await
            .unwrap();

        assert_eq!(state.status(), OrderStatus::Filled);
        let stored = use_case.store().get(&key).await.unwrap().unwrap();
        assert_eq!(stored, state);
    }

    #[tokio::test]
    async fn malformed_report_leaves_store_untouched() {
        let use_case = use_case();
        let key = OrderId::new("ord-1");

        let err = use_case
            .execute(
                &key,
                ExecutionReport::fill("ord-1", "f1", Quantity::ZERO, Price::ZERO),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ProcessingError::Validation(_)));
        assert!(err.is_rejection());
        assert_eq!(use_case.store().len().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn child_report_under_wrong_key_is_rejected() {
        let use_case = use_case();

        let err = use_case
            .execute(
                &OrderId::new("c1"),
                ExecutionReport::fill("c1", "f1", Quantity::from_i64(1), Price::ZERO)
                    .with_parent("root"),
            )
            .await
            .unwrap_err();

        match err {
            ProcessingError::PartitionMismatch { key, derived } => {
                assert_eq!(key, OrderId::new("c1"));
                assert_eq!(derived, OrderId::new("root"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(use_case.store().is_empty().await.unwrap());
    }

    #[tokio::test]
    async fn publish_failure_is_reported_after_save() {
        let use_case = ProcessExecutionReportUseCase::new(
            Arc::new(MapStore::default()),
            Arc::new(FailingPublisher),
            OrderLifecycleAggregator::default(),
        );
        let key = OrderId::new("ord-1");

        let err = use_case
            .execute(
                &key,
                ExecutionReport::order_definition("ord-1", "d", Quantity::from_i64(10)),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ProcessingError::Publish(_)));
        assert!(!err.is_rejection());
        assert_eq!(use_case.store().len().await.unwrap(), 1);
    }
}
