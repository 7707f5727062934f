//! Partitioned report processor.
//!
//! Fans inbound records out to a fixed pool of worker tasks by a stable hash
//! of the partition key. Each key always lands on the same worker, and each
//! worker folds its records one at a time, so reports for a given root order
//! are never processed concurrently.
//!
//! ```text
//! submit ──hash(key)──> mpsc::Sender[i] ──> PartitionWorker[i] ──> use case
//! ```

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::application::ports::StatePublisherPort;
use crate::application::use_cases::ProcessExecutionReportUseCase;
use crate::config::RuntimeConfig;
use crate::domain::order_lifecycle::OrderStateStore;
use crate::domain::shared::OrderId;
use crate::infrastructure::codec::InboundRecord;

/// Runtime failure.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RuntimeError {
    /// The worker owning the partition has stopped.
    #[error("Partition {partition} is no longer accepting records")]
    ChannelClosed {
        /// Partition index.
        partition: usize,
    },

    /// A worker task panicked or was cancelled.
    #[error("Partition worker {partition} failed: {message}")]
    WorkerPanicked {
        /// Partition index.
        partition: usize,
        /// Join error message.
        message: String,
    },
}

/// Counters for a single partition worker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkerStats {
    /// Partition index.
    pub partition: usize,
    /// Records folded and stored.
    pub processed: u64,
    /// Records rejected as malformed or mis-keyed.
    pub rejected: u64,
    /// Records that failed in the store or publisher.
    pub failed: u64,
}

impl WorkerStats {
    /// Total records seen by the worker.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.processed + self.rejected + self.failed
    }
}

/// Counters for the whole pool after shutdown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeSummary {
    /// Per-partition counters, in partition order.
    pub workers: Vec<WorkerStats>,
}

impl RuntimeSummary {
    /// Records folded and stored across all partitions.
    #[must_use]
    pub fn processed(&self) -> u64 {
        self.workers.iter().map(|w| w.processed).sum()
    }

    /// Records rejected across all partitions.
    #[must_use]
    pub fn rejected(&self) -> u64 {
        self.workers.iter().map(|w| w.rejected).sum()
    }

    /// Records that failed in the store or publisher across all partitions.
    #[must_use]
    pub fn failed(&self) -> u64 {
        self.workers.iter().map(|w| w.failed).sum()
    }
}

/// Map a key to a partition in `0..partitions`.
///
/// Stable for the lifetime of the process.
#[must_use]
#[allow(clippy::cast_possible_truncation)] // result < partitions, which fits usize
pub fn partition_for(key: &OrderId, partitions: usize) -> usize {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    (hasher.finish() % partitions.max(1) as u64) as usize
}

// ============================================================================
// Partition Worker
// ============================================================================

struct PartitionWorker<S, P>
where
    S: OrderStateStore,
    P: StatePublisherPort,
{
    partition: usize,
    rx: mpsc::Receiver<InboundRecord>,
    use_case: Arc<ProcessExecutionReportUseCase<S, P>>,
}

impl<S, P> PartitionWorker<S, P>
where
    S: OrderStateStore,
    P: StatePublisherPort,
{
    /// Fold records until every sender is dropped.
    async fn run(mut self) -> WorkerStats {
        debug!(partition = self.partition, "Partition worker started");
        let mut stats = WorkerStats {
            partition: self.partition,
            ..WorkerStats::default()
        };

        while let Some(InboundRecord { key, report }) = self.rx.recv().await {
            match self.use_case.execute(&key, report).await {
                Ok(_) => stats.processed += 1,
                Err(e) if e.is_rejection() => {
                    stats.rejected += 1;
                    warn!(partition = self.partition, order_id = %key, error = %e, "Execution report rejected");
                }
                Err(e) => {
                    stats.failed += 1;
                    warn!(partition = self.partition, order_id = %key, error = %e, "Execution report processing failed");
                }
            }
        }

        debug!(
            partition = self.partition,
            processed = stats.processed,
            rejected = stats.rejected,
            failed = stats.failed,
            "Partition worker stopped"
        );
        stats
    }
}

// ============================================================================
// Partitioned Processor
// ============================================================================

/// Pool of partition workers fed by key.
pub struct PartitionedProcessor {
    senders: Vec<mpsc::Sender<InboundRecord>>,
    handles: Vec<JoinHandle<WorkerStats>>,
}

impl PartitionedProcessor {
    /// Spawn `config.partitions` workers sharing `use_case`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<S, P>(
        use_case: Arc<ProcessExecutionReportUseCase<S, P>>,
        config: &RuntimeConfig,
    ) -> Self
    where
        S: OrderStateStore + 'static,
        P: StatePublisherPort + 'static,
    {
        let partitions = config.partitions.max(1);
        let capacity = config.channel_capacity.max(1);

        let (senders, handles) = (0..partitions)
            .map(|partition| {
                let (tx, rx) = mpsc::channel(capacity);
                let worker = PartitionWorker {
                    partition,
                    rx,
                    use_case: Arc::clone(&use_case),
                };
                (tx, tokio::spawn(worker.run()))
            })
            .unzip();

        info!(partitions, capacity, "Partitioned processor started");
        Self { senders, handles }
    }

    /// Number of partitions.
    #[must_use]
    pub fn partitions(&self) -> usize {
        self.senders.len()
    }

    /// Queue a record on the partition owning its key.
    ///
    /// Waits while that partition's queue is full.
    ///
    /// # Errors
    ///
    /// Returns error if the owning worker has stopped.
    pub async fn submit(&self, record: InboundRecord) -> Result<(), RuntimeError> {
        let partition = partition_for(&record.key, self.senders.len());
        self.senders[partition]
            .send(record)
            .await
            .map_err(|_| RuntimeError::ChannelClosed { partition })
    }

    /// Stop accepting records, let every worker drain its queue, and
    /// collect the counters.
    ///
    /// # Errors
    ///
    /// Returns error if a worker panicked.
    pub async fn shutdown(self) -> Result<RuntimeSummary, RuntimeError> {
        drop(self.senders);

        let mut summary = RuntimeSummary::default();
        for (partition, handle) in self.handles.into_iter().enumerate() {
            let stats = handle.await.map_err(|e| RuntimeError::WorkerPanicked {
                partition,
                message: e.to_string(),
            })?;
            summary.workers.push(stats);
        }

        info!(
            processed = summary.processed(),
            rejected = summary.rejected(),
            failed = summary.failed(),
            "Partitioned processor stopped"
        );
        Ok(summary)
    }
}
