//! Hosting runtime for the fold.

mod partitioned;

pub use partitioned::{
    PartitionedProcessor, RuntimeError, RuntimeSummary, WorkerStats, partition_for,
};
