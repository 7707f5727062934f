//! Partitioned runtime configuration.

use serde::{Deserialize, Serialize};

/// Worker pool sizing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Number of partition workers. Each key is owned by exactly one.
    #[serde(default = "default_partitions")]
    pub partitions: usize,
    /// Bounded queue depth per worker.
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            partitions: default_partitions(),
            channel_capacity: default_channel_capacity(),
        }
    }
}

pub(crate) const fn default_partitions() -> usize {
    4
}

pub(crate) const fn default_channel_capacity() -> usize {
    1024
}
