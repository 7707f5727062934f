//! Aggregation configuration.

use serde::{Deserialize, Serialize};

use crate::domain::order_lifecycle::FillLogPolicy;

/// Fold behaviour.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationConfig {
    /// How the fill log treats replayed fill ids.
    #[serde(default)]
    pub fill_log: FillLogPolicy,
}
