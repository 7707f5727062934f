//! How a node's fill log treats replayed fill ids.

use serde::{Deserialize, Serialize};

/// Policy for the arrival-ordered fill log when a fill id is seen again.
///
/// The quantity ledger always overwrites by fill id, so totals are the same
/// under either policy; only the audit log differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FillLogPolicy {
    /// Append every fill report, replays included.
    #[default]
    AppendAll,
    /// Replace the earlier log entry with the same fill id in place.
    DeduplicateById,
}
