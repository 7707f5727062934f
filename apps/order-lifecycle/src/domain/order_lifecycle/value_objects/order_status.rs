//! Fill status of an order node.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Completion status of an order node.
///
/// The only legal movement is `NotFilled -> Filled`; once an order is filled
/// it stays filled even if later events arrive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Expected quantity unknown or not yet reached.
    #[default]
    #[serde(alias = "NEW")]
    NotFilled,
    /// Filled quantity reached the expected quantity.
    Filled,
}

impl OrderStatus {
    /// Returns true if moving from `self` to `to` is allowed.
    ///
    /// Staying in the same status is always allowed.
    #[must_use]
    pub const fn can_transition_to(&self, to: Self) -> bool {
        matches!(
            (self, to),
            (Self::NotFilled, Self::NotFilled | Self::Filled) | (Self::Filled, Self::Filled)
        )
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFilled => write!(f, "NOT_FILLED"),
            Self::Filled => write!(f, "FILLED"),
        }
    }
}
