//! Downstream publisher configuration.

use serde::{Deserialize, Serialize};

/// Sink for updated aggregates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PublisherKind {
    /// Tracing event per update.
    #[default]
    Log,
    /// JSON line per update on stdout.
    Stdout,
    /// Discard updates.
    None,
}

/// Publisher configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublisherConfig {
    /// Sink kind.
    #[serde(default)]
    pub kind: PublisherKind,
    /// Label attached to every published update.
    #[serde(default = "default_label")]
    pub label: String,
}

impl Default for PublisherConfig {
    fn default() -> Self {
        Self {
            kind: PublisherKind::default(),
            label: default_label(),
        }
    }
}

fn default_label() -> String {
    "LIFECYCLES".to_string()
}
