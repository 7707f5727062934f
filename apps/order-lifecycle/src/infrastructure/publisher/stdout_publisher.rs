//! Writes every updated aggregate to an output stream as JSON lines.

use async_trait::async_trait;
use serde::Serialize;
use tokio::io::{AsyncWrite, AsyncWriteExt, Stdout};
use tokio::sync::Mutex;

use crate::application::ports::{PublishError, StatePublisherPort};
use crate::domain::order_lifecycle::OrderState;
use crate::domain::shared::OrderId;

#[derive(Serialize)]
struct OutputLine<'a> {
    label: &'a str,
    key: &'a OrderId,
    state: &'a OrderState,
}

/// Emits `{"label": .., "key": .., "state": {..}}` per update.
///
/// Writes are serialized through a mutex so lines from concurrent workers
/// never interleave.
#[derive(Debug)]
pub struct JsonLinesStatePublisher<W> {
    label: String,
    writer: Mutex<W>,
}

/// JSON lines publisher bound to the process stdout.
pub type StdoutStatePublisher = JsonLinesStatePublisher<Stdout>;

impl StdoutStatePublisher {
    /// Create a publisher writing to stdout.
    #[must_use]
    pub fn stdout(label: impl Into<String>) -> Self {
        Self::new(label, tokio::io::stdout())
    }
}

impl<W> JsonLinesStatePublisher<W>
where
    W: AsyncWrite + Unpin + Send,
{
    /// Create a publisher writing to `writer`.
    pub fn new(label: impl Into<String>, writer: W) -> Self {
        Self {
            label: label.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Consume the publisher and return the writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

#[async_trait]
impl<W> StatePublisherPort for JsonLinesStatePublisher<W>
where
    W: AsyncWrite + Unpin + Send,
{
    async fn publish(&self, key: &OrderId, state: &OrderState) -> Result<(), PublishError> {
        let mut line = serde_json::to_vec(&OutputLine {
            label: &self.label,
            key,
            state,
        })
        .map_err(|e| PublishError::SerializationError {
            message: e.to_string(),
        })?;
        line.push(b'\n');

        let mut writer = self.writer.lock().await;
        writer
            .write_all(&line)
            .await
            .map_err(|e| PublishError::PublishFailed {
                message: e.to_string(),
            })?;
        writer.flush().await.map_err(|e| PublishError::PublishFailed {
            message: e.to_string(),
        })
    }
}
