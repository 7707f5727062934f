//! Order Lifecycle Binary
//!
//! Reads execution reports as JSON lines on stdin, folds them into per-order
//! lifecycle state, and publishes every updated aggregate.
//!
//! # Usage
//!
//! ```bash
//! cat reports.jsonl | cargo run --bin order-lifecycle -- config.yaml
//! ```
//!
//! Each input line is either `{"key": "<root id>", "report": {...}}` or a
//! bare report, keyed by its `parentId` or else its `orderId`.
//!
//! # Environment Variables
//!
//! - `ORDER_LIFECYCLE_CONFIG`: Config file path when none is given as argument
//! - `RUST_LOG`: Log filter (default: `observability.logging.level`)

use std::sync::Arc;

use anyhow::Context;
use order_lifecycle::application::use_cases::ProcessExecutionReportUseCase;
use order_lifecycle::config::{Config, load_config};
use order_lifecycle::domain::order_lifecycle::{OrderLifecycleAggregator, OrderStateStore};
use order_lifecycle::infrastructure::codec::decode_record;
use order_lifecycle::infrastructure::persistence::InMemoryOrderStateStore;
use order_lifecycle::infrastructure::publisher::ConfiguredPublisher;
use order_lifecycle::infrastructure::runtime::PartitionedProcessor;
use order_lifecycle::telemetry::init_telemetry;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;

/// Environment variable naming the config file.
const CONFIG_ENV_VAR: &str = "ORDER_LIFECYCLE_CONFIG";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = parse_config()?;
    init_telemetry(&config.observability.logging)?;

    tracing::info!(
        partitions = config.runtime.partitions,
        channel_capacity = config.runtime.channel_capacity,
        fill_log = ?config.aggregation.fill_log,
        publisher = ?config.publisher.kind,
        "Starting order lifecycle engine"
    );

    let store = Arc::new(InMemoryOrderStateStore::new());
    let publisher = Arc::new(ConfiguredPublisher::from_config(&config.publisher));
    let use_case = Arc::new(ProcessExecutionReportUseCase::new(
        Arc::clone(&store),
        publisher,
        OrderLifecycleAggregator::new(config.aggregation.fill_log),
    ));
    let processor = PartitionedProcessor::spawn(use_case, &config.runtime);

    let undecodable = tokio::select! {
        result = feed_stdin(&processor) => result?,
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown signal received, draining");
            0
        }
    };

    let summary = processor.shutdown().await?;
    tracing::info!(
        processed = summary.processed(),
        rejected = summary.rejected(),
        failed = summary.failed(),
        undecodable,
        orders = store.len().await?,
        "Order lifecycle engine stopped"
    );
    Ok(())
}

/// Load the config file named on the command line or in the environment,
/// or fall back to defaults.
fn parse_config() -> anyhow::Result<Config> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(CONFIG_ENV_VAR).ok().filter(|p| !p.is_empty()));

    match path {
        Some(path) => load_config(&path).with_context(|| format!("loading config from {path}")),
        None => Ok(Config::default()),
    }
}

/// Decode stdin line by line and submit each record. Returns the number of
/// lines that could not be decoded.
async fn feed_stdin(processor: &PartitionedProcessor) -> anyhow::Result<u64> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut undecodable: u64 = 0;
    let mut line_no: u64 = 0;

    while let Some(line) = lines.next_line().await.context("reading stdin")? {
        line_no += 1;
        if line.trim().is_empty() {
            continue;
        }
        match decode_record(&line) {
            Ok(record) => processor.submit(record).await?,
            Err(e) => {
                undecodable += 1;
                tracing::warn!(line = line_no, error = %e, "Skipping undecodable record");
            }
        }
    }

    tracing::info!(lines = line_no, "Input exhausted");
    Ok(undecodable)
}
