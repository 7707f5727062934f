//! JSON codec for inbound records and outbound aggregates.
//!
//! Inbound records are either keyed (`{"key": "...", "report": {...}}`) or a
//! bare execution report, in which case the key is derived from the report.

use serde::Deserialize;

use crate::domain::order_lifecycle::{ExecutionReport, OrderState};
use crate::domain::shared::OrderId;

/// Codec failure.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CodecError {
    /// Input is not valid JSON for the expected shape.
    #[error("Malformed JSON: {message}")]
    Malformed { message: String },

    /// Bare report without `parentId` or `orderId` to key it by.
    #[error("Record has no key and no order id to derive one from")]
    MissingPartitionKey,

    /// Output could not be encoded.
    #[error("Encoding failed: {message}")]
    Encode { message: String },
}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed {
            message: err.to_string(),
        }
    }
}

/// An execution report together with the key it is grouped under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundRecord {
    /// Root order id the report is delivered under.
    pub key: OrderId,
    /// The report.
    pub report: ExecutionReport,
}

impl InboundRecord {
    /// Key a report by its own root order id.
    ///
    /// Returns `None` if the report has neither a parent id nor an order id.
    #[must_use]
    pub fn keyed_by_report(report: ExecutionReport) -> Option<Self> {
        let key = report.partition_key()?.clone();
        Some(Self { key, report })
    }
}

#[derive(Deserialize)]
struct KeyedRecord {
    key: OrderId,
    report: ExecutionReport,
}

/// Decode a single execution report.
///
/// # Errors
///
/// Returns error if the input is not a JSON object of report fields.
pub fn decode_report(input: &str) -> Result<ExecutionReport, CodecError> {
    Ok(serde_json::from_str(input)?)
}

/// Decode one inbound record, keyed or bare.
///
/// # Errors
///
/// Returns error if the input is malformed or a bare report carries no id
/// to derive the key from.
pub fn decode_record(input: &str) -> Result<InboundRecord, CodecError> {
    let value: serde_json::Value = serde_json::from_str(input)?;

    // A `report` member marks the keyed form; its errors are reported as is.
    if value.get("report").is_some() {
        let KeyedRecord { key, report } = serde_json::from_value(value)?;
        return Ok(InboundRecord { key, report });
    }

    let report: ExecutionReport = serde_json::from_value(value)?;
    InboundRecord::keyed_by_report(report).ok_or(CodecError::MissingPartitionKey)
}

/// Encode an aggregate as a single line of JSON.
///
/// # Errors
///
/// Returns error if serialization fails.
pub fn encode_state(state: &OrderState) -> Result<String, CodecError> {
    serde_json::to_string(state).map_err(|e| CodecError::Encode {
        message: e.to_string(),
    })
}

/// Decode an aggregate previously produced by [`encode_state`].
///
/// # Errors
///
/// Returns error if the input is malformed.
pub fn decode_state(input: &str) -> Result<OrderState, CodecError> {
    Ok(serde_json::from_str(input)?)
}
