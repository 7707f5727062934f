//! Inbound execution report.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ExecType;
use crate::domain::order_lifecycle::errors::ValidationError;
use crate::domain::shared::{ExecId, OrderId, Price, Quantity, Timestamp};

/// Execution report for one order (FIX `ExecutionReport` subset).
///
/// Every field is optional on the wire; [`ExecutionReport::validate`] decides
/// whether a report is fit to be folded. Unknown fields are ignored and
/// absent ones are omitted when re-encoded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExecutionReport {
    /// The order this report is about.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<OrderId>,
    /// Root order id when this report concerns a child order.
    #[serde(alias = "parentOrderId", skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<OrderId>,
    /// Report id; message id for definitions, fill id for fills.
    #[serde(alias = "eventId", skip_serializing_if = "Option::is_none")]
    pub exec_id: Option<ExecId>,
    /// Report discriminator.
    #[serde(
        rename = "type",
        deserialize_with = "super::exec_type::deserialize_optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub exec_type: Option<ExecType>,
    /// Order currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Trade date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trade_date: Option<NaiveDate>,
    /// Venue transaction time.
    #[serde(alias = "transactionTime", skip_serializing_if = "Option::is_none")]
    pub txn_time: Option<Timestamp>,
    /// Total order quantity (order definitions only).
    #[serde(skip_serializing_if = "Quantity::is_zero")]
    pub order_quantity: Quantity,
    /// Quantity executed in this fill (fills only).
    #[serde(alias = "fillQuantity", skip_serializing_if = "Quantity::is_zero")]
    pub last_qty: Quantity,
    /// Price of this fill (fills only).
    #[serde(alias = "fillPrice", skip_serializing_if = "Price::is_zero")]
    pub last_px: Price,
}

impl ExecutionReport {
    /// Build an order definition report.
    #[must_use]
    pub fn order_definition(
        order_id: impl Into<OrderId>,
        exec_id: impl Into<ExecId>,
        order_quantity: Quantity,
    ) -> Self {
        Self {
            order_id: Some(order_id.into()),
            exec_id: Some(exec_id.into()),
            exec_type: Some(ExecType::Order),
            order_quantity,
            ..Self::default()
        }
    }

    /// Build a fill report.
    #[must_use]
    pub fn fill(
        order_id: impl Into<OrderId>,
        exec_id: impl Into<ExecId>,
        last_qty: Quantity,
        last_px: Price,
    ) -> Self {
        Self {
            order_id: Some(order_id.into()),
            exec_id: Some(exec_id.into()),
            exec_type: Some(ExecType::Fill),
            last_qty,
            last_px,
            ..Self::default()
        }
    }

    /// Mark this report as concerning a child of `parent_id`.
    #[must_use]
    pub fn with_parent(mut self, parent_id: impl Into<OrderId>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    /// Set the currency.
    #[must_use]
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Set the trade date.
    #[must_use]
    pub const fn with_trade_date(mut self, trade_date: NaiveDate) -> Self {
        self.trade_date = Some(trade_date);
        self
    }

    /// Set the transaction time.
    #[must_use]
    pub const fn with_txn_time(mut self, txn_time: Timestamp) -> Self {
        self.txn_time = Some(txn_time);
        self
    }

    /// Returns true if this report targets a child order.
    #[must_use]
    pub const fn is_child(&self) -> bool {
        self.parent_id.is_some()
    }

    /// The root order id this report must be grouped under.
    ///
    /// Children are grouped under their parent; everything else under its
    /// own id.
    #[must_use]
    pub fn partition_key(&self) -> Option<&OrderId> {
        self.parent_id.as_ref().or(self.order_id.as_ref())
    }

    /// Check that the report can be folded into an aggregate.
    ///
    /// Rejects reports without an order id, quantities that are not whole
    /// `i64`-sized numbers, fills without an exec id, and fills with a
    /// non-positive quantity. Reports of unknown type only need an order id.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let order_id = self
            .order_id
            .as_ref()
            .ok_or(ValidationError::MissingOrderId)?;
        if order_id.is_blank() {
            return Err(ValidationError::MissingOrderId);
        }

        if matches!(&self.parent_id, Some(parent) if parent.is_blank()) {
            return Err(ValidationError::BlankParentId {
                order_id: order_id.clone(),
            });
        }

        for (field, quantity) in [
            ("orderQuantity", self.order_quantity),
            ("lastQty", self.last_qty),
        ] {
            if !quantity.is_wire_integer() {
                return Err(ValidationError::InvalidQuantity {
                    order_id: order_id.clone(),
                    field,
                    quantity,
                });
            }
        }

        if self.exec_type == Some(ExecType::Fill) {
            if self.exec_id.as_ref().is_none_or(ExecId::is_blank) {
                return Err(ValidationError::MissingFillId {
                    order_id: order_id.clone(),
                });
            }
            if !self.last_qty.is_positive() {
                return Err(ValidationError::NonPositiveFillQuantity {
                    order_id: order_id.clone(),
                    quantity: self.last_qty,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use test_case::test_case;

    #[test]
    fn decodes_wire_field_names() {
        let json = r#"{
            "orderId": "child-1",
            "parentId": "parent-1",
            "execId": "exec-7",
            "type": "F",
            "currency": "USD",
            "tradeDate": "2026-01-19",
            "txnTime": "2026-01-19T10:15:00",
            "lastQty": 50,
            "lastPx": "101.25",
            "venue": "XNAS"
        }"#;
        let report: ExecutionReport = serde_json::from_str(json).unwrap();

        assert_eq!(report.order_id, Some(OrderId::new("child-1")));
        assert_eq!(report.parent_id, Some(OrderId::new("parent-1")));
        assert_eq!(report.exec_type, Some(ExecType::Fill));
        assert_eq!(report.last_qty, Quantity::from_i64(50));
        assert_eq!(report.last_px, Price::new(dec!(101.25)));
        assert_eq!(
            report.trade_date,
            NaiveDate::from_ymd_opt(2026, 1, 19)
        );
        assert!(report.is_child());
    }

    #[test]
    fn decodes_descriptive_aliases() {
        let json = r#"{
            "orderId": "ord-1",
            "parentOrderId": "root-1",
            "eventId": "evt-1",
            "type": "F",
            "transactionTime": "2026-01-19T10:15:00Z",
            "fillQuantity": 5,
            "fillPrice": 10
        }"#;
        let report: ExecutionReport = serde_json::from_str(json).unwrap();

        assert_eq!(report.parent_id, Some(OrderId::new("root-1")));
        assert_eq!(report.exec_id, Some(ExecId::new("evt-1")));
        assert_eq!(report.last_qty, Quantity::from_i64(5));
        assert!(report.txn_time.is_some());
    }

    #[test]
    fn empty_fields_are_omitted_on_encode() {
        let report = ExecutionReport::order_definition("ord-1", "exec-1", Quantity::from_i64(100));
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["type"], "O");
        assert!(json.get("parentId").is_none());
        assert!(json.get("lastQty").is_none());
        assert!(json.get("lastPx").is_none());
    }

    #[test]
    fn partition_key_prefers_parent() {
        let root = ExecutionReport::order_definition("root", "e1", Quantity::from_i64(10));
        assert_eq!(root.partition_key(), Some(&OrderId::new("root")));

        let child = root.clone().with_parent("grand");
        assert_eq!(child.partition_key(), Some(&OrderId::new("grand")));

        assert_eq!(ExecutionReport::default().partition_key(), None);
    }

    #[test]
    fn validate_accepts_well_formed_reports() {
        let def = ExecutionReport::order_definition("ord-1", "e1", Quantity::from_i64(100));
        let fill = ExecutionReport::fill("ord-1", "e2", Quantity::from_i64(60), Price::ZERO);
        assert!(def.validate().is_ok());
        assert!(fill.validate().is_ok());
    }

    #[test]
    fn validate_rejects_missing_order_id() {
        let mut report = ExecutionReport::fill("x", "e1", Quantity::from_i64(1), Price::ZERO);
        report.order_id = None;
        assert_eq!(report.validate(), Err(ValidationError::MissingOrderId));

        report.order_id = Some(OrderId::new(" "));
        assert_eq!(report.validate(), Err(ValidationError::MissingOrderId));
    }

    #[test]
    fn validate_rejects_non_positive_fill() {
        let report = ExecutionReport::fill("ord-1", "e1", Quantity::ZERO, Price::ZERO);
        assert!(matches!(
            report.validate(),
            Err(ValidationError::NonPositiveFillQuantity { .. })
        ));
    }

    #[test]
    fn validate_rejects_fill_without_exec_id() {
        let mut report = ExecutionReport::fill("ord-1", "e1", Quantity::from_i64(1), Price::ZERO);
        report.exec_id = None;
        assert!(matches!(
            report.validate(),
            Err(ValidationError::MissingFillId { .. })
        ));
    }

    #[test]
    fn validate_rejects_blank_parent() {
        let report = ExecutionReport::order_definition("ord-1", "e1", Quantity::from_i64(1))
            .with_parent("");
        assert!(matches!(
            report.validate(),
            Err(ValidationError::BlankParentId { .. })
        ));
    }

    #[test]
    fn validate_tolerates_unknown_type() {
        let report = ExecutionReport {
            order_id: Some(OrderId::new("ord-1")),
            exec_type: Some(ExecType::Other('8')),
            ..ExecutionReport::default()
        };
        assert!(report.validate().is_ok());
    }

    #[test_case(r#"{"orderId": "ord-1", "type": "F", "execId": "f1", "lastQty": "2.5"}"#, "lastQty" ; "fractional fill")]
    #[test_case(r#"{"orderId": "ord-1", "type": "F", "execId": "f1", "lastQty": "50000000000000000000000000000"}"#, "lastQty" ; "fill beyond i64")]
    #[test_case(r#"{"orderId": "ord-1", "type": "O", "execId": "d1", "orderQuantity": "90000000000000000000000000"}"#, "orderQuantity" ; "definition beyond i64")]
    #[test_case(r#"{"orderId": "ord-1", "type": "O", "execId": "d1", "orderQuantity": "100.5"}"#, "orderQuantity" ; "fractional definition")]
    fn validate_rejects_quantities_outside_wire_integers(json: &str, expected_field: &str) {
        let report: ExecutionReport = serde_json::from_str(json).unwrap();
        match report.validate() {
            Err(ValidationError::InvalidQuantity { field, .. }) => assert_eq!(field, expected_field),
            other => panic!("expected InvalidQuantity, got {other:?}"),
        }
    }

    #[test]
    fn validate_accepts_largest_wire_quantity() {
        let report = ExecutionReport::fill("ord-1", "f1", Quantity::from_i64(i64::MAX), Price::ZERO);
        assert!(report.validate().is_ok());
    }

    #[test_case(r#""""# ; "empty")]
    #[test_case(r#""FILL""# ; "multi character")]
    #[test_case("null" ; "null")]
    fn type_without_a_single_code_decodes_as_none(wire_type: &str) {
        let json = format!(r#"{{"orderId": "ord-1", "type": {wire_type}, "lastQty": 5}}"#);
        let report: ExecutionReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report.exec_type, None);
        assert!(report.validate().is_ok());
    }

    #[test]
    fn numeric_type_is_read_as_its_code() {
        let report: ExecutionReport =
            serde_json::from_str(r#"{"orderId": "ord-1", "type": 8}"#).unwrap();
        assert_eq!(report.exec_type, Some(ExecType::Other('8')));
    }
}
