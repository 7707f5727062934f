//! Execution report discriminator.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of execution report, carried on the wire as a single character.
///
/// - `O` = order definition (carries the expected quantity)
/// - `F` = fill (one execution against the order)
///
/// Any other character is kept as-is so it can be logged and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "char", into = "char")]
pub enum ExecType {
    /// Order definition report.
    Order,
    /// Fill report.
    Fill,
    /// Any other report type.
    Other(char),
}

impl ExecType {
    /// Wire code for order definitions.
    pub const ORDER_CODE: char = 'O';
    /// Wire code for fills.
    pub const FILL_CODE: char = 'F';

    /// Map a wire code to an execution type.
    #[must_use]
    pub const fn from_code(code: char) -> Self {
        match code {
            Self::ORDER_CODE => Self::Order,
            Self::FILL_CODE => Self::Fill,
            other => Self::Other(other),
        }
    }

    /// Map a wire value to an execution type.
    ///
    /// Only single-character values carry a type.
    #[must_use]
    pub fn from_wire(value: &str) -> Option<Self> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(code), None) => Some(Self::from_code(code)),
            _ => None,
        }
    }

    /// Get the wire code.
    #[must_use]
    pub const fn code(&self) -> char {
        match self {
            Self::Order => Self::ORDER_CODE,
            Self::Fill => Self::FILL_CODE,
            Self::Other(c) => *c,
        }
    }
}

impl From<char> for ExecType {
    fn from(code: char) -> Self {
        Self::from_code(code)
    }
}

impl From<ExecType> for char {
    fn from(value: ExecType) -> Self {
        value.code()
    }
}

/// Decode an optional `type` field without failing the whole report.
///
/// Empty and multi-character codes decode as no type; numeric codes are
/// read as their decimal text.
pub(crate) fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<ExecType>, D::Error>
where
    D: Deserializer<'de>,
{
    struct WireCode;

    impl<'de> Visitor<'de> for WireCode {
        type Value = Option<ExecType>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an execution type code")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(ExecType::from_wire(v))
        }

        fn visit_char<E: de::Error>(self, v: char) -> Result<Self::Value, E> {
            Ok(Some(ExecType::from_code(v)))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(ExecType::from_wire(&v.to_string()))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(ExecType::from_wire(&v.to_string()))
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D2: Deserializer<'de>>(self, d: D2) -> Result<Self::Value, D2::Error> {
            d.deserialize_any(self)
        }
    }

    deserializer.deserialize_any(WireCode)
}

impl fmt::Display for ExecType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes() {
        assert_eq!(ExecType::from_code('O'), ExecType::Order);
        assert_eq!(ExecType::from_code('F'), ExecType::Fill);
    }

    #[test]
    fn unknown_code_is_preserved() {
        let t = ExecType::from_code('2');
        assert_eq!(t, ExecType::Other('2'));
        assert_eq!(t.code(), '2');
    }

    #[test]
    fn serde_single_char_string() {
        let parsed: ExecType = serde_json::from_str("\"F\"").unwrap();
        assert_eq!(parsed, ExecType::Fill);
        assert_eq!(serde_json::to_string(&ExecType::Order).unwrap(), "\"O\"");
    }

    #[test]
    fn wire_values_other_than_one_char_have_no_type() {
        assert_eq!(ExecType::from_wire("F"), Some(ExecType::Fill));
        assert_eq!(ExecType::from_wire("8"), Some(ExecType::Other('8')));
        assert_eq!(ExecType::from_wire(""), None);
        assert_eq!(ExecType::from_wire("FILL"), None);
    }

    #[test]
    fn codes_are_case_sensitive() {
        assert_eq!(ExecType::from_code('f'), ExecType::Other('f'));
    }
}
