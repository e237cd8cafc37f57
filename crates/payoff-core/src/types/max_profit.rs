//! Maximum profit of a long option position.

use std::fmt;

use rust_decimal::prelude::*;
use serde::de::{self, Deserializer};
use serde::ser::{self, Serializer};
use serde::{Deserialize, Serialize};

/// Wire label for a profit with no upper cap.
pub const UNBOUNDED: &str = "unbounded";

/// The largest profit a position can realize at expiry.
///
/// A long call gains without limit as the underlying rises, which no real
/// number can represent, so the cap is a tagged value instead of a float.
///
/// On the wire a finite cap is a JSON number and the unbounded case is the
/// string `"unbounded"`:
///
/// ```rust
/// use payoff_core::MaxProfit;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(serde_json::to_string(&MaxProfit::Unbounded).unwrap(), "\"unbounded\"");
/// assert_eq!(serde_json::to_string(&MaxProfit::Finite(dec!(95))).unwrap(), "95.0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaxProfit {
    /// Profit is capped at this amount.
    Finite(Decimal),
    /// Profit grows without an upper bound.
    Unbounded,
}

impl MaxProfit {
    /// Returns true if profit has no upper bound.
    pub fn is_unbounded(&self) -> bool {
        matches!(self, MaxProfit::Unbounded)
    }

    /// Returns the cap, or `None` when unbounded.
    pub fn as_finite(&self) -> Option<Decimal> {
        match self {
            MaxProfit::Finite(value) => Some(*value),
            MaxProfit::Unbounded => None,
        }
    }
}

impl fmt::Display for MaxProfit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaxProfit::Finite(value) => write!(f, "{value}"),
            MaxProfit::Unbounded => f.write_str(UNBOUNDED),
        }
    }
}

impl Serialize for MaxProfit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MaxProfit::Finite(value) => {
                let value = value.to_f64().ok_or_else(|| {
                    <S::Error as ser::Error>::custom("max profit is not representable as f64")
                })?;
                serializer.serialize_f64(value)
            }
            MaxProfit::Unbounded => serializer.serialize_str(UNBOUNDED),
        }
    }
}

impl<'de> Deserialize<'de> for MaxProfit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(f64),
            Label(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Number(value) => Decimal::from_f64(value)
                .map(MaxProfit::Finite)
                .ok_or_else(|| de::Error::custom(format!("max profit {value} is out of range"))),
            Repr::Label(label) if label.eq_ignore_ascii_case(UNBOUNDED) => Ok(MaxProfit::Unbounded),
            Repr::Label(label) => Err(de::Error::custom(format!(
                "expected a number or \"{UNBOUNDED}\", got \"{label}\""
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_unbounded_serializes_as_label() {
        let json = serde_json::to_value(MaxProfit::Unbounded).unwrap();
        assert_eq!(json, serde_json::json!("unbounded"));
    }

    #[test]
    fn test_finite_serializes_as_number() {
        let json = serde_json::to_value(MaxProfit::Finite(dec!(95))).unwrap();
        assert_eq!(json.as_f64(), Some(95.0));
    }

    #[test]
    fn test_deserialize() {
        let unbounded: MaxProfit = serde_json::from_str("\"unbounded\"").unwrap();
        assert!(unbounded.is_unbounded());

        let finite: MaxProfit = serde_json::from_str("12.5").unwrap();
        assert_eq!(finite.as_finite(), Some(dec!(12.5)));

        assert!(serde_json::from_str::<MaxProfit>("\"infinite-ish\"").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(MaxProfit::Unbounded.to_string(), "unbounded");
        assert_eq!(MaxProfit::Finite(dec!(0)).to_string(), "0");
    }
}
