//! Breakeven and payoff bounds of a single contract.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::MaxProfit;

/// Breakeven price and payoff bounds of a long option held to expiry.
///
/// Serializes to `{"breakeven": number, "max_profit": number | "unbounded",
/// "max_loss": number}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoffSummary {
    /// Underlying price at which net profit is exactly zero.
    #[serde(with = "rust_decimal::serde::float")]
    pub breakeven: Decimal,
    /// Largest achievable profit.
    pub max_profit: MaxProfit,
    /// Largest possible loss; always the premium paid.
    #[serde(with = "rust_decimal::serde::float")]
    pub max_loss: Decimal,
}
