//! Payoff calculator entry points.
//!
//! Each function validates its inputs into an [`OptionContract`] and returns
//! the contract's [`PayoffSummary`]. They are pure and deterministic, so they
//! can be called concurrently from any number of requests.

use crate::contract::OptionContract;
use crate::error::PayoffResult;
use crate::types::{OptionKind, PayoffSummary};

/// Breakeven and bounds of a long call.
///
/// - `breakeven = strike + premium`
/// - `max_profit = unbounded`
/// - `max_loss = premium`
///
/// # Errors
///
/// Returns `PayoffError::InvalidInput` unless `strike > 0` and `premium >= 0`,
/// both finite, and `strike + premium` fits the decimal range.
pub fn evaluate_call(strike: f64, premium: f64) -> PayoffResult<PayoffSummary> {
    evaluate(OptionKind::Call, strike, premium)
}

/// Breakeven and bounds of a long put.
///
/// - `breakeven = strike - premium`
/// - `max_profit = strike - premium` (underlying falls to zero)
/// - `max_loss = premium`
///
/// # Errors
///
/// Returns `PayoffError::InvalidInput` unless `strike > 0` and `premium >= 0`,
/// both finite.
pub fn evaluate_put(strike: f64, premium: f64) -> PayoffResult<PayoffSummary> {
    evaluate(OptionKind::Put, strike, premium)
}

/// Breakeven and bounds for either kind of contract.
pub fn evaluate(kind: OptionKind, strike: f64, premium: f64) -> PayoffResult<PayoffSummary> {
    OptionContract::new(kind, strike, premium).map(|contract| contract.summary())
}
