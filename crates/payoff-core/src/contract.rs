//! Validated option contracts.
//!
//! A contract can only be built through [`OptionContract::new`] (or the
//! [`call`](OptionContract::call) / [`put`](OptionContract::put) shorthands),
//! which enforce the domain `strike > 0`, `premium >= 0`, both finite.
//! Everything downstream can therefore compute without further checks.

use rust_decimal::prelude::*;
use serde::Serialize;

use crate::error::{PayoffError, PayoffResult};
use crate::types::{MaxProfit, OptionKind, PayoffSummary};

/// A long option position: the buyer paid `premium` for the right to
/// trade the underlying at `strike`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct OptionContract {
    kind: OptionKind,
    #[serde(with = "rust_decimal::serde::float")]
    strike: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    premium: Decimal,
}

impl OptionContract {
    /// Creates a contract from floating point inputs.
    ///
    /// # Errors
    ///
    /// Returns `PayoffError::InvalidInput` if either value is NaN or infinite,
    /// cannot be represented as a decimal (too large, or non-zero but below
    /// decimal precision), if `strike <= 0` or `premium < 0`, or if a call's
    /// `strike + premium` overflows.
    pub fn new(kind: OptionKind, strike: f64, premium: f64) -> PayoffResult<Self> {
        if strike <= 0.0 {
            log::debug!("rejected {kind} contract: strike {strike} is not positive");
            return Err(PayoffError::invalid_input(
                "strike",
                strike,
                "must be greater than zero",
            ));
        }
        if premium < 0.0 {
            log::debug!("rejected {kind} contract: premium {premium} is negative");
            return Err(PayoffError::invalid_input(
                "premium",
                premium,
                "must not be negative",
            ));
        }

        let strike_dec = to_decimal("strike", strike)?;
        let premium_dec = to_decimal("premium", premium)?;
        Self::from_decimals(kind, strike_dec, premium_dec)
    }

    /// Creates a long call.
    pub fn call(strike: f64, premium: f64) -> PayoffResult<Self> {
        Self::new(OptionKind::Call, strike, premium)
    }

    /// Creates a long put.
    pub fn put(strike: f64, premium: f64) -> PayoffResult<Self> {
        Self::new(OptionKind::Put, strike, premium)
    }

    /// Creates a contract from decimal inputs.
    ///
    /// # Errors
    ///
    /// Returns `PayoffError::InvalidInput` if `strike <= 0`, `premium < 0`,
    /// or, for a call, `strike + premium` exceeds the decimal range.
    pub fn from_decimals(kind: OptionKind, strike: Decimal, premium: Decimal) -> PayoffResult<Self> {
        if strike <= Decimal::ZERO {
            log::debug!("rejected {kind} contract: strike {strike} is not positive");
            return Err(PayoffError::invalid_input(
                "strike",
                strike.to_f64().unwrap_or(f64::NAN),
                "must be greater than zero",
            ));
        }
        if premium < Decimal::ZERO {
            log::debug!("rejected {kind} contract: premium {premium} is negative");
            return Err(PayoffError::invalid_input(
                "premium",
                premium.to_f64().unwrap_or(f64::NAN),
                "must not be negative",
            ));
        }
        // Breakeven of a call is the sum; it must stay representable.
        if kind == OptionKind::Call && strike.checked_add(premium).is_none() {
            log::debug!("rejected {kind} contract: strike {strike} + premium {premium} overflows");
            return Err(PayoffError::invalid_input(
                "premium",
                premium.to_f64().unwrap_or(f64::NAN),
                "puts strike + premium outside the representable range",
            ));
        }

        Ok(Self {
            kind,
            strike,
            premium,
        })
    }

    /// Returns the option kind.
    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    /// Returns the strike price.
    pub fn strike(&self) -> Decimal {
        self.strike
    }

    /// Returns the premium paid.
    pub fn premium(&self) -> Decimal {
        self.premium
    }

    /// Underlying price at expiry where the position nets zero.
    ///
    /// A call must finish above the strike by the premium; a put must finish
    /// below it by the premium.
    pub fn breakeven(&self) -> Decimal {
        match self.kind {
            OptionKind::Call => self.strike + self.premium,
            OptionKind::Put => self.strike - self.premium,
        }
    }

    /// Largest profit at expiry.
    ///
    /// Unbounded for a call. For a put it is realized when the underlying
    /// falls to zero.
    pub fn max_profit(&self) -> MaxProfit {
        match self.kind {
            OptionKind::Call => MaxProfit::Unbounded,
            OptionKind::Put => MaxProfit::Finite(self.strike - self.premium),
        }
    }

    /// Largest loss at expiry: the premium, lost when the option expires
    /// out of the money.
    pub fn max_loss(&self) -> Decimal {
        self.premium
    }

    /// Breakeven and payoff bounds in one value.
    pub fn summary(&self) -> PayoffSummary {
        PayoffSummary {
            breakeven: self.breakeven(),
            max_profit: self.max_profit(),
            max_loss: self.max_loss(),
        }
    }

    /// Intrinsic value at expiry for the given underlying price.
    ///
    /// # Errors
    ///
    /// Returns `PayoffError::InvalidInput` if `underlying` is negative or
    /// not finite.
    pub fn payoff_at(&self, underlying: f64) -> PayoffResult<Decimal> {
        let spot = to_underlying(underlying)?;
        Ok(self.intrinsic(spot))
    }

    /// Net profit at expiry (intrinsic value less the premium paid).
    ///
    /// Zero at [`breakeven`](Self::breakeven), never below `-max_loss`.
    pub fn profit_at(&self, underlying: f64) -> PayoffResult<Decimal> {
        let spot = to_underlying(underlying)?;
        Ok(self.intrinsic(spot) - self.premium)
    }

    fn intrinsic(&self, spot: Decimal) -> Decimal {
        let moneyness = match self.kind {
            OptionKind::Call => spot - self.strike,
            OptionKind::Put => self.strike - spot,
        };
        moneyness.max(Decimal::ZERO)
    }
}

fn to_underlying(value: f64) -> PayoffResult<Decimal> {
    let spot = to_decimal("underlying_price", value)?;
    if spot < Decimal::ZERO {
        return Err(PayoffError::invalid_input(
            "underlying_price",
            value,
            "must not be negative",
        ));
    }
    Ok(spot)
}

fn to_decimal(field: &'static str, value: f64) -> PayoffResult<Decimal> {
    if !value.is_finite() {
        log::debug!("rejected {field}: {value} is not finite");
        return Err(PayoffError::invalid_input(
            field,
            value,
            "must be a finite number",
        ));
    }
    let decimal = Decimal::from_f64(value).ok_or_else(|| {
        PayoffError::invalid_input(field, value, "is outside the representable range")
    })?;
    if value != 0.0 && decimal.is_zero() {
        log::debug!("rejected {field}: {value} is below decimal precision");
        return Err(PayoffError::invalid_input(
            field,
            value,
            "is outside the representable range",
        ));
    }
    Ok(decimal)
}
