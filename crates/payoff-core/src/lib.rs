//! # Payoff Core
//!
//! Expiry payoff analytics for single-leg, long option positions.
//!
//! The buyer pays the premium upfront and holds the contract to expiration.
//! There is no early exercise, no dividends and no carry, so every figure
//! here is a closed-form function of strike and premium:
//!
//! | Position  | Breakeven          | Max profit         | Max loss  |
//! |-----------|--------------------|--------------------|-----------|
//! | Long call | `strike + premium` | unbounded          | `premium` |
//! | Long put  | `strike - premium` | `strike - premium` | `premium` |
//!
//! ## Example
//!
//! ```rust
//! use payoff_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let call = evaluate_call(100.0, 5.0).unwrap();
//! assert_eq!(call.breakeven, dec!(105));
//! assert_eq!(call.max_profit, MaxProfit::Unbounded);
//!
//! let put = evaluate_put(100.0, 5.0).unwrap();
//! assert_eq!(put.max_profit, MaxProfit::Finite(dec!(95)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod calculator;
pub mod contract;
pub mod error;
pub mod types;

pub use calculator::{evaluate, evaluate_call, evaluate_put};
pub use contract::OptionContract;
pub use error::{PayoffError, PayoffResult};
pub use types::{MaxProfit, OptionKind, PayoffSummary};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calculator::{evaluate, evaluate_call, evaluate_put};
    pub use crate::contract::OptionContract;
    pub use crate::error::{PayoffError, PayoffResult};
    pub use crate::types::{MaxProfit, OptionKind, PayoffSummary};
}
