//! Domain types for option payoff analytics.
//!
//! - [`OptionKind`]: Call or put, with the tool name each kind is served under
//! - [`MaxProfit`]: Finite profit cap or the unbounded marker
//! - [`PayoffSummary`]: Breakeven and payoff bounds for one contract

mod max_profit;
mod option_kind;
mod summary;

pub use max_profit::MaxProfit;
pub use option_kind::OptionKind;
pub use summary::PayoffSummary;
