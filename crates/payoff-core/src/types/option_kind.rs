//! Option kind (call or put).

use std::fmt;

use serde::{Deserialize, Serialize};

/// The right conveyed by an option contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    /// Right to buy the underlying at the strike.
    Call,
    /// Right to sell the underlying at the strike.
    Put,
}

impl OptionKind {
    /// All option kinds, in registration order.
    pub const ALL: [OptionKind; 2] = [OptionKind::Call, OptionKind::Put];

    /// Stable name of the tool that analyses this kind of contract.
    pub fn tool_name(self) -> &'static str {
        match self {
            OptionKind::Call => "call_option",
            OptionKind::Put => "put_option",
        }
    }

    /// Lowercase label used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            OptionKind::Call => "call",
            OptionKind::Put => "put",
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionKind::Call => write!(f, "Call"),
            OptionKind::Put => write!(f, "Put"),
        }
    }
}
