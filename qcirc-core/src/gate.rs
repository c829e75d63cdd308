//! Supported gate symbols
//!
//! The simulator only understands a closed set of parameterless single-qubit
//! gates. They are modelled as an enum so every consumer matches exhaustively;
//! symbols outside the set are rejected when a circuit is parsed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A single-qubit gate from the supported set
///
/// # Example
/// ```
/// use qcirc_core::GateSymbol;
///
/// let h: GateSymbol = "h".parse().unwrap();
/// assert_eq!(h, GateSymbol::Hadamard);
/// assert_eq!(h.to_string(), "H");
/// assert!("Y".parse::<GateSymbol>().is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum GateSymbol {
    /// Identity, a no-op
    Identity,
    /// Hadamard
    Hadamard,
    /// Pauli-X (bit flip)
    PauliX,
    /// Pauli-Z (phase flip)
    PauliZ,
}

impl GateSymbol {
    /// Every supported gate, in table order
    pub const ALL: [GateSymbol; 4] = [
        GateSymbol::Identity,
        GateSymbol::Hadamard,
        GateSymbol::PauliX,
        GateSymbol::PauliZ,
    ];

    /// Canonical wire symbol
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            GateSymbol::Identity => "I",
            GateSymbol::Hadamard => "H",
            GateSymbol::PauliX => "X",
            GateSymbol::PauliZ => "Z",
        }
    }

    /// Whether applying the gate leaves every state untouched
    #[inline]
    pub const fn is_identity(&self) -> bool {
        matches!(self, GateSymbol::Identity)
    }

    /// Parse a wire symbol, case-insensitively
    ///
    /// Returns `None` for anything outside the supported set.
    pub fn parse_symbol(symbol: &str) -> Option<Self> {
        match symbol.trim() {
            s if s.eq_ignore_ascii_case("I") => Some(GateSymbol::Identity),
            s if s.eq_ignore_ascii_case("H") => Some(GateSymbol::Hadamard),
            s if s.eq_ignore_ascii_case("X") => Some(GateSymbol::PauliX),
            s if s.eq_ignore_ascii_case("Z") => Some(GateSymbol::PauliZ),
            _ => None,
        }
    }
}

/// Error returned when a string is not a supported gate symbol
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown gate symbol '{0}'")]
pub struct UnknownGateSymbol(pub String);

impl FromStr for GateSymbol {
    type Err = UnknownGateSymbol;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_symbol(s).ok_or_else(|| UnknownGateSymbol(s.to_string()))
    }
}

impl TryFrom<String> for GateSymbol {
    type Error = UnknownGateSymbol;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<GateSymbol> for String {
    fn from(gate: GateSymbol) -> Self {
        gate.name().to_string()
    }
}

impl fmt::Display for GateSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
