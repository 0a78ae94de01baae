//! Typed results produced by the server and delivered to the client.

use std::fmt;

use serde::Serialize;

/// Result of running one command against a [`Contract`](crate::Contract).
///
/// Serialises untagged, so a balance renders as `150` and a flight check as
/// `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResultValue {
    /// Outcome of a flight operation.
    Boolean(bool),
    /// Balance after an account operation.
    Integer(i32),
}

impl ResultValue {
    /// Returns a short name for the variant, used in diagnostics.
    #[must_use]
    pub const fn kind_name(self) -> &'static str {
        match self {
            Self::Boolean(_) => "boolean",
            Self::Integer(_) => "integer",
        }
    }
}

impl fmt::Display for ResultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Integer(value) => write!(f, "{value}"),
        }
    }
}
