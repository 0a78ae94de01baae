//! Conversion of raw argument tokens into typed values.
//!
//! Each command declares an ordered signature of [`ArgKind`]s. The codec
//! checks a token list against that signature and, on the server side,
//! produces the matching [`ArgValue`]s. Checking is pure: the same tokens
//! always produce the same verdict.

use std::fmt;

use strum::Display;
use thiserror::Error;

use super::errors::DispatchError;
use super::registry::CommandSpec;

/// Kind of value a signature slot accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ArgKind {
    /// A 32-bit signed integer, optionally prefixed with `+` or `-`.
    Integer,
    /// Any token, taken verbatim.
    String,
    /// A boolean literal. Only a case-insensitive `true` is true.
    Boolean,
}

impl ArgKind {
    /// Parses `token` as a value of this kind.
    ///
    /// Returns `None` when an integer slot receives text that does not fit a
    /// 32-bit signed integer. Boolean slots never fail: any token other than
    /// a case-insensitive `true` reads as `false`.
    #[must_use]
    pub fn parse_token(self, token: &str) -> Option<ArgValue> {
        match self {
            Self::Integer => token.parse::<i32>().ok().map(ArgValue::Integer),
            Self::String => Some(ArgValue::String(token.to_owned())),
            Self::Boolean => Some(ArgValue::Boolean(token.eq_ignore_ascii_case("true"))),
        }
    }
}

/// A typed argument produced from one token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    /// Integer argument.
    Integer(i32),
    /// Text argument.
    String(String),
    /// Boolean argument.
    Boolean(bool),
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::String(value) => f.write_str(value),
            Self::Boolean(value) => write!(f, "{value}"),
        }
    }
}

/// Why a token list does not match a signature.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatIssue {
    /// Too many or too few tokens.
    #[error("expected {expected} argument(s), found {found}")]
    Arity {
        /// Length of the signature.
        expected: usize,
        /// Number of tokens supplied.
        found: usize,
    },
    /// A token could not be parsed as its slot's kind.
    #[error("argument {position} ('{token}') is not a valid {kind}")]
    InvalidToken {
        /// One-based slot position.
        position: usize,
        /// Kind the slot declares.
        kind: ArgKind,
        /// Offending token.
        token: String,
    },
}

/// Converts `tokens` into typed values following `signature`.
///
/// # Errors
///
/// Returns [`FormatIssue::Arity`] when the token count differs from the
/// signature length, or [`FormatIssue::InvalidToken`] for the first token
/// that does not parse as its slot's kind.
pub fn decode_tokens<S: AsRef<str>>(
    signature: &[ArgKind],
    tokens: &[S],
) -> Result<Vec<ArgValue>, FormatIssue> {
    if tokens.len() != signature.len() {
        return Err(FormatIssue::Arity {
            expected: signature.len(),
            found: tokens.len(),
        });
    }

    signature
        .iter()
        .zip(tokens)
        .enumerate()
        .map(|(index, (kind, token))| {
            let token = token.as_ref();
            kind.parse_token(token)
                .ok_or_else(|| FormatIssue::InvalidToken {
                    position: index + 1,
                    kind: *kind,
                    token: token.to_owned(),
                })
        })
        .collect()
}

/// Checks `tokens` against the signature of `spec` without keeping the values.
///
/// # Errors
///
/// Returns [`DispatchError::FormatMismatch`] when the tokens do not match.
pub fn validate<S: AsRef<str>>(spec: &CommandSpec, tokens: &[S]) -> Result<(), DispatchError> {
    decode(spec, tokens).map(|_| ())
}

/// Converts `tokens` into the typed arguments of `spec`.
///
/// # Errors
///
/// Returns [`DispatchError::FormatMismatch`] when the tokens do not match.
pub fn decode<S: AsRef<str>>(
    spec: &CommandSpec,
    tokens: &[S],
) -> Result<Vec<ArgValue>, DispatchError> {
    decode_tokens(spec.signature(), tokens)
        .map_err(|issue| DispatchError::format_mismatch(spec.name(), issue))
}
