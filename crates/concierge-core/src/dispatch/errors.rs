//! Error types for command dispatch failures.
//!
//! Rejections (`UnknownCommand`, `FormatMismatch`) are the caller's problem
//! and never fatal: the offending line is reported and discarded. The
//! remaining variants describe infrastructure failures around a command that
//! was itself well formed.

use thiserror::Error;

use super::codec::FormatIssue;
use super::response::ResultValue;
use crate::transport::TransportError;

/// Errors surfaced while resolving, validating, or running a command line.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The first token does not name a registered command.
    #[error("'{name}' is not a valid command")]
    UnknownCommand { name: String },

    /// The argument tokens do not match the command's signature.
    #[error("{command} does not have properly formatted arguments: {issue}")]
    FormatMismatch {
        command: String,
        #[source]
        issue: FormatIssue,
    },

    /// The validated line could not be handed to the server.
    #[error("failed to send command to server: {0}")]
    Transport(#[from] TransportError),

    /// A command binding received values of the wrong shape.
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl DispatchError {
    /// Returns the exit status code for this error.
    ///
    /// Rejected lines return status 1. Infrastructure failures return
    /// status 2.
    #[must_use]
    pub const fn exit_status(&self) -> i32 {
        match self {
            Self::UnknownCommand { .. } | Self::FormatMismatch { .. } => 1,
            Self::Transport(_) | Self::Internal { .. } => 2,
        }
    }

    /// Returns `true` when the line itself was at fault.
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::UnknownCommand { .. } | Self::FormatMismatch { .. }
        )
    }

    /// Creates an unknown command error.
    pub fn unknown_command(name: impl Into<String>) -> Self {
        Self::UnknownCommand { name: name.into() }
    }

    /// Creates a format mismatch error.
    pub fn format_mismatch(command: impl Into<String>, issue: FormatIssue) -> Self {
        Self::FormatMismatch {
            command: command.into(),
            issue,
        }
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Creates an internal error for a request binding handed the wrong
    /// argument list.
    pub(crate) fn argument_shape(command: &str, found: usize) -> Self {
        Self::internal(format!(
            "{command} binding received {found} argument(s) of unexpected kinds"
        ))
    }

    /// Creates an internal error for a response binding handed the wrong
    /// result variant.
    pub(crate) fn result_shape(command: &str, result: ResultValue) -> Self {
        Self::internal(format!(
            "{command} binding cannot deliver {} result {result}",
            result.kind_name()
        ))
    }
}
