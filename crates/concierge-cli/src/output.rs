//! Rendering of dispatch results for the console.
//!
//! Results reach the console as [`ResultLine`]s. Human output reads
//! `deposit: 150`; JSON output emits one object per line, such as
//! `{"command":"deposit","result":150}`.

use clap::ValueEnum;
use concierge_core::ResultValue;
use serde::Serialize;

/// Output format selection for command results.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Selects `human` for terminal output and `json` for redirected output.
    Auto,
    /// Always render human-readable output.
    Human,
    /// Always emit one JSON object per result.
    Json,
}

/// Output format after resolving `auto` based on TTY detection.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResolvedOutputFormat {
    /// `command: result` lines.
    Human,
    /// JSON objects, one per line.
    Json,
}

impl OutputFormat {
    /// Resolves the output format based on whether stdout is a terminal.
    #[must_use]
    pub const fn resolve(self, stdout_is_terminal: bool) -> ResolvedOutputFormat {
        match self {
            Self::Auto => {
                if stdout_is_terminal {
                    ResolvedOutputFormat::Human
                } else {
                    ResolvedOutputFormat::Json
                }
            }
            Self::Human => ResolvedOutputFormat::Human,
            Self::Json => ResolvedOutputFormat::Json,
        }
    }
}

/// A result delivered to the console callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ResultLine {
    /// Name of the command that produced the result.
    pub command: &'static str,
    /// The value the resource manager returned.
    pub result: ResultValue,
}

impl ResultLine {
    /// Renders the line in `format`, without a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialisation fails.
    pub fn render(&self, format: ResolvedOutputFormat) -> Result<String, serde_json::Error> {
        match format {
            ResolvedOutputFormat::Human => Ok(format!("{}: {}", self.command, self.result)),
            ResolvedOutputFormat::Json => serde_json::to_string(self),
        }
    }
}
