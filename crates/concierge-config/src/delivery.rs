//! Selects how validated lines travel from the client to the server.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// How the client hands validated command lines to the server.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DeliveryMode {
    /// The server runs on the submitting thread before `submit` returns.
    #[default]
    Inline,
    /// Lines are queued to a worker thread; callbacks arrive on that thread.
    Queued,
}

/// Errors encountered while parsing a [`DeliveryMode`] from text.
pub type DeliveryModeParseError = strum::ParseError;
