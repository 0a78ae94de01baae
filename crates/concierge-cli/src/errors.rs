//! Error types for the CLI runtime.

use std::io;
use std::sync::Arc;

use concierge_core::TransportError;
use thiserror::Error;

use crate::telemetry::TelemetryError;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("failed to load configuration: {0}")]
    LoadConfiguration(Arc<ortho_config::OrthoError>),
    #[error("{0}")]
    CliUsage(clap::Error),
    #[error("failed to initialise telemetry: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("failed to start server: {0}")]
    StartServer(TransportError),
    #[error("failed to stop server: {0}")]
    StopServer(TransportError),
    #[error("failed to read command input: {0}")]
    ReadInput(io::Error),
    #[error("failed to write output: {0}")]
    WriteOutput(io::Error),
    #[error("failed to serialise result: {0}")]
    SerialiseResult(serde_json::Error),
}
