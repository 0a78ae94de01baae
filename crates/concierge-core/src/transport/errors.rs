//! Error types for transport failures.

use std::io;

use thiserror::Error;

/// Errors raised while handing lines to the server.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The server's inbound channel has been shut down.
    #[error("server inbound channel is closed")]
    Closed,
    /// The server worker thread could not be started.
    #[error("failed to spawn server worker: {0}")]
    Spawn(#[source] io::Error),
    /// The server worker thread panicked.
    #[error("server worker panicked")]
    WorkerPanicked,
}
