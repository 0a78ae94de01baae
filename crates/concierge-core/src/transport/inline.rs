//! Same-thread transport.

use std::sync::Arc;

use super::{Transport, TransportError};
use crate::server::Server;

/// Transport that runs the server on the submitting thread.
///
/// The callback has fired by the time [`Transport::send`] returns.
#[derive(Debug, Clone)]
pub struct InlineTransport {
    server: Arc<Server>,
}

impl InlineTransport {
    /// Wraps `server` as a same-thread transport.
    #[must_use]
    pub const fn new(server: Arc<Server>) -> Self {
        Self { server }
    }
}

impl Transport for InlineTransport {
    fn send(&self, line: &str) -> Result<(), TransportError> {
        self.server.on_input_received(line);
        Ok(())
    }
}
