//! Selection of the client-to-server transport from configuration.

use std::sync::Arc;

use concierge_config::DeliveryMode;
use concierge_core::{InlineTransport, QueuedTransport, Server, Transport, TransportError};

/// The transport chosen by [`DeliveryMode`].
#[derive(Debug)]
pub(crate) enum Delivery {
    Inline(InlineTransport),
    Queued(QueuedTransport),
}

impl Delivery {
    pub(crate) fn start(mode: DeliveryMode, server: Arc<Server>) -> Result<Self, TransportError> {
        match mode {
            DeliveryMode::Inline => Ok(Self::Inline(InlineTransport::new(server))),
            DeliveryMode::Queued => QueuedTransport::start(server).map(Self::Queued),
        }
    }

    /// Waits until every line sent so far has been executed.
    pub(crate) fn finish(&self) -> Result<(), TransportError> {
        match self {
            Self::Inline(_) => Ok(()),
            Self::Queued(transport) => transport.shutdown(),
        }
    }
}

impl Transport for Delivery {
    fn send(&self, line: &str) -> Result<(), TransportError> {
        match self {
            Self::Inline(transport) => transport.send(line),
            Self::Queued(transport) => transport.send(line),
        }
    }
}
