//! Hand-off of validated command lines from client to server.
//!
//! The dispatch core treats the transport as an opaque function: it gives a
//! line to [`Transport::send`] and expects the server's inbound entry point
//! to receive it. Two in-process transports are provided; closures of the
//! form `Fn(&str) -> Result<(), TransportError>` also qualify, which keeps
//! tests and embedders free to inject their own.

mod errors;
mod inline;
mod queued;

pub use self::errors::TransportError;
pub use self::inline::InlineTransport;
pub use self::queued::QueuedTransport;

/// Tracing target for transport operations.
pub const TRANSPORT_TARGET: &str = concat!(env!("CARGO_CRATE_NAME"), "::transport");

/// Delivers a command line to the server's inbound entry point.
pub trait Transport: Send + Sync {
    /// Hands `line` to the server.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] if the server can no longer accept lines.
    fn send(&self, line: &str) -> Result<(), TransportError>;
}

impl<F> Transport for F
where
    F: Fn(&str) -> Result<(), TransportError> + Send + Sync,
{
    fn send(&self, line: &str) -> Result<(), TransportError> {
        self(line)
    }
}
