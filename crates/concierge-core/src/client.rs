//! The requesting side of a round trip.

use crate::dispatch::{DispatchError, Dispatcher};
use crate::transport::{Transport, TransportError};

/// Validates command lines and forwards them to a server.
///
/// The client never converts tokens into typed values: it checks the line's
/// shape and hands the original text to its [`Transport`]. Results come back
/// through whichever [`Callback`](crate::Callback) the server was built
/// with, possibly on another thread.
#[derive(Debug)]
pub struct Client<T> {
    transport: T,
    dispatcher: Dispatcher,
}

impl<T> Client<T>
where
    T: Transport,
{
    /// Creates a client sending through `transport`.
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self::with_dispatcher(transport, Dispatcher::new())
    }

    /// Creates a client using a caller-supplied dispatcher.
    #[must_use]
    pub const fn with_dispatcher(transport: T, dispatcher: Dispatcher) -> Self {
        Self {
            transport,
            dispatcher,
        }
    }

    /// Validates `line` and forwards it to the server.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::UnknownCommand`] or
    /// [`DispatchError::FormatMismatch`] for a bad line, or
    /// [`DispatchError::Transport`] if the server cannot accept it.
    pub fn submit(&self, line: &str) -> Result<(), DispatchError> {
        self.dispatcher.submit(line, &self.transport)
    }

    /// Registers a line typed at the console.
    ///
    /// Rejections are reported through the dispatcher's reporter and the line
    /// is dropped; nothing propagates to the caller.
    pub fn on_input_received(&self, line: &str) {
        let _ = self.submit(line);
    }

    /// Sends an already validated line straight to the server.
    ///
    /// # Errors
    ///
    /// Returns the transport's error unchanged.
    pub fn send_to_server(&self, line: &str) -> Result<(), TransportError> {
        self.transport.send(line)
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }
}
