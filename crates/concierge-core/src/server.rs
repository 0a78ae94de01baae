//! The executing side of a round trip.

use std::fmt;
use std::sync::Arc;

use crate::capability::{Callback, Contract};
use crate::dispatch::{DispatchError, Dispatcher, ResultValue};

/// Executes command lines against a resource manager.
///
/// The server owns the [`Contract`] implementation (the resource manager)
/// and the [`Callback`] through which results reach the client. The manager
/// has no knowledge of either the dispatcher or the callback.
pub struct Server {
    manager: Arc<dyn Contract>,
    callback: Arc<dyn Callback>,
    dispatcher: Dispatcher,
}

impl fmt::Debug for Server {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Server")
            .field("dispatcher", &self.dispatcher)
            .finish_non_exhaustive()
    }
}

impl Server {
    /// Creates a server executing on `manager` and answering to `callback`.
    #[must_use]
    pub fn new(manager: Arc<dyn Contract>, callback: Arc<dyn Callback>) -> Self {
        Self::with_dispatcher(manager, callback, Dispatcher::new())
    }

    /// Creates a server using a caller-supplied dispatcher.
    #[must_use]
    pub fn with_dispatcher(
        manager: Arc<dyn Contract>,
        callback: Arc<dyn Callback>,
        dispatcher: Dispatcher,
    ) -> Self {
        Self {
            manager,
            callback,
            dispatcher,
        }
    }

    /// Re-validates `line`, runs it, and delivers the result.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::UnknownCommand`] or
    /// [`DispatchError::FormatMismatch`] without touching the manager or the
    /// callback.
    pub fn execute(&self, line: &str) -> Result<ResultValue, DispatchError> {
        self.dispatcher
            .execute(line, self.manager.as_ref(), self.callback.as_ref())
    }

    /// Inbound entry point used by transports.
    ///
    /// Rejections are reported through the dispatcher's reporter and the line
    /// is dropped; nothing propagates to the caller.
    pub fn on_input_received(&self, line: &str) {
        let _ = self.execute(line);
    }
}
