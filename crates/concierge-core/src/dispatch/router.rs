//! The two dispatch paths over the command registry.
//!
//! [`Dispatcher::submit`] is the client path: it checks a line's shape and
//! forwards the untouched line through a [`Transport`]. Typed conversion
//! happens once, on the receiving side, in [`Dispatcher::execute`], which
//! re-checks the line rather than trusting the sender.

use std::sync::Arc;

use tracing::debug;

use super::codec::{decode, validate};
use super::errors::DispatchError;
use super::registry::{CommandSpec, lookup};
use super::request::RawCommand;
use super::response::ResultValue;
use crate::capability::{Callback, Contract};
use crate::reporting::{DispatchReporter, DispatchSide, StructuredDispatchReporter};
use crate::transport::Transport;

/// Tracing target for dispatch operations.
pub const DISPATCH_TARGET: &str = concat!(env!("CARGO_CRATE_NAME"), "::dispatch");

/// Resolves raw command lines against the registry and drives invocation.
///
/// The dispatcher holds no mutable state; the same instance may serve any
/// number of threads.
#[derive(Clone)]
pub struct Dispatcher {
    reporter: Arc<dyn DispatchReporter>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher").finish_non_exhaustive()
    }
}

impl Dispatcher {
    /// Creates a dispatcher that reports through `tracing`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_reporter(Arc::new(StructuredDispatchReporter::new()))
    }

    /// Creates a dispatcher that reports lifecycle events to `reporter`.
    #[must_use]
    pub fn with_reporter(reporter: Arc<dyn DispatchReporter>) -> Self {
        Self { reporter }
    }

    /// Resolves `line` to its command and checks the argument shape.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::UnknownCommand`] or
    /// [`DispatchError::FormatMismatch`].
    pub fn check(&self, line: &str) -> Result<&'static CommandSpec, DispatchError> {
        let raw = RawCommand::parse(line);
        let spec = lookup(raw.name())?;
        validate(spec, raw.args())?;
        Ok(spec)
    }

    /// Client path: validates `line` and forwards it unmodified.
    ///
    /// # Errors
    ///
    /// Returns a rejection when the line is unknown or malformed, or
    /// [`DispatchError::Transport`] when the hand-off fails. Every error is
    /// also reported as a rejection.
    pub fn submit<T>(&self, line: &str, transport: &T) -> Result<(), DispatchError>
    where
        T: Transport + ?Sized,
    {
        let side = DispatchSide::Client;
        self.reporter.command_received(side, line);
        let outcome = self.forward(line, transport);
        if let Err(error) = &outcome {
            self.reporter.command_rejected(side, error);
        }
        outcome
    }

    /// Server path: validates `line`, runs its operation on `contract`, and
    /// delivers the result to `callback`.
    ///
    /// # Errors
    ///
    /// Returns a rejection when the line is unknown or malformed; neither
    /// `contract` nor `callback` is touched in that case.
    pub fn execute(
        &self,
        line: &str,
        contract: &dyn Contract,
        callback: &dyn Callback,
    ) -> Result<ResultValue, DispatchError> {
        let side = DispatchSide::Server;
        self.reporter.command_received(side, line);
        let outcome = self.run(line, contract, callback);
        if let Err(error) = &outcome {
            self.reporter.command_rejected(side, error);
        }
        outcome
    }

    fn forward<T>(&self, line: &str, transport: &T) -> Result<(), DispatchError>
    where
        T: Transport + ?Sized,
    {
        let side = DispatchSide::Client;
        let spec = self.check(line)?;
        self.reporter.command_validated(side, spec.name());

        debug!(
            target: DISPATCH_TARGET,
            command = spec.name(),
            "forwarding command line to server"
        );
        transport.send(line)?;
        self.reporter.command_dispatched(side, spec.name());
        Ok(())
    }

    fn run(
        &self,
        line: &str,
        contract: &dyn Contract,
        callback: &dyn Callback,
    ) -> Result<ResultValue, DispatchError> {
        let side = DispatchSide::Server;
        let raw = RawCommand::parse(line);
        let spec = lookup(raw.name())?;
        let args = decode(spec, raw.args())?;
        self.reporter.command_validated(side, spec.name());

        let result = spec.invoke_request(&args, contract)?;
        self.reporter.command_dispatched(side, spec.name());

        spec.invoke_response(result, callback)?;
        self.reporter.command_completed(side, spec.name(), result);
        Ok(result)
    }
}
