//! Structured reporting of per-command lifecycle transitions.
//!
//! Every line handled by a [`Dispatcher`](crate::Dispatcher) moves through
//! `Received → Validated → Dispatched → Completed`, or ends at `Rejected`.
//! A [`DispatchReporter`] observes those transitions; the default
//! [`StructuredDispatchReporter`] records them as `tracing` events.

use std::sync::Arc;

use strum::Display;

use crate::dispatch::{DISPATCH_TARGET, DispatchError, ResultValue};

/// Which half of the round trip observed a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum DispatchSide {
    /// The submitting party, which validates and forwards lines.
    Client,
    /// The executing party, which runs operations and delivers results.
    Server,
}

/// Observer trait used to surface command lifecycle events.
pub trait DispatchReporter: Send + Sync {
    /// Invoked when a raw line arrives.
    fn command_received(&self, side: DispatchSide, line: &str);

    /// Invoked once the line resolves to a command with well-formed arguments.
    fn command_validated(&self, side: DispatchSide, command: &str);

    /// Invoked when the client forwards the line, or the server invokes the
    /// operation.
    fn command_dispatched(&self, side: DispatchSide, command: &str);

    /// Invoked after the server delivers the result to the callback.
    fn command_completed(&self, side: DispatchSide, command: &str, result: ResultValue);

    /// Invoked when the line is discarded.
    fn command_rejected(&self, side: DispatchSide, error: &DispatchError);
}

impl<T> DispatchReporter for Arc<T>
where
    T: DispatchReporter + ?Sized,
{
    fn command_received(&self, side: DispatchSide, line: &str) {
        (**self).command_received(side, line);
    }

    fn command_validated(&self, side: DispatchSide, command: &str) {
        (**self).command_validated(side, command);
    }

    fn command_dispatched(&self, side: DispatchSide, command: &str) {
        (**self).command_dispatched(side, command);
    }

    fn command_completed(&self, side: DispatchSide, command: &str, result: ResultValue) {
        (**self).command_completed(side, command, result);
    }

    fn command_rejected(&self, side: DispatchSide, error: &DispatchError) {
        (**self).command_rejected(side, error);
    }
}

/// Default reporter that records lifecycle events using `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StructuredDispatchReporter;

impl StructuredDispatchReporter {
    /// Builds a new reporter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DispatchReporter for StructuredDispatchReporter {
    fn command_received(&self, side: DispatchSide, line: &str) {
        tracing::debug!(
            target: DISPATCH_TARGET,
            event = "received",
            %side,
            line,
            "command line received"
        );
    }

    fn command_validated(&self, side: DispatchSide, command: &str) {
        tracing::debug!(
            target: DISPATCH_TARGET,
            event = "validated",
            %side,
            command,
            "command validated"
        );
    }

    fn command_dispatched(&self, side: DispatchSide, command: &str) {
        tracing::debug!(
            target: DISPATCH_TARGET,
            event = "dispatched",
            %side,
            command,
            "command dispatched"
        );
    }

    fn command_completed(&self, side: DispatchSide, command: &str, result: ResultValue) {
        tracing::debug!(
            target: DISPATCH_TARGET,
            event = "completed",
            %side,
            command,
            %result,
            "command completed"
        );
    }

    fn command_rejected(&self, side: DispatchSide, error: &DispatchError) {
        tracing::warn!(
            target: DISPATCH_TARGET,
            event = "rejected",
            %side,
            status = error.exit_status(),
            error = %error,
            "command rejected"
        );
    }
}
