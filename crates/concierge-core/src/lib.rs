//! Typed command dispatch between a requesting client and a serving resource
//! manager.
//!
//! A closed registry of named commands binds each command's textual argument
//! format to a typed [`Contract`] call on the server, and binds the typed
//! result back to a [`Callback`] method on the client. Command lines travel
//! as plain text:
//!
//! ```text
//! requestFlight 12 3
//! deposit 50
//! ```
//!
//! ## Flow
//!
//! 1. The [`Client`] splits a line, resolves the command by name, and checks
//!    the argument tokens against the command's signature. Valid lines are
//!    forwarded verbatim through a [`Transport`].
//! 2. The [`Server`] repeats the same checks, converts each token into its
//!    typed value, invokes the matching [`Contract`] method, and delivers the
//!    [`ResultValue`] to the matching [`Callback`] method.
//!
//! Unknown command names and malformed arguments are rejected with a
//! [`DispatchError`]; the `on_input_received` entry points report the
//! rejection through a [`DispatchReporter`] and discard the line.
//!
//! ## Delivery
//!
//! [`InlineTransport`] runs the server on the submitting thread.
//! [`QueuedTransport`] hands lines to a worker thread, so callbacks arrive
//! asynchronously and on a different thread from the submission.

mod capability;
mod client;
pub mod dispatch;
mod reporting;
mod server;
pub mod transport;

pub use capability::{Callback, Contract};
pub use client::Client;
pub use dispatch::{
    ArgKind, ArgValue, CommandSpec, DispatchError, Dispatcher, FormatIssue, RawCommand,
    ResultValue, commands, lookup,
};
pub use reporting::{DispatchReporter, DispatchSide, StructuredDispatchReporter};
pub use server::Server;
pub use transport::{InlineTransport, QueuedTransport, Transport, TransportError};

#[cfg(test)]
mod tests;
