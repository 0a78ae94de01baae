//! Command resolution, argument marshalling, and invocation.
//!
//! This module owns the closed command registry and the two dispatch paths
//! that consume it:
//!
//! - the client path ([`Dispatcher::submit`]) checks a line's shape and
//!   forwards it untouched through a transport;
//! - the server path ([`Dispatcher::execute`]) checks the line again, converts
//!   its tokens into typed values, runs the bound [`Contract`] method, and
//!   delivers the result to the bound [`Callback`] method.
//!
//! ## Wire form
//!
//! A command line is a whitespace-separated token list whose first token is
//! the case-sensitive command name:
//!
//! ```text
//! requestFlight 12 3
//! ```
//!
//! ## Lifecycle
//!
//! Every line moves `Received → Validated → Dispatched → Completed`, or stops
//! at `Rejected` when the name is unknown or the arguments do not match the
//! command's signature. Rejected lines are discarded; there is no retry.
//!
//! [`Contract`]: crate::Contract
//! [`Callback`]: crate::Callback

mod codec;
mod errors;
mod registry;
mod request;
mod response;
mod router;

pub use self::codec::{ArgKind, ArgValue, FormatIssue, decode, decode_tokens, validate};
pub use self::errors::DispatchError;
pub use self::registry::{CommandSpec, RequestBinding, ResponseBinding, commands, lookup};
pub use self::request::RawCommand;
pub use self::response::ResultValue;
pub use self::router::{DISPATCH_TARGET, Dispatcher};
