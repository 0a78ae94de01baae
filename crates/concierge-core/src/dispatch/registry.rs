//! The closed table of supported commands.
//!
//! Each [`CommandSpec`] pairs a command name and argument signature with two
//! plain function values: one that runs the operation against a
//! [`Contract`], and one that hands the result to a [`Callback`]. Every
//! binding fixes its own arity by matching on the argument slice, so the
//! table stays uniform regardless of how many arguments a command takes.
//!
//! The table is a process-wide constant; it is never mutated.

use std::fmt;

use super::codec::{ArgKind, ArgValue};
use super::errors::DispatchError;
use super::response::ResultValue;
use crate::capability::{Callback, Contract};

/// Runs a command's operation with already-typed arguments.
pub type RequestBinding = fn(&[ArgValue], &dyn Contract) -> Result<ResultValue, DispatchError>;

/// Delivers a command's result to the matching callback method.
pub type ResponseBinding = fn(ResultValue, &dyn Callback) -> Result<(), DispatchError>;

const REQUEST_FLIGHT: &str = "requestFlight";
const CHECK_FLIGHT: &str = "checkFlight";
const DEPOSIT: &str = "deposit";
const WITHDRAW: &str = "withdraw";

/// Registry entry describing one command.
pub struct CommandSpec {
    name: &'static str,
    signature: &'static [ArgKind],
    request: RequestBinding,
    response: ResponseBinding,
}

static REGISTRY: [CommandSpec; 4] = [
    CommandSpec::new(
        REQUEST_FLIGHT,
        &[ArgKind::Integer, ArgKind::Integer],
        request_flight,
        on_request_flight,
    ),
    CommandSpec::new(CHECK_FLIGHT, &[ArgKind::Integer], check_flight, on_check_flight),
    CommandSpec::new(DEPOSIT, &[ArgKind::Integer], deposit, on_deposit),
    CommandSpec::new(WITHDRAW, &[ArgKind::Integer], withdraw, on_withdraw),
];

impl CommandSpec {
    const fn new(
        name: &'static str,
        signature: &'static [ArgKind],
        request: RequestBinding,
        response: ResponseBinding,
    ) -> Self {
        Self {
            name,
            signature,
            request,
            response,
        }
    }

    /// Returns the command name as it appears on the wire.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the ordered argument kinds.
    #[must_use]
    pub const fn signature(&self) -> &'static [ArgKind] {
        self.signature
    }

    /// Returns the number of arguments the command takes.
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.signature.len()
    }

    /// Renders a one-line usage hint such as `deposit <integer>`.
    #[must_use]
    pub fn usage(&self) -> String {
        self.signature
            .iter()
            .fold(String::from(self.name), |mut usage, kind| {
                usage.push_str(" <");
                usage.push_str(&kind.to_string());
                usage.push('>');
                usage
            })
    }

    /// Runs the command's operation against `contract`.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Internal`] when `args` does not match the
    /// command's signature. Arguments produced by
    /// [`decode`](super::codec::decode) for this command always match.
    pub fn invoke_request(
        &self,
        args: &[ArgValue],
        contract: &dyn Contract,
    ) -> Result<ResultValue, DispatchError> {
        (self.request)(args, contract)
    }

    /// Delivers `result` to the command's callback method.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Internal`] when `result` is not the variant
    /// this command produces.
    pub fn invoke_response(
        &self,
        result: ResultValue,
        callback: &dyn Callback,
    ) -> Result<(), DispatchError> {
        (self.response)(result, callback)
    }
}

impl fmt::Debug for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandSpec")
            .field("name", &self.name)
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

/// Resolves a command by its exact, case-sensitive name.
///
/// # Errors
///
/// Returns [`DispatchError::UnknownCommand`] if no command has that name.
pub fn lookup(name: &str) -> Result<&'static CommandSpec, DispatchError> {
    REGISTRY
        .iter()
        .find(|spec| spec.name == name)
        .ok_or_else(|| DispatchError::unknown_command(name))
}

/// Iterates over every registered command in declaration order.
pub fn commands() -> impl Iterator<Item = &'static CommandSpec> {
    REGISTRY.iter()
}

fn request_flight(
    args: &[ArgValue],
    contract: &dyn Contract,
) -> Result<ResultValue, DispatchError> {
    match args {
        [ArgValue::Integer(id), ArgValue::Integer(num)] => {
            Ok(ResultValue::Boolean(contract.request_flight(*id, *num)))
        }
        _ => Err(DispatchError::argument_shape(REQUEST_FLIGHT, args.len())),
    }
}

fn check_flight(args: &[ArgValue], contract: &dyn Contract) -> Result<ResultValue, DispatchError> {
    let num = single_integer(CHECK_FLIGHT, args)?;
    Ok(ResultValue::Boolean(contract.check_flight(num)))
}

fn deposit(args: &[ArgValue], contract: &dyn Contract) -> Result<ResultValue, DispatchError> {
    let num = single_integer(DEPOSIT, args)?;
    Ok(ResultValue::Integer(contract.deposit(num)))
}

fn withdraw(args: &[ArgValue], contract: &dyn Contract) -> Result<ResultValue, DispatchError> {
    let num = single_integer(WITHDRAW, args)?;
    Ok(ResultValue::Integer(contract.withdraw(num)))
}

fn on_request_flight(result: ResultValue, callback: &dyn Callback) -> Result<(), DispatchError> {
    callback.on_request_flight(boolean_result(REQUEST_FLIGHT, result)?);
    Ok(())
}

fn on_check_flight(result: ResultValue, callback: &dyn Callback) -> Result<(), DispatchError> {
    callback.on_check_flight(boolean_result(CHECK_FLIGHT, result)?);
    Ok(())
}

fn on_deposit(result: ResultValue, callback: &dyn Callback) -> Result<(), DispatchError> {
    callback.on_deposit(integer_result(DEPOSIT, result)?);
    Ok(())
}

fn on_withdraw(result: ResultValue, callback: &dyn Callback) -> Result<(), DispatchError> {
    callback.on_withdraw(integer_result(WITHDRAW, result)?);
    Ok(())
}

fn single_integer(command: &str, args: &[ArgValue]) -> Result<i32, DispatchError> {
    match args {
        [ArgValue::Integer(value)] => Ok(*value),
        _ => Err(DispatchError::argument_shape(command, args.len())),
    }
}

fn boolean_result(command: &str, result: ResultValue) -> Result<bool, DispatchError> {
    match result {
        ResultValue::Boolean(value) => Ok(value),
        ResultValue::Integer(_) => Err(DispatchError::result_shape(command, result)),
    }
}

fn integer_result(command: &str, result: ResultValue) -> Result<i32, DispatchError> {
    match result {
        ResultValue::Integer(value) => Ok(value),
        ResultValue::Boolean(_) => Err(DispatchError::result_shape(command, result)),
    }
}
