//! CLI entrypoint for the Concierge command dispatcher.
//!
//! The binary delegates to [`concierge_cli::run`], which loads configuration,
//! wires a client to an in-process server, and dispatches either the command
//! given on the command line or every line read from stdin.

use std::io::{self, IsTerminal, StderrLock, StdoutLock};
use std::process::ExitCode;

fn main() -> ExitCode {
    let stdout_is_terminal = io::stdout().is_terminal();
    let stdin = io::stdin().lock();
    let mut stdout: StdoutLock<'_> = io::stdout().lock();
    let mut stderr: StderrLock<'_> = io::stderr().lock();
    concierge_cli::run(
        std::env::args_os(),
        stdin,
        &mut stdout,
        &mut stderr,
        stdout_is_terminal,
    )
}
