//! Console runtime for the Concierge command dispatcher.
//!
//! The runtime loads configuration, installs telemetry, and wires an
//! [`InMemoryLedger`] server to a console client over the configured
//! transport. A command given on the command line is dispatched once;
//! otherwise commands are read from stdin until EOF or `quit`. Configuration
//! loading and IO streams can be substituted so the runtime is testable
//! without a process boundary.

use std::ffi::OsString;
use std::io::{BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;

mod cli;
mod config;
mod console;
mod delivery;
mod errors;
pub mod ledger;
pub mod output;
mod telemetry;

use cli::Cli;
use config::{ConfigArgumentSplit, split_config_arguments};
pub(crate) use config::{ConfigLoader, OrthoConfigLoader};
use console::{Session, write_command_list};
pub(crate) use errors::AppError;
pub use ledger::InMemoryLedger;
pub use output::{OutputFormat, ResolvedOutputFormat, ResultLine};

/// CLI flags recognised by the configuration loader.
///
/// Keep in step with the fields of `concierge_config::Config`.
const CONFIG_CLI_FLAGS: &[&str] = &[
    "--config-path",
    "--log-filter",
    "--log-format",
    "--delivery",
    "--opening-balance",
    "--flight-capacity",
];

/// Bundles the IO streams provided to the CLI runtime.
pub(crate) struct IoStreams<'a, R: BufRead, W: Write, E: Write> {
    stdin: R,
    stdout: &'a mut W,
    stderr: &'a mut E,
    stdout_is_terminal: bool,
}

impl<'a, R: BufRead, W: Write, E: Write> IoStreams<'a, R, W, E> {
    pub(crate) const fn new(
        stdin: R,
        stdout: &'a mut W,
        stderr: &'a mut E,
        stdout_is_terminal: bool,
    ) -> Self {
        Self {
            stdin,
            stdout,
            stderr,
            stdout_is_terminal,
        }
    }
}

struct CliRunner<'a, L: ConfigLoader> {
    loader: &'a L,
    install_telemetry: bool,
}

impl<'a, L: ConfigLoader> CliRunner<'a, L> {
    const fn new(loader: &'a L) -> Self {
        Self {
            loader,
            install_telemetry: true,
        }
    }

    #[cfg(test)]
    const fn without_telemetry(mut self) -> Self {
        self.install_telemetry = false;
        self
    }

    fn run<I, R, W, E>(&self, args: I, io: IoStreams<'_, R, W, E>) -> ExitCode
    where
        I: IntoIterator<Item = OsString>,
        R: BufRead,
        W: Write,
        E: Write,
    {
        let IoStreams {
            stdin,
            stdout,
            stderr,
            stdout_is_terminal,
        } = io;
        let args: Vec<OsString> = args.into_iter().collect();
        let split = split_config_arguments(&args);
        let cli_arguments = prepare_cli_arguments(&args, &split);

        let cli = match Cli::try_parse_from(cli_arguments) {
            Ok(cli) => cli,
            Err(error) => return report_parse_error(error, stdout, stderr),
        };

        let result = self.loader.load(&split.config_arguments).and_then(|config| {
            if self.install_telemetry {
                telemetry::initialise(&config)?;
            }

            if cli.list_commands {
                write_command_list(&mut *stdout)?;
                return Ok(ExitCode::SUCCESS);
            }

            let format = cli.output.resolve(stdout_is_terminal);
            let session = Session::start(&config, format, &mut *stdout, &mut *stderr)?;
            match cli.command_line() {
                Some(line) => session.run_single(&line),
                None => session.run_interactive(stdin),
            }
        });

        match result {
            Ok(exit_code) => exit_code,
            Err(error) => {
                let _ = writeln!(stderr, "{error}");
                ExitCode::FAILURE
            }
        }
    }
}

fn prepare_cli_arguments(args: &[OsString], split: &ConfigArgumentSplit) -> Vec<OsString> {
    let mut cli_arguments: Vec<OsString> = Vec::new();
    if let Some(first) = args.first() {
        cli_arguments.push(first.clone());
    }
    if let Some(rest) = args.get(split.command_start..) {
        cli_arguments.extend(rest.iter().cloned());
    }
    cli_arguments
}

fn report_parse_error<W: Write, E: Write>(
    error: clap::Error,
    stdout: &mut W,
    stderr: &mut E,
) -> ExitCode {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = write!(stdout, "{error}");
            ExitCode::SUCCESS
        }
        _ => {
            let _ = write!(stderr, "{}", AppError::CliUsage(error));
            ExitCode::from(2)
        }
    }
}

/// Runs the CLI using the provided arguments and IO handles.
///
/// Exits with `0` when every command completed, `1` when a single command
/// was rejected, and `2` on usage errors. Interactive sessions report
/// rejections on stderr and keep going.
#[must_use]
pub fn run<I, R, W, E>(
    args: I,
    stdin: R,
    stdout: &mut W,
    stderr: &mut E,
    stdout_is_terminal: bool,
) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    R: BufRead,
    W: Write,
    E: Write,
{
    let io = IoStreams::new(stdin, stdout, stderr, stdout_is_terminal);
    CliRunner::new(&OrthoConfigLoader).run(args, io)
}
