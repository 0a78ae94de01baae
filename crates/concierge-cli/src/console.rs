//! The console session: reads command lines, submits them through a
//! [`Client`], and prints the results the server calls back with.

use std::io::{BufRead, Write};
use std::process::ExitCode;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};

use concierge_config::Config;
use concierge_core::{Callback, Client, Dispatcher, ResultValue, Server, commands};
use tracing::warn;

use crate::AppError;
use crate::delivery::Delivery;
use crate::ledger::InMemoryLedger;
use crate::output::{ResolvedOutputFormat, ResultLine};

const CONSOLE_TARGET: &str = concat!(env!("CARGO_CRATE_NAME"), "::console");
const EXIT_WORDS: &[&str] = &["quit", "exit"];
const HELP_WORD: &str = "help";

/// Client-side callback that forwards each result to the console session.
///
/// The server may call back from its worker thread, so results travel over a
/// channel and are printed by the thread that owns stdout.
#[derive(Debug)]
pub(crate) struct ConsoleCallback {
    sender: Sender<ResultLine>,
}

impl ConsoleCallback {
    pub(crate) fn channel() -> (Self, Receiver<ResultLine>) {
        let (sender, receiver) = mpsc::channel();
        (Self { sender }, receiver)
    }

    fn deliver(&self, command: &'static str, result: ResultValue) {
        if self.sender.send(ResultLine { command, result }).is_err() {
            warn!(target: CONSOLE_TARGET, command, %result, "console closed before result arrived");
        }
    }
}

impl Callback for ConsoleCallback {
    fn on_request_flight(&self, booked: bool) {
        self.deliver("requestFlight", ResultValue::Boolean(booked));
    }

    fn on_check_flight(&self, available: bool) {
        self.deliver("checkFlight", ResultValue::Boolean(available));
    }

    fn on_deposit(&self, balance: i32) {
        self.deliver("deposit", ResultValue::Integer(balance));
    }

    fn on_withdraw(&self, balance: i32) {
        self.deliver("withdraw", ResultValue::Integer(balance));
    }
}

/// Writes one usage line per registered command.
pub(crate) fn write_command_list<W: Write>(stdout: &mut W) -> Result<(), AppError> {
    for spec in commands() {
        writeln!(stdout, "{}", spec.usage()).map_err(AppError::WriteOutput)?;
    }
    Ok(())
}

pub(crate) struct Session<'a, W: Write, E: Write> {
    client: Client<Delivery>,
    results: Receiver<ResultLine>,
    format: ResolvedOutputFormat,
    stdout: &'a mut W,
    stderr: &'a mut E,
}

impl<'a, W: Write, E: Write> Session<'a, W, E> {
    /// Wires a ledger-backed server to a console client.
    pub(crate) fn start(
        config: &Config,
        format: ResolvedOutputFormat,
        stdout: &'a mut W,
        stderr: &'a mut E,
    ) -> Result<Self, AppError> {
        Self::start_with_dispatcher(config, format, Dispatcher::new(), stdout, stderr)
    }

    /// Like [`Session::start`], with both sides sharing `dispatcher`.
    pub(crate) fn start_with_dispatcher(
        config: &Config,
        format: ResolvedOutputFormat,
        dispatcher: Dispatcher,
        stdout: &'a mut W,
        stderr: &'a mut E,
    ) -> Result<Self, AppError> {
        let (callback, results) = ConsoleCallback::channel();
        let server = Arc::new(Server::with_dispatcher(
            Arc::new(InMemoryLedger::from_config(config)),
            Arc::new(callback),
            dispatcher.clone(),
        ));
        let transport = Delivery::start(config.delivery(), server).map_err(AppError::StartServer)?;
        Ok(Self {
            client: Client::with_dispatcher(transport, dispatcher),
            results,
            format,
            stdout,
            stderr,
        })
    }

    /// Dispatches a single command line and reports whether it completed.
    pub(crate) fn run_single(mut self, line: &str) -> Result<ExitCode, AppError> {
        let outcome = self.submit(line)?;
        self.finish()?;
        Ok(outcome)
    }

    /// Dispatches every line of `input` until EOF or an exit word.
    pub(crate) fn run_interactive<R: BufRead>(mut self, input: R) -> Result<ExitCode, AppError> {
        for line in input.lines() {
            let line = line.map_err(AppError::ReadInput)?;
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            if EXIT_WORDS.contains(&word) {
                break;
            }
            if word == HELP_WORD {
                write_command_list(&mut *self.stdout)?;
                continue;
            }
            self.submit(&line)?;
        }
        self.finish()?;
        Ok(ExitCode::SUCCESS)
    }

    fn submit(&mut self, line: &str) -> Result<ExitCode, AppError> {
        let outcome = match self.client.submit(line) {
            Ok(()) => ExitCode::SUCCESS,
            Err(error) => {
                writeln!(self.stderr, "error: {error}").map_err(AppError::WriteOutput)?;
                u8::try_from(error.exit_status()).map_or(ExitCode::FAILURE, ExitCode::from)
            }
        };
        self.print_ready_results()?;
        Ok(outcome)
    }

    fn print_ready_results(&mut self) -> Result<(), AppError> {
        while let Ok(line) = self.results.try_recv() {
            let rendered = line.render(self.format).map_err(AppError::SerialiseResult)?;
            writeln!(self.stdout, "{rendered}").map_err(AppError::WriteOutput)?;
        }
        Ok(())
    }

    fn finish(mut self) -> Result<(), AppError> {
        self.client
            .transport()
            .finish()
            .map_err(AppError::StopServer)?;
        self.print_ready_results()?;
        self.stdout.flush().map_err(AppError::WriteOutput)
    }
}
