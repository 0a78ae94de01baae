//! CLI argument definitions for the Concierge console.

use clap::Parser;

use crate::output::OutputFormat;

/// Command-line interface for the Concierge command dispatcher.
#[derive(Parser, Debug)]
#[command(
    name = "concierge",
    version,
    about = "Dispatches flight and account commands to an in-process resource manager"
)]
pub(crate) struct Cli {
    /// Controls how command results are rendered.
    #[arg(long, value_enum, default_value_t = OutputFormat::Auto)]
    pub(crate) output: OutputFormat,
    /// Prints the supported commands with their argument kinds and exits.
    #[arg(long)]
    pub(crate) list_commands: bool,
    /// A single command line to dispatch, for example `deposit 50`. When
    /// omitted, commands are read from stdin one per line.
    #[arg(
        value_name = "COMMAND",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub(crate) command: Vec<String>,
}

impl Cli {
    /// Joins the positional tokens back into a command line, if any were given.
    pub(crate) fn command_line(&self) -> Option<String> {
        if self.command.is_empty() {
            None
        } else {
            Some(self.command.join(" "))
        }
    }
}
