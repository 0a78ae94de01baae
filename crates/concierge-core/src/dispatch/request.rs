//! Splitting of raw command lines.

/// A command line split into its name and positional argument tokens.
///
/// The value borrows from the line it was parsed from and lives only for the
/// duration of one dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCommand<'a> {
    name: &'a str,
    args: Vec<&'a str>,
}

impl<'a> RawCommand<'a> {
    /// Splits `line` on whitespace. The first token is the command name; a
    /// blank line yields an empty name and no arguments.
    #[must_use]
    pub fn parse(line: &'a str) -> Self {
        let mut tokens = line.split_whitespace();
        let name = tokens.next().unwrap_or_default();
        Self {
            name,
            args: tokens.collect(),
        }
    }

    /// Returns the command name token.
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }

    /// Returns the positional argument tokens in order.
    #[must_use]
    pub fn args(&self) -> &[&'a str] {
        &self.args
    }
}
