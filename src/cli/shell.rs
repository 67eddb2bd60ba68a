//! Line parsing for the interactive shell.

use crate::cli::parser::{AskArgs, ExportArgs, ForecastArgs, ListArgs, ReadingArgs};
use crate::errors::{AppError, AppResult};
use clap::{Parser, Subcommand};

/// One shell line. The first word is the command name.
#[derive(Parser, Debug)]
#[command(multicall = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub action: ShellAction,
}

#[derive(Subcommand, Debug)]
pub enum ShellAction {
    /// Record a new reading
    Add(ReadingArgs),
    /// Show the status of the latest reading
    Status,
    /// List the readings of the session
    List(ListArgs),
    /// Export the session readings
    Export(ExportArgs),
    /// Ask Gemini for a forecast
    Forecast(ForecastArgs),
    /// Ask Gemini a question
    Ask(AskArgs),
    /// Show or change the session location
    Location {
        /// New location (prints the current one when omitted)
        #[arg(num_args = 0.., trailing_var_arg = true)]
        name: Vec<String>,
    },
    /// Show what happened in this session
    Log,
    /// Leave the shell (the session readings are discarded)
    #[command(alias = "exit")]
    Quit,
}

/// Split a line into words. Single and double quotes group words;
/// a backslash escapes the next character outside single quotes.
pub fn split_line(line: &str) -> AppResult<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some('\''), '\'') => quote = None,
            (Some('"'), '"') => quote = None,
            (Some('"'), '\\') | (None, '\\') => {
                if let Some(next) = chars.next() {
                    current.push(next);
                    in_word = true;
                }
            }
            (Some(_), c) => current.push(c),
            (None, '\'') | (None, '"') => {
                quote = Some(c);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        return Err(AppError::Shell("unterminated quote".to_string()));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}
