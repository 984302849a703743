//! Command-line parsing for the interactive shell.

use thiserror::Error;

/// Help listing shown by the `help` command.
pub const HELP_TEXT: &str = "\
commands:
  add <text>     add a task
  edit <n>       edit task n
  toggle <n>     mark task n done or not done
  delete <n>     delete task n (alias: rm)
  all            mark all done, or all not done when everything is done
  list           show the list
  help           show this help
  quit           leave (alias: exit)";

/// A parsed shell command.
///
/// Row positions are one-based, as displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Empty input line.
    Blank,
    /// Submit new task text, kept verbatim.
    Add(String),
    /// Edit the task at a position.
    Edit(usize),
    /// Toggle the task at a position.
    Toggle(usize),
    /// Delete the task at a position.
    Delete(usize),
    /// Toggle every task.
    ToggleAll,
    /// Re-render the list.
    List,
    /// Show the help listing.
    Help,
    /// End the session.
    Quit,
}

/// Errors raised while parsing a command line.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    /// The command word is not recognised.
    #[error("unknown command '{0}'")]
    Unknown(String),

    /// A row command was given no position.
    #[error("'{0}' needs a task number")]
    MissingPosition(&'static str),

    /// A command that takes no arguments was given some.
    #[error("'{0}' takes no arguments")]
    UnexpectedArguments(&'static str),

    /// The position is not a positive integer.
    #[error("'{0}' is not a task number")]
    InvalidPosition(String),
}

impl Command {
    /// Parses one input line.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError`] for unknown commands and malformed
    /// positions.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let trimmed = line.trim_end_matches(['\r', '\n']).trim_start();
        let (word, rest) = trimmed
            .split_once(char::is_whitespace)
            .unwrap_or((trimmed, ""));

        match word.to_ascii_lowercase().as_str() {
            "" => Ok(Self::Blank),
            "add" => Ok(Self::Add(rest.to_owned())),
            "edit" => parse_position("edit", rest).map(Self::Edit),
            "toggle" => parse_position("toggle", rest).map(Self::Toggle),
            "delete" | "rm" => parse_position("delete", rest).map(Self::Delete),
            "all" => no_arguments("all", rest).map(|()| Self::ToggleAll),
            "list" | "ls" => no_arguments("list", rest).map(|()| Self::List),
            "help" | "?" => no_arguments("help", rest).map(|()| Self::Help),
            "quit" | "exit" => no_arguments("quit", rest).map(|()| Self::Quit),
            _ => Err(CommandError::Unknown(word.to_owned())),
        }
    }
}

fn no_arguments(command: &'static str, rest: &str) -> Result<(), CommandError> {
    if rest.trim().is_empty() {
        Ok(())
    } else {
        Err(CommandError::UnexpectedArguments(command))
    }
}

fn parse_position(command: &'static str, rest: &str) -> Result<usize, CommandError> {
    let raw = rest.trim();
    if raw.is_empty() {
        return Err(CommandError::MissingPosition(command));
    }
    match raw.parse::<usize>() {
        Ok(position) if position > 0 => Ok(position),
        _ => Err(CommandError::InvalidPosition(raw.to_owned())),
    }
}
