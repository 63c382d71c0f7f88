//! Line command parsing for the terminal shell.

use roster_core::{EmployeeId, Field, ViewAction};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Forwarded to the view controller.
    Action(ViewAction),
    /// Re-render the table without touching the store.
    List,
    /// Show the input fields and selection.
    Fields,
    Tutorial,
    Help,
    Quit,
    /// Blank line.
    Nothing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    UnknownCommand(String),
    MissingArgument(&'static str),
    InvalidId(String),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCommand(word) => {
                write!(f, "unknown command `{word}`; type `help` for commands")
            }
            Self::MissingArgument(what) => write!(f, "missing argument: {what}"),
            Self::InvalidId(raw) => write!(f, "`{raw}` is not an employee id"),
        }
    }
}

impl Error for ParseError {}

/// Parses one line. Field commands keep the rest of the line verbatim
/// (minus the single separating space), so values may contain spaces.
pub fn parse_command(line: &str) -> Result<ShellCommand, ParseError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    if trimmed.trim().is_empty() {
        return Ok(ShellCommand::Nothing);
    }

    let (word, rest) = match trimmed.split_once(' ') {
        Some((word, rest)) => (word, rest),
        None => (trimmed, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "name" => set_field(Field::Name, rest),
        "age" => set_field(Field::Age, rest),
        "occupation" | "job" => set_field(Field::Occupation, rest),
        "select" => ShellCommand::Action(ViewAction::Select(parse_id(rest)?)),
        "unselect" => ShellCommand::Action(ViewAction::ClearSelection),
        "clear" => ShellCommand::Action(ViewAction::ClearFields),
        "add" => ShellCommand::Action(ViewAction::Add),
        "update" => ShellCommand::Action(ViewAction::Update),
        "delete" => ShellCommand::Action(ViewAction::Delete),
        "reload" => ShellCommand::Action(ViewAction::Reload),
        "list" | "ls" => ShellCommand::List,
        "fields" => ShellCommand::Fields,
        "tutorial" => ShellCommand::Tutorial,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        other => return Err(ParseError::UnknownCommand(other.to_string())),
    };
    Ok(command)
}

fn set_field(field: Field, value: &str) -> ShellCommand {
    ShellCommand::Action(ViewAction::SetField(field, value.to_string()))
}

fn parse_id(raw: &str) -> Result<EmployeeId, ParseError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ParseError::MissingArgument("employee id"));
    }
    raw.parse::<EmployeeId>()
        .map_err(|_| ParseError::InvalidId(raw.to_string()))
}
