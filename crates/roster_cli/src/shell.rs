//! Interactive command loop bridging stdin lines to the view controller.
//!
//! # Invariants
//! - Each line runs to completion before the next is read.
//! - Recoverable view errors are reported and the loop continues.
//! - Storage errors end the loop and are returned to the caller.

use crate::command::{parse_command, ShellCommand};
use crate::render::{write_fields, write_table};
use crate::tutorial::write_tutorial;
use log::error;
use roster_core::{
    ActionOutcome, EmployeeRepository, RecordViewController, ViewError, WriteOutcome,
};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Commands:
  list                 show the employee table
  reload               re-read the table from the store
  select <id>          load a row into the input fields
  unselect             drop the current selection
  name|age|occupation <text>
                       set one input field
  fields               show the input fields
  clear                empty the input fields
  add                  add an employee from the input fields
  update               overwrite the selected employee
  delete               delete the selected employee
  tutorial             show the tutorial
  help                 show this text
  quit                 close the store and exit";

#[derive(Debug)]
pub enum ShellError {
    Io(io::Error),
    Storage(ViewError),
}

impl Display for ShellError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "terminal I/O failed: {err}"),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ShellError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<io::Error> for ShellError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

/// Runs commands from `input` until `quit` or end of input.
pub fn run_shell<R, I, W>(
    view: &mut RecordViewController<R>,
    input: I,
    out: &mut W,
) -> Result<(), ShellError>
where
    R: EmployeeRepository,
    I: BufRead,
    W: Write,
{
    write_table(out, view.rows(), view.selection())?;
    prompt(out)?;

    for line in input.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "error: {err}")?;
                prompt(out)?;
                continue;
            }
        };

        match command {
            ShellCommand::Quit => return Ok(()),
            ShellCommand::Nothing => {}
            ShellCommand::List => write_table(out, view.rows(), view.selection())?,
            ShellCommand::Fields => write_fields(out, view.fields(), view.selection())?,
            ShellCommand::Tutorial => write_tutorial(out)?,
            ShellCommand::Help => writeln!(out, "{HELP}")?,
            ShellCommand::Action(action) => match view.dispatch(action) {
                Ok(outcome) => report(out, view, outcome)?,
                Err(err) if err.is_recoverable() => writeln!(out, "error: {err}")?,
                Err(err) => {
                    error!("event=shell_action module=cli status=error error={err}");
                    return Err(ShellError::Storage(err));
                }
            },
        }
        prompt(out)?;
    }

    Ok(())
}

fn report<R, W>(
    out: &mut W,
    view: &RecordViewController<R>,
    outcome: ActionOutcome,
) -> io::Result<()>
where
    R: EmployeeRepository,
    W: Write,
{
    match outcome {
        ActionOutcome::InputChanged => return Ok(()),
        ActionOutcome::Selected(_) => return write_fields(out, view.fields(), view.selection()),
        ActionOutcome::Added(id) => writeln!(out, "added employee {id}")?,
        ActionOutcome::Updated(id, WriteOutcome::Applied) => {
            writeln!(out, "updated employee {id}")?
        }
        ActionOutcome::Deleted(id, WriteOutcome::Applied) => {
            writeln!(out, "deleted employee {id}")?
        }
        ActionOutcome::Updated(id, WriteOutcome::NoMatch)
        | ActionOutcome::Deleted(id, WriteOutcome::NoMatch) => {
            writeln!(out, "employee {id} no longer exists; nothing changed")?
        }
        ActionOutcome::Reloaded(_) => {}
    }
    write_table(out, view.rows(), view.selection())
}

fn prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::run_shell;
    use roster_core::db::open_db_in_memory;
    use roster_core::{RecordViewController, SqliteEmployeeRepository};

    fn run(script: &str) -> (String, Vec<roster_core::Employee>) {
        let conn = open_db_in_memory().unwrap();
        let mut view = RecordViewController::new(SqliteEmployeeRepository::new(&conn)).unwrap();
        let mut out = Vec::new();
        run_shell(&mut view, script.as_bytes(), &mut out).unwrap();
        (String::from_utf8(out).unwrap(), view.rows().to_vec())
    }

    #[test]
    fn scripted_session_adds_and_updates() {
        let (text, rows) = run("name Alice\nage 30\noccupation Engineer\nadd\n\
             select 1\nage 31\noccupation Senior Engineer\nupdate\nquit\nadd\n");

        assert!(text.contains("added employee 1"));
        assert!(text.contains("updated employee 1"));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].age, Some(31));
        assert_eq!(rows[0].occupation.as_deref(), Some("Senior Engineer"));
    }

    #[test]
    fn recoverable_errors_do_not_end_the_session() {
        let (text, rows) = run("name Bob\nage thirty\nadd\ndelete\nbogus\nage 40\nadd\n");

        assert!(text.contains("error: invalid age: `thirty` is not an integer"));
        assert!(text.contains("error: no employee selected"));
        assert!(text.contains("error: unknown command `bogus`"));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Bob");
        assert_eq!(rows[0].age, Some(40));
    }

    #[test]
    fn tutorial_command_prints_walkthrough_without_touching_rows() {
        let (text, rows) = run("tutorial\n");

        assert!(text.contains("Step 1: Setting up the database"));
        assert!(text.contains("CREATE TABLE IF NOT EXISTS employees"));
        assert!(rows.is_empty());
    }
}
