//! Static in-app tutorial: a step-by-step walkthrough of how the roster is
//! built, with excerpts of its own source.
//!
//! Read-only content: it takes nothing from the store and returns nothing.

use std::io::{self, Write};

const TITLE: &str = "Tutorial: building an employee roster on SQLite";

/// One tutorial step: prose bullets followed by an optional code excerpt.
pub struct TutorialStep {
    pub title: &'static str,
    pub notes: &'static [&'static str],
    pub snippet: Option<&'static str>,
}

pub const STEPS: &[TutorialStep] = &[
    TutorialStep {
        title: "Setting up the database",
        notes: &[
            "The schema lives in `roster_core/src/db/migrations/0001_employees.sql`.",
            "`open_db` applies it once and records the version in `PRAGMA user_version`.",
            "`IF NOT EXISTS` lets an existing database file keep its rows.",
        ],
        snippet: Some(include_str!(
            "../../roster_core/src/db/migrations/0001_employees.sql"
        )),
    },
    TutorialStep {
        title: "Owning the connection",
        notes: &[
            "`EmployeeStore` holds the one connection for the whole session.",
            "`close` consumes the store, so nothing can touch it afterwards.",
        ],
        snippet: Some(
            "pub fn initialize(location: impl AsRef<Path>) -> DbResult<Self> {
    let location = location.as_ref();
    let conn = open_db(location)?;
    Ok(Self {
        conn,
        location: Some(location.to_path_buf()),
    })
}",
        ),
    },
    TutorialStep {
        title: "Writing the repository",
        notes: &[
            "Each operation is one parameterized statement.",
            "Update and delete report `WriteOutcome::NoMatch` for a missing id instead of failing.",
        ],
        snippet: Some(
            "fn insert_employee(&self, draft: &EmployeeDraft) -> RepoResult<EmployeeId> {
    self.conn.execute(
        \"INSERT INTO employees (name, age, occupation) VALUES (?1, ?2, ?3);\",
        params![draft.name.as_str(), draft.age, draft.occupation.as_deref()],
    )?;
    Ok(self.conn.last_insert_rowid())
}",
        ),
    },
    TutorialStep {
        title: "Loading the list",
        notes: &[
            "`reload` replaces every displayed row with a fresh fetch.",
            "It runs at startup and after every add, update and delete.",
        ],
        snippet: Some(
            "pub fn reload(&mut self) -> ViewResult<()> {
    let rows = self.repo.fetch_all_employees()?;
    self.rows = rows;
    self.selection = None;
    Ok(())
}",
        ),
    },
    TutorialStep {
        title: "Adding, updating and deleting",
        notes: &[
            "Age must parse as a whole number; anything else, blank included, is rejected.",
            "A rejected action leaves the store and the typed input untouched.",
            "`update` and `delete` need a selected row.",
        ],
        snippet: Some(
            "pub fn submit_add(&mut self, name: &str, age: &str, occupation: &str) -> ViewResult<EmployeeId> {
    let draft = build_draft(name, age, occupation)?;
    let id = self.repo.insert_employee(&draft)?;
    self.finish_mutation()?;
    Ok(id)
}",
        ),
    },
    TutorialStep {
        title: "Selecting a row",
        notes: &[
            "`select <id>` copies the row into the input fields, replacing anything typed.",
            "Edit a field with `name`, `age` or `occupation`, then run `update`.",
        ],
        snippet: Some(
            "pub fn on_select(&mut self, id: EmployeeId) -> ViewResult<()> {
    let row = self
        .rows
        .iter()
        .find(|row| row.id == id)
        .ok_or(ViewError::NotDisplayed(id))?;
    self.fields = InputFields::from_employee(row);
    self.selection = Some(id);
    Ok(())
}",
        ),
    },
    TutorialStep {
        title: "Wiring the shell",
        notes: &[
            "Every input line becomes one `ViewAction` handed to `dispatch`.",
            "Input errors are printed and the session continues; storage errors end it.",
            "`quit` closes the database and exits.",
        ],
        snippet: Some(
            "ShellCommand::Action(action) => match view.dispatch(action) {
    Ok(outcome) => report(out, view, outcome)?,
    Err(err) if err.is_recoverable() => writeln!(out, \"error: {err}\")?,
    Err(err) => return Err(ShellError::Storage(err)),
},",
        ),
    },
];

/// Writes the title, then each numbered step with its notes and indented code.
pub fn write_tutorial<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{TITLE}")?;
    writeln!(out)?;
    for (index, step) in STEPS.iter().enumerate() {
        writeln!(out, "Step {}: {}", index + 1, step.title)?;
        for note in step.notes {
            writeln!(out, "- {note}")?;
        }
        if let Some(snippet) = step.snippet {
            writeln!(out)?;
            for line in snippet.trim_end().lines() {
                writeln!(out, "    {line}")?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{write_tutorial, STEPS};

    fn rendered() -> String {
        let mut out = Vec::new();
        write_tutorial(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn steps_are_numbered_in_order_with_notes() {
        let text = rendered();
        for (index, step) in STEPS.iter().enumerate() {
            assert!(!step.notes.is_empty(), "step `{}` has no notes", step.title);
            assert!(text.contains(&format!("Step {}: {}", index + 1, step.title)));
        }
    }

    #[test]
    fn first_step_shows_the_real_schema_indented() {
        let text = rendered();
        assert!(text.contains("    CREATE TABLE IF NOT EXISTS employees ("));
        assert!(text.contains("name TEXT NOT NULL"));
    }

    #[test]
    fn tutorial_covers_every_mutating_command_and_blank_age_rule() {
        let text = rendered();
        for command in ["`update`", "`delete`", "`select <id>`", "blank included"] {
            assert!(text.contains(command), "missing {command}");
        }
    }
}
