//! Record view controller.
//!
//! # Responsibility
//! - Translate shell actions into single repository calls.
//! - Re-render the full displayed list from the store after every mutation.
//! - Own selection and input-field state for the presentation shell.
//!
//! # Invariants
//! - `rows` is replaced wholesale on reload; it is never patched in place.
//! - Reload drops the selection, matching a list widget that was repopulated.
//! - Failed submits leave store, rows, selection and fields untouched.
//! - Missing ids on update/delete are silent no-ops (`WriteOutcome::NoMatch`).

use crate::model::employee::{Employee, EmployeeDraft, EmployeeId};
use crate::repo::employee_repo::{EmployeeRepository, RepoError, WriteOutcome};
use crate::view::fields::{parse_age, Field, FieldState, InputFields};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ViewResult<T> = Result<T, ViewError>;

/// Errors surfaced to the presentation shell.
#[derive(Debug)]
pub enum ViewError {
    /// Field text failed type coercion; the action was aborted.
    InvalidInput { field: Field, value: String },
    /// Update/delete requested with no selected row.
    NoSelection,
    /// Select requested for an id that is not in the displayed list.
    NotDisplayed(EmployeeId),
    /// Store failure; treat as fatal for the session.
    Storage(RepoError),
}

impl ViewError {
    /// Returns whether the user can correct the input and retry.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Storage(_))
    }
}

impl Display for ViewError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, value } => {
                write!(f, "invalid {}: `{value}` is not an integer", field.label())
            }
            Self::NoSelection => write!(f, "no employee selected"),
            Self::NotDisplayed(id) => write!(f, "employee {id} is not in the displayed list"),
            Self::Storage(err) => write!(f, "storage error: {err}"),
        }
    }
}

impl Error for ViewError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ViewError {
    fn from(value: RepoError) -> Self {
        Self::Storage(value)
    }
}

/// Shell-issued action. Submit actions read the current fields and selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    SetField(Field, String),
    Select(EmployeeId),
    ClearSelection,
    ClearFields,
    Add,
    Update,
    Delete,
    Reload,
}

/// Result of a dispatched action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Added(EmployeeId),
    Updated(EmployeeId, WriteOutcome),
    Deleted(EmployeeId, WriteOutcome),
    Selected(EmployeeId),
    Reloaded(usize),
    InputChanged,
}

/// Displayed projection of the employee store plus input state.
pub struct RecordViewController<R: EmployeeRepository> {
    repo: R,
    rows: Vec<Employee>,
    selection: Option<EmployeeId>,
    fields: InputFields,
}

impl<R: EmployeeRepository> RecordViewController<R> {
    /// Creates a controller and performs the startup reload.
    pub fn new(repo: R) -> ViewResult<Self> {
        let mut controller = Self {
            repo,
            rows: Vec::new(),
            selection: None,
            fields: InputFields::default(),
        };
        controller.reload()?;
        Ok(controller)
    }

    /// Rows as of the last reload, in store order.
    pub fn rows(&self) -> &[Employee] {
        &self.rows
    }

    pub fn selection(&self) -> Option<EmployeeId> {
        self.selection
    }

    pub fn selected_row(&self) -> Option<&Employee> {
        let id = self.selection?;
        self.rows.iter().find(|row| row.id == id)
    }

    pub fn fields(&self) -> &InputFields {
        &self.fields
    }

    pub fn field_state(&self) -> FieldState {
        self.fields.state()
    }

    /// Manual entry into one field.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value);
    }

    pub fn clear_fields(&mut self) {
        self.fields.clear();
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Replaces the displayed rows with a fresh `fetch_all`.
    pub fn reload(&mut self) -> ViewResult<()> {
        let rows = self.repo.fetch_all_employees()?;
        self.rows = rows;
        self.selection = None;
        Ok(())
    }

    /// Copies a displayed record into the input fields and selects it.
    ///
    /// Unsaved input is overwritten. The store is not touched.
    pub fn on_select(&mut self, id: EmployeeId) -> ViewResult<()> {
        let row = self
            .rows
            .iter()
            .find(|row| row.id == id)
            .ok_or(ViewError::NotDisplayed(id))?;
        self.fields = InputFields::from_employee(row);
        self.selection = Some(id);
        Ok(())
    }

    /// Inserts a new record from raw field text.
    pub fn submit_add(&mut self, name: &str, age: &str, occupation: &str) -> ViewResult<EmployeeId> {
        let draft = build_draft(name, age, occupation)?;
        let id = self.repo.insert_employee(&draft)?;
        self.finish_mutation()?;
        info!("event=employee_add module=view status=ok id={id}");
        Ok(id)
    }

    /// Overwrites the selected record with raw field text.
    pub fn submit_update(
        &mut self,
        selection: Option<EmployeeId>,
        name: &str,
        age: &str,
        occupation: &str,
    ) -> ViewResult<WriteOutcome> {
        let id = require_selection(selection, "update")?;
        let draft = build_draft(name, age, occupation)?;
        let outcome = self.repo.update_employee(id, &draft)?;
        self.finish_mutation()?;
        info!(
            "event=employee_update module=view status=ok id={id} outcome={}",
            outcome_label(outcome)
        );
        Ok(outcome)
    }

    /// Deletes the selected record.
    pub fn submit_delete(&mut self, selection: Option<EmployeeId>) -> ViewResult<WriteOutcome> {
        let id = require_selection(selection, "delete")?;
        let outcome = self.repo.delete_employee(id)?;
        self.finish_mutation()?;
        info!(
            "event=employee_delete module=view status=ok id={id} outcome={}",
            outcome_label(outcome)
        );
        Ok(outcome)
    }

    /// Runs one shell action against the current fields and selection.
    pub fn dispatch(&mut self, action: ViewAction) -> ViewResult<ActionOutcome> {
        match action {
            ViewAction::SetField(field, value) => {
                self.set_field(field, value);
                Ok(ActionOutcome::InputChanged)
            }
            ViewAction::Select(id) => {
                self.on_select(id)?;
                Ok(ActionOutcome::Selected(id))
            }
            ViewAction::ClearSelection => {
                self.clear_selection();
                Ok(ActionOutcome::InputChanged)
            }
            ViewAction::ClearFields => {
                self.clear_fields();
                Ok(ActionOutcome::InputChanged)
            }
            ViewAction::Add => {
                let InputFields {
                    name,
                    age,
                    occupation,
                } = self.fields.clone();
                let id = self.submit_add(&name, &age, &occupation)?;
                Ok(ActionOutcome::Added(id))
            }
            ViewAction::Update => {
                let id = require_selection(self.selection, "update")?;
                let InputFields {
                    name,
                    age,
                    occupation,
                } = self.fields.clone();
                let outcome = self.submit_update(Some(id), &name, &age, &occupation)?;
                Ok(ActionOutcome::Updated(id, outcome))
            }
            ViewAction::Delete => {
                let id = require_selection(self.selection, "delete")?;
                let outcome = self.submit_delete(Some(id))?;
                Ok(ActionOutcome::Deleted(id, outcome))
            }
            ViewAction::Reload => {
                self.reload()?;
                Ok(ActionOutcome::Reloaded(self.rows.len()))
            }
        }
    }

    fn finish_mutation(&mut self) -> ViewResult<()> {
        self.reload()?;
        self.fields.clear();
        Ok(())
    }
}

fn require_selection(selection: Option<EmployeeId>, action: &str) -> ViewResult<EmployeeId> {
    selection.ok_or_else(|| {
        warn!("event=employee_{action} module=view status=rejected reason=no_selection");
        ViewError::NoSelection
    })
}

fn build_draft(name: &str, age: &str, occupation: &str) -> ViewResult<EmployeeDraft> {
    let age = parse_age(age).map_err(|_| {
        warn!("event=input_coerce module=view status=rejected field=age");
        ViewError::InvalidInput {
            field: Field::Age,
            value: age.to_string(),
        }
    })?;
    Ok(EmployeeDraft::new(name, Some(age), Some(occupation.to_string())))
}

fn outcome_label(outcome: WriteOutcome) -> &'static str {
    match outcome {
        WriteOutcome::Applied => "applied",
        WriteOutcome::NoMatch => "no_match",
    }
}
