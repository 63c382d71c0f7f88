//! FFI use-case API for the desktop UI shell.
//!
//! # Responsibility
//! - Expose one function per view action to Dart via FRB.
//! - Scope each call to one store open/close cycle.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Every response carries the rows reloaded after the action, so the UI
//!   never renders state that is not a projection of the store.

use log::warn;
use roster_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Employee, EmployeeId, EmployeeStore, InputFields, RecordViewController, RosterConfig,
    SqliteEmployeeRepository, ViewResult, WriteOutcome,
};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

static DB_PATH: OnceLock<PathBuf> = OnceLock::new();

type Controller<'conn> = RecordViewController<SqliteEmployeeRepository<'conn>>;

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), Path::new(log_dir.trim())) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// One displayed row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterRow {
    pub id: i64,
    pub name: String,
    pub age: Option<i64>,
    pub occupation: Option<String>,
}

/// Input field text produced by a select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterFields {
    pub name: String,
    pub age: String,
    pub occupation: String,
}

/// Response envelope shared by every roster call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterResponse {
    /// Whether the action succeeded.
    pub ok: bool,
    /// Human-readable message for diagnostics/UI.
    pub message: String,
    /// Id created, updated, deleted or selected by the action.
    pub id: Option<i64>,
    /// Full row list after the action, in store order.
    pub rows: Vec<RosterRow>,
    /// Field text to show after a select; `None` means "clear the fields".
    pub fields: Option<RosterFields>,
    /// False when the user can correct input and retry.
    pub fatal: bool,
}

struct ActionReport {
    message: String,
    id: Option<EmployeeId>,
    fields: Option<RosterFields>,
}

/// Loads all rows.
#[flutter_rust_bridge::frb(sync)]
pub fn roster_list() -> RosterResponse {
    list_at(&resolve_db_path())
}

/// Adds an employee from raw field text.
#[flutter_rust_bridge::frb(sync)]
pub fn roster_add(name: String, age: String, occupation: String) -> RosterResponse {
    add_at(&resolve_db_path(), &name, &age, &occupation)
}

/// Overwrites the selected employee with raw field text.
#[flutter_rust_bridge::frb(sync)]
pub fn roster_update(
    selected_id: Option<i64>,
    name: String,
    age: String,
    occupation: String,
) -> RosterResponse {
    update_at(&resolve_db_path(), selected_id, &name, &age, &occupation)
}

/// Deletes the selected employee.
#[flutter_rust_bridge::frb(sync)]
pub fn roster_delete(selected_id: Option<i64>) -> RosterResponse {
    delete_at(&resolve_db_path(), selected_id)
}

/// Resolves a displayed row into field text.
#[flutter_rust_bridge::frb(sync)]
pub fn roster_select(id: i64) -> RosterResponse {
    select_at(&resolve_db_path(), id)
}

fn list_at(db_path: &Path) -> RosterResponse {
    run_action(db_path, "roster_list", |view| {
        Ok(ActionReport {
            message: format!("Loaded {} employee(s).", view.rows().len()),
            id: None,
            fields: None,
        })
    })
}

fn add_at(db_path: &Path, name: &str, age: &str, occupation: &str) -> RosterResponse {
    run_action(db_path, "roster_add", |view| {
        let id = view.submit_add(name, age, occupation)?;
        Ok(ActionReport {
            message: "Employee added.".to_string(),
            id: Some(id),
            fields: None,
        })
    })
}

fn update_at(
    db_path: &Path,
    selected_id: Option<i64>,
    name: &str,
    age: &str,
    occupation: &str,
) -> RosterResponse {
    run_action(db_path, "roster_update", |view| {
        let outcome = view.submit_update(selected_id, name, age, occupation)?;
        Ok(ActionReport {
            message: write_message("updated", outcome),
            id: selected_id,
            fields: None,
        })
    })
}

fn delete_at(db_path: &Path, selected_id: Option<i64>) -> RosterResponse {
    run_action(db_path, "roster_delete", |view| {
        let outcome = view.submit_delete(selected_id)?;
        Ok(ActionReport {
            message: write_message("deleted", outcome),
            id: selected_id,
            fields: None,
        })
    })
}

fn select_at(db_path: &Path, id: i64) -> RosterResponse {
    run_action(db_path, "roster_select", |view| {
        view.on_select(id)?;
        Ok(ActionReport {
            message: "Employee selected.".to_string(),
            id: Some(id),
            fields: Some(to_roster_fields(view.fields())),
        })
    })
}

fn run_action(
    db_path: &Path,
    op: &str,
    action: impl FnOnce(&mut Controller<'_>) -> ViewResult<ActionReport>,
) -> RosterResponse {
    let store = match EmployeeStore::initialize(db_path) {
        Ok(store) => store,
        Err(err) => return RosterResponse::fatal(format!("{op} failed: {err}")),
    };

    let response = match RecordViewController::new(store.repository()) {
        Ok(mut view) => match action(&mut view) {
            Ok(report) => RosterResponse {
                ok: true,
                message: report.message,
                id: report.id,
                rows: to_roster_rows(view.rows()),
                fields: report.fields,
                fatal: false,
            },
            Err(err) => RosterResponse {
                ok: false,
                message: format!("{op} failed: {err}"),
                id: None,
                rows: to_roster_rows(view.rows()),
                fields: None,
                fatal: !err.is_recoverable(),
            },
        },
        Err(err) => RosterResponse::fatal(format!("{op} failed: {err}")),
    };

    if let Err(err) = store.close() {
        warn!("event=ffi_store_close module=ffi status=error op={op} error={err}");
    }
    response
}

impl RosterResponse {
    fn fatal(message: String) -> Self {
        Self {
            ok: false,
            message,
            id: None,
            rows: Vec::new(),
            fields: None,
            fatal: true,
        }
    }
}

fn write_message(verb: &str, outcome: WriteOutcome) -> String {
    match outcome {
        WriteOutcome::Applied => format!("Employee {verb}."),
        WriteOutcome::NoMatch => format!("No employee {verb}; it no longer exists."),
    }
}

fn resolve_db_path() -> PathBuf {
    DB_PATH
        .get_or_init(|| {
            let cwd = std::env::current_dir().unwrap_or_else(|_| std::env::temp_dir());
            RosterConfig::from_env(&cwd).db_path
        })
        .clone()
}

fn to_roster_rows(rows: &[Employee]) -> Vec<RosterRow> {
    rows.iter()
        .map(|row| RosterRow {
            id: row.id,
            name: row.name.clone(),
            age: row.age,
            occupation: row.occupation.clone(),
        })
        .collect()
}

fn to_roster_fields(fields: &InputFields) -> RosterFields {
    RosterFields {
        name: fields.name.clone(),
        age: fields.age.clone(),
        occupation: fields.occupation.clone(),
    }
}
