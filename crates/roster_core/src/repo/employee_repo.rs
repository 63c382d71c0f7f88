//! Employee repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide the four single-statement operations over `employees`.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `fetch_all_employees` returns rows in creation order (`id ASC`).
//! - Each write is one statement; there is no multi-row transaction.

use crate::db::DbError;
use crate::model::employee::{Employee, EmployeeDraft, EmployeeId};
use log::{debug, warn};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const EMPLOYEE_SELECT_SQL: &str = "SELECT id, name, age, occupation FROM employees";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for employee persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => {
                write!(f, "invalid persisted employee data: {message}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Result of an id-addressed write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// A row with the id existed and was written.
    Applied,
    /// No row had the id; nothing changed.
    NoMatch,
}

impl WriteOutcome {
    fn from_changed(changed: usize) -> Self {
        if changed == 0 {
            Self::NoMatch
        } else {
            Self::Applied
        }
    }
}

/// Repository interface for employee CRUD operations.
pub trait EmployeeRepository {
    fn insert_employee(&self, draft: &EmployeeDraft) -> RepoResult<EmployeeId>;
    fn fetch_all_employees(&self) -> RepoResult<Vec<Employee>>;
    fn update_employee(&self, id: EmployeeId, draft: &EmployeeDraft) -> RepoResult<WriteOutcome>;
    fn delete_employee(&self, id: EmployeeId) -> RepoResult<WriteOutcome>;
}

/// SQLite-backed employee repository.
pub struct SqliteEmployeeRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEmployeeRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl EmployeeRepository for SqliteEmployeeRepository<'_> {
    fn insert_employee(&self, draft: &EmployeeDraft) -> RepoResult<EmployeeId> {
        self.conn.execute(
            "INSERT INTO employees (name, age, occupation) VALUES (?1, ?2, ?3);",
            params![draft.name.as_str(), draft.age, draft.occupation.as_deref()],
        )?;

        let id = self.conn.last_insert_rowid();
        debug!("event=employee_insert module=repo status=ok id={id}");
        Ok(id)
    }

    fn fetch_all_employees(&self) -> RepoResult<Vec<Employee>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{EMPLOYEE_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut employees = Vec::new();

        while let Some(row) = rows.next()? {
            employees.push(parse_employee_row(row)?);
        }

        debug!(
            "event=employee_fetch_all module=repo status=ok count={}",
            employees.len()
        );
        Ok(employees)
    }

    fn update_employee(&self, id: EmployeeId, draft: &EmployeeDraft) -> RepoResult<WriteOutcome> {
        let changed = self.conn.execute(
            "UPDATE employees
             SET name = ?1, age = ?2, occupation = ?3
             WHERE id = ?4;",
            params![
                draft.name.as_str(),
                draft.age,
                draft.occupation.as_deref(),
                id
            ],
        )?;

        let outcome = WriteOutcome::from_changed(changed);
        if outcome == WriteOutcome::NoMatch {
            warn!("event=employee_update module=repo status=no_match id={id}");
        }
        Ok(outcome)
    }

    fn delete_employee(&self, id: EmployeeId) -> RepoResult<WriteOutcome> {
        let changed = self
            .conn
            .execute("DELETE FROM employees WHERE id = ?1;", [id])?;

        let outcome = WriteOutcome::from_changed(changed);
        if outcome == WriteOutcome::NoMatch {
            warn!("event=employee_delete module=repo status=no_match id={id}");
        }
        Ok(outcome)
    }
}

fn parse_employee_row(row: &Row<'_>) -> RepoResult<Employee> {
    let id: EmployeeId = row.get("id")?;
    let name = row
        .get::<_, Option<String>>("name")?
        .ok_or_else(|| RepoError::InvalidData(format!("null name for id {id}")))?;

    Ok(Employee {
        id,
        name,
        age: row.get("age")?,
        occupation: row.get("occupation")?,
    })
}
