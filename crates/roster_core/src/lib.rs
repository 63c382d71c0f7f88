//! Core domain logic for the employee roster.
//! This crate is the single source of truth for record invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod store;
pub mod view;

pub use config::RosterConfig;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::employee::{Employee, EmployeeDraft, EmployeeId};
pub use repo::employee_repo::{
    EmployeeRepository, RepoError, RepoResult, SqliteEmployeeRepository, WriteOutcome,
};
pub use store::{EmployeeStore, DEFAULT_DB_FILE_NAME};
pub use view::{
    parse_age, ActionOutcome, Field, FieldState, InputFields, RecordViewController, ViewAction,
    ViewError, ViewResult,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
