//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQLite query details from view/business orchestration.
//!
//! # Invariants
//! - Update/delete against a missing id is reported as
//!   `WriteOutcome::NoMatch`, never as an error.

pub mod employee_repo;
