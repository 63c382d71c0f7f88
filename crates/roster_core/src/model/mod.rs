//! Domain model for employee records.
//!
//! # Invariants
//! - Every record is identified by a store-assigned `EmployeeId`.
//! - Deletion is a hard delete; ids are never reused.

pub mod employee;
