//! Flutter-facing FFI surface for the employee roster.

pub mod api;
