//! Record view controller and its input field group.
//!
//! # Responsibility
//! - Hold the displayed projection of the store and the user's input fields.
//! - Route shell actions to exactly one repository call each.
//!
//! # Invariants
//! - Displayed rows equal the store contents at the last reload.
//! - Every successful mutation is followed by a full reload.

pub mod controller;
pub mod fields;

pub use controller::{ActionOutcome, RecordViewController, ViewAction, ViewError, ViewResult};
pub use fields::{parse_age, Field, FieldState, InputFields};
