//! Staffbook Core: the employee record model and its validation rules.
//!
//! This crate is shared by the server and the client so that both sides
//! enforce exactly the same field rules. It has no internal Staffbook
//! dependencies.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`ids`]: The [`EmployeeId`] identifier
//! - [`model`]: [`Employee`], [`EmployeeFields`], and the [`EmployeeInput`] payload
//! - [`validation`]: Field rules and [`Violations`]

#![warn(clippy::all)]

pub mod error;
pub mod ids;
pub mod model;
pub mod validation;

mod proptests;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use ids::EmployeeId;
pub use model::{Employee, EmployeeFields, EmployeeInput};
pub use validation::{Field, Violation, ViolationKind, Violations, validate_input};
