//! # staffbook-client
//!
//! Client library for Staffbook employee records.
//!
//! This crate provides:
//! - [`EmployeeApi`] and its HTTP implementation [`HttpEmployeeApi`]
//! - [`AppState`] with pure [`Action`] transitions
//! - [`App`], which turns user intents into requests and state changes
//! - Text components: [`EmployeeForm`], [`EmployeeTable`], [`EmployeeViewDialog`]

#![warn(clippy::all)]

pub mod app;
pub mod client;
pub mod error;
pub mod form;
pub mod state;
pub mod table;
pub mod view;

pub use app::{App, Confirm};
pub use client::{EmployeeApi, HttpEmployeeApi};
pub use error::{Error, Result};
pub use form::{EmployeeForm, FieldErrors};
pub use state::{Action, AppState, FormMode, FormState, Mutation, Notification, Severity};
pub use table::{EmployeeTable, SortDirection, SortOrder};
pub use view::EmployeeViewDialog;
