//! # staffbook-cli
//!
//! Terminal front end for Staffbook employee records.
//!
//! This crate provides:
//! - [`cli::Cli`], the `staffbook` command line
//! - [`commands::run`], which drives a [`staffbook_client::App`] for one
//!   command and prints the result

#![warn(clippy::all)]

pub mod cli;
pub mod commands;
pub mod error;

pub use cli::{Cli, Command};
pub use error::{Error, Result};
