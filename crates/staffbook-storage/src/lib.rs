//! # staffbook-storage
//!
//! Document store for employee records.
//!
//! This crate provides:
//! - The [`EmployeeStore`] trait every backend implements
//! - [`MemoryStore`], an in-process backend for tests and throwaway servers
//! - [`RedbStore`], an embedded on-disk document store built on redb
//! - [`StoreConfig`] and [`open_store`] to pick a backend from a
//!   connection address such as `memory://` or `redb://data/staffbook.redb`

#![warn(clippy::all)]

pub mod config;
pub mod database;
pub mod error;
pub mod memory;
pub mod traits;

pub use config::{StoreConfig, open_store};
pub use database::RedbStore;
pub use error::{Error, Result};
pub use memory::MemoryStore;
pub use traits::EmployeeStore;
