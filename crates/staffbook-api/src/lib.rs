//! # staffbook-api
//!
//! HTTP API server for Staffbook employee records.
//!
//! This crate provides:
//! - Five REST operations over `/employees` (list, get, create, update, delete)
//! - Uniform mapping of store failures onto HTTP status codes
//! - CORS and request tracing middleware
//! - [`ServerConfig`] read from flags and environment variables

#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;

pub use config::ServerConfig;
pub use error::{ApiError, Error, Result};
pub use routes::AppState;
pub use server::Server;
