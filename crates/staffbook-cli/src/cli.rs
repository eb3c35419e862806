//! Command-line definitions.

use std::time::Duration;

use clap::{Parser, Subcommand};
use staffbook_client::client::{API_URL_ENV, DEFAULT_API_URL};
use staffbook_client::{SortDirection, SortOrder};
use staffbook_core::{EmployeeId, Field};

/// Staffbook: manage employee records from the terminal
#[derive(Parser, Debug)]
#[command(name = "staffbook")]
#[command(about = "Manage Staffbook employee records", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Employee collection URL of the API
    #[arg(long, env = API_URL_ENV, default_value = DEFAULT_API_URL, global = true)]
    pub api_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 10, global = true)]
    pub timeout: u64,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

/// Employee commands.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Show the employee grid
    List {
        /// Column to sort by
        #[arg(long, value_parser = parse_field)]
        sort: Option<Field>,

        /// Sort descending
        #[arg(long, requires = "sort")]
        desc: bool,

        /// Page to show, starting at 1
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
        page: u64,
    },

    /// Show one employee's details
    Show {
        /// Employee id
        id: EmployeeId,
    },

    /// Add an employee
    Add {
        /// Full name
        #[arg(long)]
        name: String,
        /// Email address
        #[arg(long)]
        email: String,
        /// Job title
        #[arg(long)]
        position: String,
        /// Salary
        #[arg(long, allow_hyphen_values = true)]
        salary: String,
    },

    /// Edit an employee; unspecified fields keep their current value
    Edit {
        /// Employee id
        id: EmployeeId,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New email address
        #[arg(long)]
        email: Option<String>,
        /// New job title
        #[arg(long)]
        position: Option<String>,
        /// New salary
        #[arg(long, allow_hyphen_values = true)]
        salary: Option<String>,
    },

    /// Delete an employee
    Delete {
        /// Employee id
        id: EmployeeId,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

impl Command {
    /// Sort order requested by `list`, if any.
    pub fn sort_order(&self) -> Option<SortOrder> {
        match self {
            Command::List {
                sort: Some(field),
                desc,
                ..
            } => Some(SortOrder {
                field: *field,
                direction: if *desc {
                    SortDirection::Descending
                } else {
                    SortDirection::Ascending
                },
            }),
            _ => None,
        }
    }
}

fn parse_field(s: &str) -> Result<Field, String> {
    s.parse()
}
