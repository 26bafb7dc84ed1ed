//! Petz CLI library.
//!
//! Command-line access to the lineage engine: open a registry database and
//! print a pet profile or pedigree as a table or JSON.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use error::{CliError, Result};
pub use output::{Formatter, OutputFormat};
