//! Command-line interface for Nanny.
//!
//! - [`args`] - Argument definitions using clap derive macros

pub mod args;

pub use args::{parse_package_name, Cli};
