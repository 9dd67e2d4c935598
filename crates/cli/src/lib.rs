//! Command-line front end: parses orders, runs them on a standard line and
//! renders the results.

pub mod commands;
pub mod render;

pub use commands::{Cli, Command, run};
