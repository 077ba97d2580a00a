//! CLI module for shoestock - command-line flags for the interactive shell.

pub mod commands;

pub use commands::Cli;
