//! Command-line interface for Groundwork.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and the scaffolding command implementation.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - The scaffolding command

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::{CommandResult, CreateCommand};
