//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;

/// Groundwork - scaffold a new project from the template repository.
#[derive(Debug, Parser)]
#[command(name = "groundwork")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Name of the project to create
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Project name (alternative to the positional argument)
    #[arg(long = "name", value_name = "NAME", conflicts_with = "name")]
    pub name_flag: Option<String>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

impl Cli {
    /// Resolve the project name from the flag or the positional argument.
    ///
    /// The flag takes precedence. Returns `None` when neither resolves to a
    /// non-empty string, which callers treat as a usage error.
    pub fn project_name(&self) -> Option<String> {
        self.name_flag
            .as_deref()
            .or(self.name.as_deref())
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(String::from)
    }
}
