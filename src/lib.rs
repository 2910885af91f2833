//! Groundwork - project scaffolding from a remote template repository.
//!
//! Groundwork bootstraps a new project by downloading a template repository
//! from GitHub, extracting it into a fresh directory, and rewriting its
//! `package.json` so the project carries the requested name.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and the scaffolding command
//! - [`error`] - Error types and result aliases
//! - [`scaffold`] - The four-stage scaffolding pipeline
//! - [`shell`] - Executable probing and environment helpers
//! - [`ui`] - Spinners and terminal output
//!
//! # Example
//!
//! ```no_run
//! use groundwork::scaffold::{ProjectRequest, TemplateSource};
//!
//! let cwd = std::env::current_dir().unwrap();
//! let request = ProjectRequest::new("my-app", &cwd).unwrap();
//! let source = TemplateSource::default();
//! assert!(source.tarball_url().ends_with("/tar.gz/master"));
//! assert!(request.output_path.ends_with("my-app"));
//! ```

pub mod cli;
pub mod error;
pub mod scaffold;
pub mod shell;
pub mod ui;

pub use error::{GroundworkError, Result};
