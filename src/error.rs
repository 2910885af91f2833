//! Error types for Groundwork operations.
//!
//! This module defines [`GroundworkError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `GroundworkError` for pipeline failures that need distinct handling
//! - Use `anyhow::Error` (via `GroundworkError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Groundwork operations.
#[derive(Debug, Error)]
pub enum GroundworkError {
    /// Project name is missing or not usable as a directory name.
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    /// The template repository does not exist on the remote host.
    #[error("Repository {owner}/{repo} could not be found")]
    RepoNotFound { owner: String, repo: String },

    /// The metadata API could not be reached or returned an unexpected status.
    #[error("Failed to query repository metadata: {message}")]
    MetadataFetch { message: String },

    /// The target project directory already exists.
    #[error("Directory already exists: {path}")]
    DirectoryExists { path: PathBuf },

    /// Downloading or extracting the template archive failed.
    #[error("Failed to download template from {url}: {message}")]
    Download { url: String, message: String },

    /// The extracted project manifest is missing, unreadable, or malformed.
    #[error("Failed to configure manifest at {path}: {message}")]
    Manifest { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Groundwork operations.
pub type Result<T> = std::result::Result<T, GroundworkError>;
