//! Repository existence check.
//!
//! Asks the code-hosting metadata API whether the template repository
//! exists. The metadata itself is only logged; the pipeline treats this
//! stage as an advisory existence confirmation.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;

use crate::error::{GroundworkError, Result};

use super::TemplateSource;

/// Looks up template repository metadata.
pub struct RepositoryLocator {
    client: Client,
    timeout: Duration,
}

/// Metadata returned by the repository lookup. Fields beyond these are
/// ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoMetadata {
    /// Repository name.
    pub name: String,
    /// `owner/name` form.
    pub full_name: String,
    /// Default branch, when the API reports one.
    #[serde(default)]
    pub default_branch: Option<String>,
    /// Repository description, when present.
    #[serde(default)]
    pub description: Option<String>,
}

impl RepositoryLocator {
    /// Create a locator with the default 30-second timeout.
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(30))
    }

    /// Create a locator with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .user_agent(concat!("groundwork/", env!("CARGO_PKG_VERSION")))
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
            timeout,
        }
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Confirm the template repository exists and return its metadata.
    ///
    /// A 404 means the repository does not exist ([`GroundworkError::RepoNotFound`]);
    /// any other failure (network, auth, rate-limit) is reported as
    /// [`GroundworkError::MetadataFetch`].
    pub fn locate(&self, source: &TemplateSource) -> Result<RepoMetadata> {
        let url = source.metadata_url();

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github+json")
            .send()
            .map_err(|e| GroundworkError::MetadataFetch {
                message: e.to_string(),
            })?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(GroundworkError::RepoNotFound {
                owner: source.owner.clone(),
                repo: source.repo.clone(),
            });
        }

        if !response.status().is_success() {
            return Err(GroundworkError::MetadataFetch {
                message: format!("HTTP {} fetching {}", response.status(), url),
            });
        }

        response.json().map_err(|e| GroundworkError::MetadataFetch {
            message: format!("invalid metadata response: {}", e),
        })
    }
}

impl Default for RepositoryLocator {
    fn default() -> Self {
        Self::new()
    }
}
