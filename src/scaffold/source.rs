//! Template source configuration.
//!
//! The template repository is fixed, not user-supplied. Every field can be
//! overridden through `GROUNDWORK_*` environment variables so tests and
//! mirrors can redirect the endpoints without touching the CLI surface.

use std::env;

/// Where the template repository lives and how to reach it.
#[derive(Debug, Clone)]
pub struct TemplateSource {
    /// Account that owns the template repository.
    pub owner: String,
    /// Template repository name.
    pub repo: String,
    /// Base URL of the repository-metadata API.
    pub api_base: String,
    /// Base URL of the tarball download host.
    pub download_base: String,
    /// Ref whose tarball is downloaded.
    pub git_ref: String,
}

impl Default for TemplateSource {
    fn default() -> Self {
        Self {
            owner: "MitchPierias".to_string(),
            repo: "React-Electron-Boilerplate".to_string(),
            api_base: "https://api.github.com".to_string(),
            download_base: "https://codeload.github.com".to_string(),
            git_ref: "master".to_string(),
        }
    }
}

impl TemplateSource {
    /// Build the source from defaults plus any environment overrides.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            owner: env_or("GROUNDWORK_TEMPLATE_OWNER", defaults.owner),
            repo: env_or("GROUNDWORK_TEMPLATE_REPO", defaults.repo),
            api_base: env_or("GROUNDWORK_API_BASE", defaults.api_base),
            download_base: env_or("GROUNDWORK_DOWNLOAD_BASE", defaults.download_base),
            git_ref: env_or("GROUNDWORK_TEMPLATE_REF", defaults.git_ref),
        }
    }

    /// Metadata lookup endpoint for the template repository.
    pub fn metadata_url(&self) -> String {
        format!(
            "{}/repos/{}/{}",
            self.api_base.trim_end_matches('/'),
            self.owner,
            self.repo
        )
    }

    /// Tarball download endpoint for the configured ref.
    pub fn tarball_url(&self) -> String {
        format!(
            "{}/{}/{}/tar.gz/{}",
            self.download_base.trim_end_matches('/'),
            self.owner,
            self.repo,
            self.git_ref
        )
    }
}

fn env_or(key: &str, default: String) -> String {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_github() {
        let source = TemplateSource::default();

        assert_eq!(
            source.metadata_url(),
            "https://api.github.com/repos/MitchPierias/React-Electron-Boilerplate"
        );
        assert_eq!(
            source.tarball_url(),
            "https://codeload.github.com/MitchPierias/React-Electron-Boilerplate/tar.gz/master"
        );
    }

    #[test]
    fn trailing_slashes_are_trimmed() {
        let source = TemplateSource {
            api_base: "http://localhost:8080/".to_string(),
            download_base: "http://localhost:8080/".to_string(),
            ..TemplateSource::default()
        };

        assert!(source
            .metadata_url()
            .starts_with("http://localhost:8080/repos/"));
        assert!(!source.tarball_url().contains("//MitchPierias"));
    }

    #[test]
    fn tarball_url_names_the_ref() {
        let source = TemplateSource {
            git_ref: "main".to_string(),
            ..TemplateSource::default()
        };

        assert!(source.tarball_url().ends_with("/tar.gz/main"));
    }
}
