//! Package manager detection.
//!
//! An explicit ordered candidate list is probed by running each
//! executable's version query inside the project directory; the first one
//! that responds wins. Detection is advisory: it only shapes the final
//! instructional message.

use std::path::Path;

use crate::shell::probe_version;

/// A package manager the scaffolded project can be driven with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Yarn,
}

/// Probe order: npm is the default choice, yarn the alternative.
pub const CANDIDATES: [PackageManager; 2] = [PackageManager::Npm, PackageManager::Yarn];

impl PackageManager {
    /// Executable name.
    pub fn command(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
        }
    }

    /// Install-and-start command sequence for the final message.
    pub fn bootstrap_command(&self) -> &'static str {
        match self {
            Self::Npm => "npm install && npm start",
            Self::Yarn => "yarn && yarn start",
        }
    }

    /// Where to get the manager when it is missing.
    pub fn install_url(&self) -> &'static str {
        match self {
            Self::Npm => "https://www.npmjs.com/get-npm",
            Self::Yarn => "https://yarnpkg.com/lang/en/docs/install",
        }
    }
}

/// A package manager that answered its version probe.
#[derive(Debug, Clone)]
pub struct DetectedManager {
    /// Which manager responded.
    pub manager: PackageManager,
    /// Version reported by the probe, when one could be parsed.
    pub version: Option<String>,
}

/// Probe the candidate list inside `project_dir`; first responder wins.
pub fn detect_package_manager(project_dir: &Path) -> Option<DetectedManager> {
    let commands: Vec<&str> = CANDIDATES.iter().map(|m| m.command()).collect();
    let (index, version) = first_responding(&commands, project_dir)?;

    Some(DetectedManager {
        manager: CANDIDATES[index],
        version,
    })
}

/// Run the version probe over an ordered command list, stopping at the
/// first executable that responds.
fn first_responding(commands: &[&str], cwd: &Path) -> Option<(usize, Option<String>)> {
    for (index, command) in commands.iter().enumerate() {
        match probe_version(command, cwd) {
            Some(version) => {
                tracing::debug!("Package manager probe: {} responded", command);
                return Some((index, version));
            }
            None => tracing::debug!("Package manager probe: {} not available", command),
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_order_is_npm_then_yarn() {
        assert_eq!(CANDIDATES, [PackageManager::Npm, PackageManager::Yarn]);
    }

    #[test]
    fn npm_commands() {
        assert_eq!(PackageManager::Npm.command(), "npm");
        assert_eq!(
            PackageManager::Npm.bootstrap_command(),
            "npm install && npm start"
        );
    }

    #[test]
    fn yarn_commands() {
        assert_eq!(PackageManager::Yarn.command(), "yarn");
        assert_eq!(PackageManager::Yarn.bootstrap_command(), "yarn && yarn start");
    }

    #[test]
    fn install_urls_point_at_the_official_docs() {
        assert!(PackageManager::Npm.install_url().contains("npmjs.com"));
        assert!(PackageManager::Yarn.install_url().contains("yarnpkg.com"));
    }

    #[test]
    fn no_responding_candidate_yields_none() {
        let temp = tempfile::TempDir::new().unwrap();
        let result = first_responding(
            &[
                "groundwork-test-missing-manager-a",
                "groundwork-test-missing-manager-b",
            ],
            temp.path(),
        );
        assert!(result.is_none());
    }

    #[test]
    fn first_responding_candidate_wins() {
        let temp = tempfile::TempDir::new().unwrap();
        // `echo --version` exits 0 everywhere, so the probe stops at index 0.
        let result = first_responding(&["echo", "groundwork-test-missing-manager"], temp.path());
        assert_eq!(result.map(|(index, _)| index), Some(0));
    }

    #[test]
    fn probe_falls_through_to_later_candidates() {
        let temp = tempfile::TempDir::new().unwrap();
        let result = first_responding(&["groundwork-test-missing-manager", "echo"], temp.path());
        assert_eq!(result.map(|(index, _)| index), Some(1));
    }
}
