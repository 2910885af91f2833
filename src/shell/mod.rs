//! Executable probing and environment helpers.

use std::path::Path;
use std::process::Command;

/// Run `<command> --version` in `cwd` and report whether it responded.
///
/// Returns `None` when the executable is missing or exits non-zero. On
/// success the parsed version string is returned when one can be found in
/// the output; a responding executable with unparseable output still counts
/// as detected.
pub fn probe_version(command: &str, cwd: &Path) -> Option<Option<String>> {
    let output = Command::new(command)
        .arg("--version")
        .current_dir(cwd)
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Some(extract_version(&stdout))
}

/// Extract a version number from command output.
fn extract_version(output: &str) -> Option<String> {
    let patterns = [r"(\d+\.\d+\.\d+)", r"version\s+(\d+\.\d+)", r"v(\d+\.\d+)"];

    for pattern in &patterns {
        if let Ok(re) = regex::Regex::new(pattern) {
            if let Some(caps) = re.captures(output) {
                if let Some(m) = caps.get(1) {
                    return Some(m.as_str().to_string());
                }
            }
        }
    }

    None
}

/// Check if running in a CI environment.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}
