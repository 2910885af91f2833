//! Template archive download and extraction.
//!
//! The tarball response body is streamed straight through a gzip decoder
//! into a tar reader; the archive is never buffered to disk in full.
//! Code-hosting tarballs wrap every file in a single `<repo>-<ref>/`
//! directory, so exactly one leading path component is stripped from each
//! entry. The operation is complete only once the entry iterator is
//! exhausted, not when the HTTP response finishes.

use std::fs;
use std::path::{Component, Path, PathBuf};
use std::time::Duration;

use flate2::read::GzDecoder;
use reqwest::blocking::Client;
use tar::Archive;

use crate::error::{GroundworkError, Result};

/// Downloads and extracts template tarballs.
pub struct ArchiveFetcher {
    client: Client,
    timeout: Duration,
}

impl ArchiveFetcher {
    /// Create a fetcher with the default 30-second timeout.
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(30))
    }

    /// Create a fetcher with a custom timeout.
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

    /// Stream the archive at `url` and unpack it under `dest`.
    ///
    /// `dest` must already exist. Network errors, non-success statuses, and
    /// extraction failures are all reported as [`GroundworkError::Download`].
    pub fn fetch_and_extract(&self, url: &str, dest: &Path) -> Result<()> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| download_error(url, e))?;

        if !response.status().is_success() {
            return Err(download_error(
                url,
                format!("HTTP {}", response.status()),
            ));
        }

        let decoder = GzDecoder::new(response);
        let mut archive = Archive::new(decoder);

        let entries = archive.entries().map_err(|e| download_error(url, e))?;
        for entry in entries {
            let mut entry = entry.map_err(|e| download_error(url, e))?;

            let stripped = {
                let path = entry.path().map_err(|e| download_error(url, e))?;
                strip_wrapper_component(&path).map_err(|message| download_error(url, message))?
            };

            // The wrapper directory itself strips down to nothing.
            let Some(stripped) = stripped else { continue };

            let target = dest.join(&stripped);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|e| download_error(url, e))?;
            }
            entry.unpack(&target).map_err(|e| download_error(url, e))?;

            tracing::debug!("Extracted {}", stripped.display());
        }

        Ok(())
    }
}

impl Default for ArchiveFetcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Drop the single leading path component and reject entries that would
/// land outside the destination.
fn strip_wrapper_component(path: &Path) -> std::result::Result<Option<PathBuf>, String> {
    let stripped: PathBuf = path.components().skip(1).collect();

    if stripped.as_os_str().is_empty() {
        return Ok(None);
    }

    let escapes = stripped
        .components()
        .any(|c| !matches!(c, Component::Normal(_)));
    if escapes {
        return Err(format!(
            "archive entry escapes destination: {}",
            path.display()
        ));
    }

    Ok(Some(stripped))
}

fn download_error(url: &str, message: impl ToString) -> GroundworkError {
    GroundworkError::Download {
        url: url.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use httpmock::prelude::*;
    use tempfile::TempDir;

    /// Build a gzipped tarball whose entries all share the given wrapper
    /// directory, the way code-hosting tarballs do.
    fn template_tarball(wrapper: &str, files: &[(&str, &str)]) -> Vec<u8> {
        let encoder = GzEncoder::new(Vec::new(), Compression::default());
        let mut builder = tar::Builder::new(encoder);

        for (path, contents) in files {
            let mut header = tar::Header::new_gnu();
            header.set_size(contents.len() as u64);
            header.set_mode(0o644);
            header.set_cksum();
            builder
                .append_data(
                    &mut header,
                    format!("{}/{}", wrapper, path),
                    contents.as_bytes(),
                )
                .unwrap();
        }

        builder.into_inner().unwrap().finish().unwrap()
    }

    fn serve_tarball(server: &MockServer, body: Vec<u8>) -> String {
        server.mock(|when, then| {
            when.method(GET).path("/template/tar.gz/master");
            then.status(200)
                .header("content-type", "application/x-gzip")
                .body(body);
        });
        format!("{}/template/tar.gz/master", server.base_url())
    }

    #[test]
    fn default_timeout_is_30_seconds() {
        let fetcher = ArchiveFetcher::new();
        assert_eq!(fetcher.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn extraction_strips_one_leading_component() {
        let server = MockServer::start();
        let body = template_tarball(
            "template-master",
            &[
                ("index.js", "console.log('hi');\n"),
                ("src/app.js", "export default {};\n"),
                ("package.json", "{\"name\":\"template\"}"),
            ],
        );
        let url = serve_tarball(&server, body);

        let temp = TempDir::new().unwrap();
        ArchiveFetcher::new()
            .fetch_and_extract(&url, temp.path())
            .unwrap();

        assert!(temp.path().join("index.js").is_file());
        assert!(temp.path().join("src/app.js").is_file());
        assert!(temp.path().join("package.json").is_file());
        // The wrapper directory itself never lands on disk.
        assert!(!temp.path().join("template-master").exists());
    }

    #[test]
    fn extracted_contents_are_preserved() {
        let server = MockServer::start();
        let body = template_tarball("repo-main", &[("readme.md", "# Template\n")]);
        let url = serve_tarball(&server, body);

        let temp = TempDir::new().unwrap();
        ArchiveFetcher::new()
            .fetch_and_extract(&url, temp.path())
            .unwrap();

        assert_eq!(
            fs::read_to_string(temp.path().join("readme.md")).unwrap(),
            "# Template\n"
        );
    }

    #[test]
    fn non_success_status_is_a_download_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/template/tar.gz/master");
            then.status(404);
        });
        let url = format!("{}/template/tar.gz/master", server.base_url());

        let temp = TempDir::new().unwrap();
        let err = ArchiveFetcher::new()
            .fetch_and_extract(&url, temp.path())
            .unwrap_err();

        assert!(matches!(err, GroundworkError::Download { .. }));
    }

    #[test]
    fn corrupt_stream_is_a_download_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/template/tar.gz/master");
            then.status(200).body("this is not a gzip stream");
        });
        let url = format!("{}/template/tar.gz/master", server.base_url());

        let temp = TempDir::new().unwrap();
        let err = ArchiveFetcher::new()
            .fetch_and_extract(&url, temp.path())
            .unwrap_err();

        assert!(matches!(err, GroundworkError::Download { .. }));
    }

    #[test]
    fn unreachable_host_is_a_download_error() {
        let temp = TempDir::new().unwrap();
        let err = ArchiveFetcher::with_timeout(Duration::from_secs(2))
            .fetch_and_extract("http://127.0.0.1:1/tar.gz/master", temp.path())
            .unwrap_err();

        assert!(matches!(err, GroundworkError::Download { .. }));
    }

    #[test]
    fn wrapper_only_entry_is_skipped() {
        assert_eq!(
            strip_wrapper_component(Path::new("template-master")).unwrap(),
            None
        );
        assert_eq!(
            strip_wrapper_component(Path::new("template-master/")).unwrap(),
            None
        );
    }

    #[test]
    fn nested_paths_keep_their_remainder() {
        assert_eq!(
            strip_wrapper_component(Path::new("template-master/src/app.js")).unwrap(),
            Some(PathBuf::from("src/app.js"))
        );
    }

    #[test]
    fn parent_traversal_is_rejected() {
        let err = strip_wrapper_component(Path::new("template-master/../evil.txt")).unwrap_err();
        assert!(err.contains("escapes destination"));
    }
}
