//! Output directory initialization.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{GroundworkError, Result};

/// Create the project directory.
///
/// Create-only: fails with [`GroundworkError::DirectoryExists`] when the
/// path is already present on disk, whether it is a file or a directory.
/// Creation is single-level; a missing parent surfaces as an IO error.
/// Nothing is mutated on failure.
pub fn create_project_dir(path: &Path) -> Result<()> {
    match fs::create_dir(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Err(GroundworkError::DirectoryExists {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn creates_missing_directory() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("my-app");

        create_project_dir(&target).unwrap();

        assert!(target.is_dir());
    }

    #[test]
    fn existing_directory_fails_without_mutation() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("my-app");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep.txt"), "contents").unwrap();

        let err = create_project_dir(&target).unwrap_err();

        assert!(matches!(err, GroundworkError::DirectoryExists { .. }));
        assert_eq!(
            fs::read_to_string(target.join("keep.txt")).unwrap(),
            "contents"
        );
    }

    #[test]
    fn existing_file_fails_with_directory_exists() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("my-app");
        fs::write(&target, "a file, not a directory").unwrap();

        let err = create_project_dir(&target).unwrap_err();

        assert!(matches!(err, GroundworkError::DirectoryExists { .. }));
        assert!(target.is_file());
    }

    #[test]
    fn missing_parent_is_an_io_error() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("missing-parent").join("my-app");

        let err = create_project_dir(&target).unwrap_err();

        assert!(matches!(err, GroundworkError::Io(_)));
        assert!(!target.exists());
    }
}
