//! Project manifest configuration.
//!
//! The extracted template ships a `package.json` carrying the template's own
//! name. This stage parses it as plain structured data, overwrites the
//! `name` and `version` fields, and writes it back. Every other field is
//! preserved exactly. The rewrite goes through a temporary file and a
//! rename so a failure never leaves a half-written manifest behind.

use std::fs;
use std::path::Path;

use serde_json::{json, Value};

use crate::error::{GroundworkError, Result};

/// Manifest file name inside the scaffolded project.
pub const MANIFEST_FILE: &str = "package.json";

/// Version written into every freshly scaffolded manifest.
pub const DEFAULT_VERSION: &str = "0.1.0";

/// Fields merged over the template manifest.
#[derive(Debug, Clone)]
pub struct ManifestPatch {
    /// New project name.
    pub name: String,
    /// New project version.
    pub version: String,
}

impl ManifestPatch {
    /// Build the standard patch for a project: its name plus the default
    /// version.
    pub fn for_project(name: &str) -> Self {
        Self {
            name: name.to_string(),
            version: DEFAULT_VERSION.to_string(),
        }
    }
}

/// Apply the patch to `<project_dir>/package.json`.
pub fn configure(patch: &ManifestPatch, project_dir: &Path) -> Result<()> {
    let manifest_path = project_dir.join(MANIFEST_FILE);

    let raw = fs::read_to_string(&manifest_path).map_err(|e| GroundworkError::Manifest {
        path: manifest_path.clone(),
        message: e.to_string(),
    })?;

    let mut doc: Value = serde_json::from_str(&raw).map_err(|e| GroundworkError::Manifest {
        path: manifest_path.clone(),
        message: format!("invalid JSON: {}", e),
    })?;

    let fields = doc.as_object_mut().ok_or_else(|| GroundworkError::Manifest {
        path: manifest_path.clone(),
        message: "manifest root is not an object".to_string(),
    })?;

    fields.insert("name".to_string(), json!(patch.name));
    fields.insert("version".to_string(), json!(patch.version));

    let mut serialized = serde_json::to_string_pretty(&doc).map_err(|e| {
        GroundworkError::Manifest {
            path: manifest_path.clone(),
            message: e.to_string(),
        }
    })?;
    serialized.push('\n');

    // Temp file plus rename keeps the manifest whole if the write dies.
    let tmp_path = manifest_path.with_extension("json.tmp");
    fs::write(&tmp_path, serialized)?;
    fs::rename(&tmp_path, &manifest_path)?;

    Ok(())
}
