//! Manifest store: reads and writes `components.json`
//!
//! The manifest is the single source of truth for `add`. Writes are
//! last-write-wins; callers must get the user's confirmation before replacing
//! an existing file.

use super::paths::ensure_inside_root;
use crate::error::{ProvisionError, Result};
use crate::language::Language;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

/// File name of the per-project manifest
pub const MANIFEST_FILE: &str = "components.json";

/// Persisted install locations for one project
///
/// Every key is required on read; unknown keys are ignored so newer manifests
/// stay readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    /// Selects typed (`.ts`) or untyped (`.js`) template variants
    pub typescript: bool,

    /// Destination for component files
    pub component_dir: PathBuf,

    /// Destination for shared utility files
    pub utils_dir: PathBuf,

    /// Global stylesheet the theme is merged into
    pub css_file: PathBuf,

    /// Detected Tailwind config, informational only. Stored as `""` when absent.
    #[serde(with = "empty_as_none")]
    pub tailwind_config: Option<PathBuf>,
}

impl Manifest {
    pub fn language(&self) -> Language {
        Language::from_typescript_flag(self.typescript)
    }

    /// Check the root-containment invariant for every path key
    pub fn validate(&self) -> Result<()> {
        ensure_inside_root("componentDir", &self.component_dir)?;
        ensure_inside_root("utilsDir", &self.utils_dir)?;
        ensure_inside_root("cssFile", &self.css_file)?;
        if let Some(config) = &self.tailwind_config {
            ensure_inside_root("tailwindConfig", config)?;
        }
        Ok(())
    }
}

/// Location of the manifest for a project root
pub fn manifest_path(root: &Path) -> PathBuf {
    root.join(MANIFEST_FILE)
}

pub async fn exists(root: &Path) -> bool {
    fs::try_exists(manifest_path(root)).await.unwrap_or(false)
}

/// Read and validate the manifest under `root`
pub async fn read(root: &Path) -> Result<Manifest> {
    let path = manifest_path(root);
    let content = match fs::read_to_string(&path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ProvisionError::ManifestNotFound { path });
        }
        Err(e) => return Err(ProvisionError::io(&path, e)),
    };

    let manifest: Manifest =
        serde_json::from_str(&content).map_err(|e| ProvisionError::ManifestMalformed {
            path: path.clone(),
            reason: e.to_string(),
        })?;
    manifest.validate()?;

    tracing::debug!(path = %path.display(), ?manifest, "read manifest");
    Ok(manifest)
}

/// Write the manifest under `root`, replacing any existing one
pub async fn write(root: &Path, manifest: &Manifest) -> Result<()> {
    manifest.validate()?;

    let path = manifest_path(root);
    let mut content = serde_json::to_string_pretty(manifest).map_err(|e| {
        ProvisionError::ManifestMalformed {
            path: path.clone(),
            reason: e.to_string(),
        }
    })?;
    content.push('\n');

    fs::write(&path, content)
        .await
        .map_err(|e| ProvisionError::io(&path, e))?;

    tracing::debug!(path = %path.display(), "wrote manifest");
    Ok(())
}

/// `Option<PathBuf>` stored as a string, with `""` meaning `None`
///
/// The key itself stays required: a missing `tailwindConfig` fails to parse.
mod empty_as_none {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::path::PathBuf;

    pub fn serialize<S: Serializer>(value: &Option<PathBuf>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(path) => s.serialize_str(&path.to_string_lossy()),
            None => s.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<PathBuf>, D::Error> {
        let raw = String::deserialize(d)?;
        Ok((!raw.is_empty()).then(|| PathBuf::from(raw)))
    }
}
