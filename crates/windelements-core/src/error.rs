//! Error types for the provisioning engine
//!
//! The TUI layer and the binary wrap these in `anyhow`; the library keeps them
//! typed so callers can tell a missing prerequisite from a broken manifest.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result alias used throughout the engine
pub type Result<T> = std::result::Result<T, ProvisionError>;

#[derive(Debug, Error)]
pub enum ProvisionError {
    /// A project prerequisite is absent; nothing has been written
    #[error("{what} not found in {}", .root.display())]
    FatalPrereqMissing {
        what: &'static str,
        root: PathBuf,
        remediation: &'static str,
    },

    #[error("Failed to parse {}: {reason}", .path.display())]
    PackageManifestMalformed { path: PathBuf, reason: String },

    #[error("No {} found. Run `windelements init` first.", .path.display())]
    ManifestNotFound { path: PathBuf },

    #[error("Invalid {}: {reason}. Run `windelements init` to recreate it.", .path.display())]
    ManifestMalformed { path: PathBuf, reason: String },

    #[error("Manifest key `{key}` must be a path inside the project root, got '{value}'")]
    ManifestInvalidPath { key: &'static str, value: String },

    #[error("Component '{name}' not found in registry")]
    UnknownComponent { name: String },

    #[error("Circular dependency detected: {chain}")]
    CycleDetected { chain: String },

    #[error("Component registry not found at {}", .path.display())]
    RegistryNotFound { path: PathBuf },

    #[error("Invalid component registry {}: {reason}", .path.display())]
    RegistryMalformed { path: PathBuf, reason: String },

    #[error("Bundled resource {} is corrupt: {reason}", .path.display())]
    BundledResourceCorrupt { path: PathBuf, reason: String },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ProvisionError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Remediation hint shown to the user, if this error has one
    pub fn remediation(&self) -> Option<&'static str> {
        match self {
            Self::FatalPrereqMissing { remediation, .. } => Some(*remediation),
            Self::ManifestNotFound { .. }
            | Self::ManifestMalformed { .. }
            | Self::ManifestInvalidPath { .. } => Some("windelements init"),
            _ => None,
        }
    }
}
