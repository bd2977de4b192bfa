//! Workflow orchestration for `init` and `add`
//!
//! These functions run the engine steps in order without any prompting, so a
//! custom front end (or a test) can drive them directly. Every decision that
//! needs the user, like overwrite confirmations, is made by the caller first.

use crate::config::{self, Manifest};
use crate::error::{ProvisionError, Result};
use crate::install::{self, OverwritePolicy, SessionReport};
use crate::registry::{resolve, Registry, TemplateSource};
use crate::theme::{self, MergeOutcome};
use crate::utilities::{self, UtilityOrigin};
use std::path::{Path, PathBuf};
use tokio::fs;

/// What `init` changed after the manifest was written
#[derive(Debug, Clone)]
pub struct InitReport {
    pub theme: MergeOutcome,
    pub utility_files: Vec<PathBuf>,
    pub utility_origin: UtilityOrigin,
}

/// Which components `add` should install
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentRequest {
    Named(Vec<String>),
    All,
}

/// What `add` did
#[derive(Debug, Clone)]
pub struct AddReport {
    /// Install order
    pub resolved: Vec<String>,
    /// Utility files written because they were missing
    pub utility_files: Vec<PathBuf>,
    pub session: SessionReport,
}

/// Write the manifest, then the theme, then the utilities
pub async fn apply_init(
    root: &Path,
    manifest: &Manifest,
    source: Option<&TemplateSource>,
) -> Result<InitReport> {
    config::write(root, manifest).await?;

    for dir in [&manifest.component_dir, &manifest.utils_dir] {
        let path = root.join(dir);
        fs::create_dir_all(&path)
            .await
            .map_err(|e| ProvisionError::io(&path, e))?;
    }

    let theme = apply_theme(&root.join(&manifest.css_file)).await?;

    let staged = utilities::materialize(manifest.language(), source).await?;
    let utility_files = staged.write(&root.join(&manifest.utils_dir)).await?;

    Ok(InitReport {
        theme,
        utility_files,
        utility_origin: staged.origin,
    })
}

/// Merge the theme into the stylesheet at `css_path`
///
/// The file is left untouched when the theme is already present.
pub async fn apply_theme(css_path: &Path) -> Result<MergeOutcome> {
    let existing = match fs::read_to_string(css_path).await {
        Ok(content) => Some(content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => return Err(ProvisionError::io(css_path, e)),
    };

    let (merged, outcome) = theme::merge_outcome(existing.as_deref());
    if outcome == MergeOutcome::AlreadyPresent {
        return Ok(outcome);
    }

    if let Some(parent) = css_path.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| ProvisionError::io(parent, e))?;
    }
    fs::write(css_path, merged)
        .await
        .map_err(|e| ProvisionError::io(css_path, e))?;

    tracing::debug!(path = %css_path.display(), ?outcome, "merged theme");
    Ok(outcome)
}

/// Resolve `request` against `registry` and install it into `root`
///
/// Resolution errors abort before anything is written. Utilities are written
/// only when some component needs them, and only the missing files are
/// created; existing utility files are never touched.
pub async fn apply_add(
    root: &Path,
    manifest: &Manifest,
    registry: &Registry,
    request: &ComponentRequest,
    policy: OverwritePolicy,
    source: &TemplateSource,
) -> Result<AddReport> {
    let names: Vec<&str> = match request {
        ComponentRequest::All => registry.names(),
        ComponentRequest::Named(names) => names.iter().map(String::as_str).collect(),
    };
    let resolution = resolve(&names, registry)?;

    let mut utility_files = Vec::new();
    let utils_dir = root.join(&manifest.utils_dir);
    let language = manifest.language();
    if !resolution.utilities.is_empty() && utilities::any_missing(&utils_dir, language).await {
        let staged = utilities::materialize(language, Some(source)).await?;
        utility_files = staged.write_missing(&utils_dir).await?;
    }

    let session = install::materialize(&resolution.order, root, manifest, policy, source).await;

    Ok(AddReport {
        resolved: resolution.names().into_iter().map(String::from).collect(),
        utility_files,
        session,
    })
}
