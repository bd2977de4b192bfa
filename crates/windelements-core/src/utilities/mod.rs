//! Shared utility sources written into the project's utilities directory
//!
//! Canonical sources come from the bundled template directory
//! (`utils/index.{ext}`, `utils/types.ts`). When the template directory or a
//! file in it is missing, a built-in source is used instead. A bundled file
//! that exists but is unreadable or empty is an error rather than a fallback.

pub mod class_names;
pub mod mount;
pub mod synth;

use crate::error::{ProvisionError, Result};
use crate::language::Language;
use crate::registry::TemplateSource;
use std::path::{Path, PathBuf};
use tokio::fs;

pub use class_names::{compose_class_names, ClassInput};
pub use mount::MountRegistry;

/// Utility names a registry component may depend on
pub const UTILITY_NAMES: &[&str] = &["cn", "generate-id", "focus-trap", "portal", "types"];

/// Module name (without extension) of the utilities file
pub const UTILS_MODULE: &str = "utils";

const TYPES_FILE: &str = "types.ts";

/// Where a staged source came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UtilityOrigin {
    Bundled,
    Synthesized,
}

/// Utility sources ready to be written
#[derive(Debug, Clone)]
pub struct StagedUtilities {
    pub language: Language,
    pub utils_source: String,
    /// Only present in typed mode
    pub types_source: Option<String>,
    pub origin: UtilityOrigin,
}

impl StagedUtilities {
    pub fn utils_file_name(&self) -> String {
        utils_file_name(self.language)
    }

    /// Write the staged files into `dir`, creating it if needed
    pub async fn write(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        self.write_files(dir, false).await
    }

    /// Write only the staged files that do not exist yet in `dir`
    ///
    /// Returns the paths that were created; existing files keep their bytes.
    pub async fn write_missing(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        self.write_files(dir, true).await
    }

    fn files(&self) -> Vec<(String, &str)> {
        let mut files = vec![(self.utils_file_name(), self.utils_source.as_str())];
        if let Some(types) = &self.types_source {
            files.push((TYPES_FILE.to_string(), types.as_str()));
        }
        files
    }

    async fn write_files(&self, dir: &Path, skip_existing: bool) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(dir)
            .await
            .map_err(|e| ProvisionError::io(dir, e))?;

        let mut written = Vec::with_capacity(2);
        for (name, content) in self.files() {
            let path = dir.join(name);
            if skip_existing && exists(&path).await {
                continue;
            }
            fs::write(&path, content)
                .await
                .map_err(|e| ProvisionError::io(&path, e))?;
            written.push(path);
        }

        tracing::debug!(files = ?written, origin = ?self.origin, "wrote utilities");
        Ok(written)
    }
}

/// Utility files a project in `language` should have
pub fn file_names(language: Language) -> Vec<String> {
    let mut names = vec![utils_file_name(language)];
    if language.is_typed() {
        names.push(TYPES_FILE.to_string());
    }
    names
}

/// Whether any utility file for `language` is absent from `dir`
pub async fn any_missing(dir: &Path, language: Language) -> bool {
    for name in file_names(language) {
        if !exists(&dir.join(name)).await {
            return true;
        }
    }
    false
}

async fn exists(path: &Path) -> bool {
    fs::try_exists(path).await.unwrap_or(false)
}

/// `utils.ts` or `utils.js`
pub fn utils_file_name(language: Language) -> String {
    format!("{UTILS_MODULE}.{}", language.extension())
}

/// Select bundled utility sources for `language`, falling back to built-ins
pub async fn materialize(
    language: Language,
    source: Option<&TemplateSource>,
) -> Result<StagedUtilities> {
    let bundled_utils = match source {
        Some(source) => {
            source
                .read_optional(&format!("utils/index.{}", language.extension()))
                .await?
        }
        None => None,
    };

    let origin = if bundled_utils.is_some() {
        UtilityOrigin::Bundled
    } else {
        tracing::debug!(%language, "bundled utilities unavailable, using built-in source");
        UtilityOrigin::Synthesized
    };
    let utils_source = bundled_utils.unwrap_or_else(|| synth::utils_template(language));

    let types_source = if language.is_typed() {
        let bundled_types = match source {
            Some(source) => source.read_optional(&format!("utils/{TYPES_FILE}")).await?,
            None => None,
        };
        Some(bundled_types.unwrap_or_else(|| synth::types_template().to_string()))
    } else {
        None
    };

    Ok(StagedUtilities {
        language,
        utils_source,
        types_source,
        origin,
    })
}
