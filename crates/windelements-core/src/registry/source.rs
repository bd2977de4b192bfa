//! Locating and reading the bundled template directory
//!
//! Templates ship next to the tool. Lookup order:
//! 1. An explicit `--template-dir`
//! 2. The product's environment override
//! 3. `templates/` next to the executable
//! 4. `../share/<name>/templates` relative to the executable
//! 5. The `templates/` directory of the source checkout the tool was built from

use super::manifest::{Registry, REGISTRY_FILE};
use crate::error::{ProvisionError, Result};
use crate::product::ProductConfig;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Templates directory of the checkout this crate was compiled in
const BUILD_TEMPLATE_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../templates");

/// A local directory holding the registry and template files
#[derive(Debug, Clone)]
pub struct TemplateSource {
    dir: PathBuf,
}

impl TemplateSource {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Resolve the template directory for a product
    ///
    /// An explicit directory is returned as-is so a typo surfaces as a
    /// "registry not found" error instead of silently using another copy.
    /// Otherwise the first existing candidate wins; `None` if there is none.
    pub fn locate<C: ProductConfig>(config: &C, explicit: Option<&Path>) -> Option<Self> {
        if let Some(dir) = explicit {
            return Some(Self::new(dir.to_path_buf()));
        }

        let mut candidates: Vec<PathBuf> = Vec::new();
        if let Ok(dir) = std::env::var(config.template_dir_env()) {
            candidates.push(PathBuf::from(dir));
        }
        if let Some(exe_dir) = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
        {
            candidates.push(exe_dir.join("templates"));
            candidates.push(
                exe_dir
                    .join("..")
                    .join("share")
                    .join(config.name())
                    .join("templates"),
            );
        }
        candidates.push(PathBuf::from(BUILD_TEMPLATE_DIR));

        let found = candidates
            .into_iter()
            .find(|dir| dir.join(REGISTRY_FILE).is_file())
            .map(Self::new);
        tracing::debug!(dir = ?found.as_ref().map(|s| s.dir()), "located template directory");
        found
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Read and validate `registry.yaml`
    pub async fn read_registry(&self) -> Result<Registry> {
        let path = self.dir.join(REGISTRY_FILE);
        let content = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ProvisionError::RegistryNotFound { path });
            }
            Err(e) => return Err(ProvisionError::io(&path, e)),
        };
        Registry::parse(&content)
            .map_err(|reason| ProvisionError::RegistryMalformed { path, reason })
    }

    /// Read a template file that must exist
    pub async fn read_template(&self, relative: &str) -> Result<String> {
        let path = self.dir.join(relative);
        fs::read_to_string(&path)
            .await
            .map_err(|e| ProvisionError::io(&path, e))
    }

    /// Read a bundled resource that may legitimately be absent
    ///
    /// Absent yields `Ok(None)`. A file that exists but cannot be read, is not
    /// UTF-8, or is blank is reported as corrupt.
    pub async fn read_optional(&self, relative: &str) -> Result<Option<String>> {
        let path = self.dir.join(relative);
        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(ProvisionError::BundledResourceCorrupt {
                    path,
                    reason: e.to_string(),
                })
            }
        };

        let text = String::from_utf8(bytes).map_err(|_| ProvisionError::BundledResourceCorrupt {
            path: path.clone(),
            reason: "not valid UTF-8".to_string(),
        })?;
        if text.trim().is_empty() {
            return Err(ProvisionError::BundledResourceCorrupt {
                path,
                reason: "file is empty".to_string(),
            });
        }
        Ok(Some(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_read_optional_absent() {
        let dir = TempDir::new().unwrap();
        let source = TemplateSource::new(dir.path().to_path_buf());
        assert!(source.read_optional("utils/index.ts").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_read_optional_blank_is_corrupt() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("index.ts"), "  \n").unwrap();
        let source = TemplateSource::new(dir.path().to_path_buf());
        let err = source.read_optional("index.ts").await.unwrap_err();
        assert!(matches!(err, ProvisionError::BundledResourceCorrupt { .. }));
    }

    #[tokio::test]
    async fn test_read_optional_non_utf8_is_corrupt() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("index.ts"), [0xff, 0xfe, 0x00]).unwrap();
        let source = TemplateSource::new(dir.path().to_path_buf());
        assert!(source.read_optional("index.ts").await.is_err());
    }

    #[tokio::test]
    async fn test_missing_registry() {
        let dir = TempDir::new().unwrap();
        let source = TemplateSource::new(dir.path().to_path_buf());
        let err = source.read_registry().await.unwrap_err();
        assert!(matches!(err, ProvisionError::RegistryNotFound { .. }));
    }

    #[tokio::test]
    async fn test_bundled_registry_loads() {
        let source = TemplateSource::new(PathBuf::from(BUILD_TEMPLATE_DIR));
        let registry = source.read_registry().await.unwrap();
        assert!(registry.get("button").is_some());
    }

    #[tokio::test]
    async fn test_bundled_templates_exist_for_both_languages() {
        let source = TemplateSource::new(PathBuf::from(BUILD_TEMPLATE_DIR));
        let registry = source.read_registry().await.unwrap();
        for component in &registry.components {
            for file in &component.files {
                for language in [Language::TypeScript, Language::JavaScript] {
                    let path = source.dir().join(file.source_for(language));
                    assert!(path.is_file(), "missing {}", path.display());
                }
            }
        }
        for utility in ["utils/index.ts", "utils/index.js", "utils/types.ts"] {
            assert!(source.read_optional(utility).await.unwrap().is_some());
        }
    }
}
