//! Marker-file detection for TypeScript, Tailwind CSS and package.json

use crate::error::{ProvisionError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tokio::fs;

/// Typed-language project marker
pub const TYPESCRIPT_CONFIG: &str = "tsconfig.json";

/// Recognized Tailwind config filenames, in lookup order
pub const TAILWIND_CONFIGS: &[&str] = &["tailwind.config.js", "tailwind.config.ts"];

pub const PACKAGE_MANIFEST: &str = "package.json";

/// Lowest Tailwind CSS major version the theme payload works with
pub const MIN_TAILWIND_MAJOR: u64 = 4;

const TAILWIND_PACKAGE: &str = "tailwindcss";

/// What the prober found in the project root
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapabilitySet {
    pub has_typed_language_config: bool,
    pub has_css_framework_config: bool,
    pub css_framework_version_ok: bool,
    /// Filename of the Tailwind config that was found, if any
    pub css_framework_config: Option<&'static str>,
    /// Declared `tailwindcss` version range, if any
    pub declared_css_framework_version: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PackageJson {
    /// `null` and absent are treated alike
    #[serde(default)]
    dependencies: Option<HashMap<String, serde_json::Value>>,
    #[serde(default)]
    dev_dependencies: Option<HashMap<String, serde_json::Value>>,
}

impl PackageJson {
    /// Version declared across both dependency groups; dev wins on conflict
    fn declared(&self, package: &str) -> Option<&str> {
        fn lookup<'a>(
            group: &'a Option<HashMap<String, serde_json::Value>>,
            package: &str,
        ) -> Option<&'a serde_json::Value> {
            group.as_ref().and_then(|deps| deps.get(package))
        }
        lookup(&self.dev_dependencies, package)
            .or_else(|| lookup(&self.dependencies, package))
            .and_then(serde_json::Value::as_str)
    }
}

/// Inspect `root` and report its capability set
///
/// A missing tsconfig or package.json is fatal; an absent or outdated Tailwind
/// version only clears `css_framework_version_ok`.
pub async fn probe(root: &Path) -> Result<CapabilitySet> {
    let mut caps = CapabilitySet::default();

    caps.has_typed_language_config = exists(&root.join(TYPESCRIPT_CONFIG)).await;
    for name in TAILWIND_CONFIGS {
        if exists(&root.join(name)).await {
            caps.has_css_framework_config = true;
            caps.css_framework_config = Some(*name);
            break;
        }
    }

    if !caps.has_typed_language_config {
        return Err(ProvisionError::FatalPrereqMissing {
            what: TYPESCRIPT_CONFIG,
            root: root.to_path_buf(),
            remediation: "npx tsc --init",
        });
    }

    let package_path = root.join(PACKAGE_MANIFEST);
    if !exists(&package_path).await {
        return Err(ProvisionError::FatalPrereqMissing {
            what: PACKAGE_MANIFEST,
            root: root.to_path_buf(),
            remediation: "npm init -y",
        });
    }

    let content = fs::read_to_string(&package_path)
        .await
        .map_err(|e| ProvisionError::io(&package_path, e))?;
    let package: PackageJson =
        serde_json::from_str(&content).map_err(|e| ProvisionError::PackageManifestMalformed {
            path: package_path.clone(),
            reason: e.to_string(),
        })?;

    if let Some(version) = package.declared(TAILWIND_PACKAGE) {
        caps.css_framework_version_ok = tailwind_version_ok(version);
        caps.declared_css_framework_version = Some(version.to_string());
    }

    tracing::debug!(root = %root.display(), ?caps, "probed project");
    Ok(caps)
}

/// Accept a declared version range whose leading numeric component is >= 4
///
/// Range operators and any other non-numeric characters are stripped first,
/// so `^4.1.0`, `~4.0` and `>=4` all pass while `3.4.1` and `latest` do not.
pub fn tailwind_version_ok(declared: &str) -> bool {
    let cleaned: String = declared
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    cleaned
        .split('.')
        .next()
        .and_then(|major| major.parse::<u64>().ok())
        .is_some_and(|major| major >= MIN_TAILWIND_MAJOR)
}

async fn exists(path: &Path) -> bool {
    fs::try_exists(path).await.unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn project(files: &[(&str, &str)]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for (name, content) in files {
            std::fs::write(dir.path().join(name), content).unwrap();
        }
        dir
    }

    #[test]
    fn test_version_rule() {
        assert!(tailwind_version_ok("^4.1.0"));
        assert!(tailwind_version_ok("~4.0"));
        assert!(tailwind_version_ok(">=4"));
        assert!(tailwind_version_ok("5.0.0-beta.1"));
        assert!(!tailwind_version_ok("^3.4.1"));
        assert!(!tailwind_version_ok("latest"));
        assert!(!tailwind_version_ok(""));
    }

    #[tokio::test]
    async fn test_missing_tsconfig_is_fatal() {
        let dir = project(&[("package.json", "{}")]);
        let err = probe(dir.path()).await.unwrap_err();
        assert!(matches!(
            err,
            ProvisionError::FatalPrereqMissing {
                what: TYPESCRIPT_CONFIG,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_missing_package_json_is_fatal() {
        let dir = project(&[("tsconfig.json", "{}")]);
        let err = probe(dir.path()).await.unwrap_err();
        assert!(matches!(
            err,
            ProvisionError::FatalPrereqMissing {
                what: PACKAGE_MANIFEST,
                ..
            }
        ));
        assert_eq!(err.remediation(), Some("npm init -y"));
    }

    #[tokio::test]
    async fn test_tailwind_v4_passes() {
        let dir = project(&[
            ("tsconfig.json", "{}"),
            ("tailwind.config.ts", "export default {}"),
            (
                "package.json",
                r#"{"devDependencies": {"tailwindcss": "^4.1.0"}}"#,
            ),
        ]);
        let caps = probe(dir.path()).await.unwrap();
        assert!(caps.has_typed_language_config);
        assert!(caps.has_css_framework_config);
        assert_eq!(caps.css_framework_config, Some("tailwind.config.ts"));
        assert!(caps.css_framework_version_ok);
    }

    #[tokio::test]
    async fn test_runtime_dependency_is_checked() {
        let dir = project(&[
            ("tsconfig.json", "{}"),
            (
                "package.json",
                r#"{"dependencies": {"tailwindcss": "3.4.1"}}"#,
            ),
        ]);
        let caps = probe(dir.path()).await.unwrap();
        assert!(!caps.has_css_framework_config);
        assert!(!caps.css_framework_version_ok);
        assert_eq!(caps.declared_css_framework_version.as_deref(), Some("3.4.1"));
    }

    #[tokio::test]
    async fn test_no_tailwind_declared_is_soft() {
        let dir = project(&[("tsconfig.json", "{}"), ("package.json", r#"{"name": "app"}"#)]);
        let caps = probe(dir.path()).await.unwrap();
        assert!(!caps.css_framework_version_ok);
        assert!(caps.declared_css_framework_version.is_none());
    }

    #[tokio::test]
    async fn test_malformed_package_json() {
        let dir = project(&[("tsconfig.json", "{}"), ("package.json", "{ nope")]);
        let err = probe(dir.path()).await.unwrap_err();
        assert!(matches!(err, ProvisionError::PackageManifestMalformed { .. }));
    }

    #[tokio::test]
    async fn test_null_dependency_group_is_absent() {
        let dir = project(&[
            ("tsconfig.json", "{}"),
            (
                "package.json",
                r#"{"dependencies": null, "devDependencies": {"tailwindcss": "^4.0.0"}}"#,
            ),
        ]);
        let caps = probe(dir.path()).await.unwrap();
        assert!(caps.css_framework_version_ok);
    }
}
