//! Component file copying with the overwrite/skip policy
//!
//! Each file is handled independently: a failure to read a template, create a
//! directory or write a destination is recorded for that file and the session
//! moves on to the next entry.

use super::report::{InstallOutcome, SessionReport};
use crate::config::{module_specifier, Manifest};
use crate::error::{ProvisionError, Result};
use crate::registry::{ComponentDescriptor, FileEntry, TemplateSource};
use crate::utilities::UTILS_MODULE;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Placeholder in templates replaced with the import path of the utilities module
pub const UTILS_PLACEHOLDER: &str = "{{utils}}";

/// What to do when a destination file already exists
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverwritePolicy {
    #[default]
    Skip,
    Overwrite,
}

impl OverwritePolicy {
    pub fn from_flag(overwrite: bool) -> Self {
        if overwrite {
            OverwritePolicy::Overwrite
        } else {
            OverwritePolicy::Skip
        }
    }
}

/// Install every file of every component in `order` under `root`
pub async fn materialize(
    order: &[&ComponentDescriptor],
    root: &Path,
    manifest: &Manifest,
    policy: OverwritePolicy,
    source: &TemplateSource,
) -> SessionReport {
    let mut report = SessionReport::default();

    for component in order {
        for file in &component.files {
            let relative = manifest
                .component_dir
                .join(file.dest_for(manifest.language()));
            let outcome = install_file(file, root, &relative, manifest, policy, source)
                .await
                .unwrap_or_else(|e| InstallOutcome::Failed(e.to_string()));

            tracing::debug!(
                component = %component.name,
                path = %relative.display(),
                %outcome,
                "installed file"
            );
            report.push(&component.name, relative, outcome);
        }
    }

    report
}

async fn install_file(
    file: &FileEntry,
    root: &Path,
    relative: &Path,
    manifest: &Manifest,
    policy: OverwritePolicy,
    source: &TemplateSource,
) -> Result<InstallOutcome> {
    let target = root.join(relative);

    let exists = fs::try_exists(&target)
        .await
        .map_err(|e| ProvisionError::io(&target, e))?;
    if exists && policy == OverwritePolicy::Skip {
        return Ok(InstallOutcome::SkippedExists);
    }

    let template = source
        .read_template(&file.source_for(manifest.language()))
        .await?;
    let content = render(&template, relative, manifest);

    // Ensure parent directories exist
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| ProvisionError::io(parent, e))?;
    }

    fs::write(&target, content)
        .await
        .map_err(|e| ProvisionError::io(&target, e))?;

    Ok(if exists {
        InstallOutcome::Overwritten
    } else {
        InstallOutcome::Written
    })
}

/// Substitute placeholders for a file installed at `relative`
fn render(template: &str, relative: &Path, manifest: &Manifest) -> String {
    if !template.contains(UTILS_PLACEHOLDER) {
        return template.to_string();
    }
    let from_dir = relative.parent().unwrap_or(Path::new(""));
    let utils_module: PathBuf = manifest.utils_dir.join(UTILS_MODULE);
    template.replace(UTILS_PLACEHOLDER, &module_specifier(from_dir, &utils_module))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::install::report::OutcomeCounts;
    use tempfile::TempDir;

    fn manifest() -> Manifest {
        Manifest {
            typescript: true,
            component_dir: PathBuf::from("src/components/ui"),
            utils_dir: PathBuf::from("src/lib"),
            css_file: PathBuf::from("src/styles/globals.css"),
            tailwind_config: None,
        }
    }

    fn component(name: &str, files: &[(&str, &str)]) -> ComponentDescriptor {
        ComponentDescriptor {
            name: name.to_string(),
            description: String::new(),
            depends_on: Vec::new(),
            utilities: Vec::new(),
            files: files
                .iter()
                .map(|(source, dest)| FileEntry {
                    source: source.to_string(),
                    dest: dest.to_string(),
                })
                .collect(),
        }
    }

    /// A template directory and an empty project root
    fn fixture() -> (TempDir, TemplateSource, TempDir) {
        let templates = TempDir::new().unwrap();
        std::fs::create_dir_all(templates.path().join("button")).unwrap();
        std::fs::write(
            templates.path().join("button/button.ts"),
            "import { cn } from '{{utils}}';\nexport const button = cn('btn');\n",
        )
        .unwrap();
        std::fs::write(templates.path().join("button/button.js"), "export const button = 1;\n")
            .unwrap();
        let source = TemplateSource::new(templates.path().to_path_buf());
        (templates, source, TempDir::new().unwrap())
    }

    #[tokio::test]
    async fn test_writes_with_rendered_import() {
        let (_templates, source, project) = fixture();
        let button = component("button", &[("button/button.{ext}", "button.{ext}")]);

        let report = materialize(
            &[&button],
            project.path(),
            &manifest(),
            OverwritePolicy::Skip,
            &source,
        )
        .await;

        assert_eq!(report.files[0].outcome, InstallOutcome::Written);
        assert_eq!(report.files[0].path, PathBuf::from("src/components/ui/button.ts"));
        let written =
            std::fs::read_to_string(project.path().join("src/components/ui/button.ts")).unwrap();
        assert!(written.starts_with("import { cn } from '../../lib/utils';"));
    }

    #[tokio::test]
    async fn test_untyped_manifest_picks_js_variant() {
        let (_templates, source, project) = fixture();
        let button = component("button", &[("button/button.{ext}", "button.{ext}")]);
        let mut manifest = manifest();
        manifest.typescript = false;

        materialize(&[&button], project.path(), &manifest, OverwritePolicy::Skip, &source).await;

        assert!(project.path().join("src/components/ui/button.js").is_file());
        assert!(!project.path().join("src/components/ui/button.ts").exists());
    }

    #[tokio::test]
    async fn test_existing_file_skipped_by_default() {
        let (_templates, source, project) = fixture();
        let target = project.path().join("src/components/ui/button.ts");
        std::fs::create_dir_all(target.parent().unwrap()).unwrap();
        std::fs::write(&target, b"// customized\n").unwrap();
        let button = component("button", &[("button/button.{ext}", "button.{ext}")]);

        let report = materialize(
            &[&button],
            project.path(),
            &manifest(),
            OverwritePolicy::default(),
            &source,
        )
        .await;

        assert_eq!(report.files[0].outcome, InstallOutcome::SkippedExists);
        assert_eq!(std::fs::read(&target).unwrap(), b"// customized\n");
    }

    #[tokio::test]
    async fn test_existing_file_overwritten_on_request() {
        let (_templates, source, project) = fixture();
        let target = project.path().join("src/components/ui/button.ts");
        std::fs::create_dir_all(target.parent().unwrap()).unwrap();
        std::fs::write(&target, "// customized\n").unwrap();
        let button = component("button", &[("button/button.{ext}", "button.{ext}")]);

        let report = materialize(
            &[&button],
            project.path(),
            &manifest(),
            OverwritePolicy::Overwrite,
            &source,
        )
        .await;

        assert_eq!(report.files[0].outcome, InstallOutcome::Overwritten);
        assert!(std::fs::read_to_string(&target).unwrap().contains("cn('btn')"));
    }

    #[tokio::test]
    async fn test_failure_does_not_stop_siblings() {
        let (_templates, source, project) = fixture();
        // A regular file where a directory is needed makes create_dir_all fail
        std::fs::create_dir_all(project.path().join("src/components/ui")).unwrap();
        std::fs::write(project.path().join("src/components/ui/nested"), "").unwrap();

        let broken = component("broken", &[("button/button.{ext}", "nested/button.{ext}")]);
        let missing = component("missing", &[("nope/nope.{ext}", "nope.{ext}")]);
        let button = component("button", &[("button/button.{ext}", "button.{ext}")]);

        let report = materialize(
            &[&broken, &missing, &button],
            project.path(),
            &manifest(),
            OverwritePolicy::Skip,
            &source,
        )
        .await;

        assert_eq!(
            report.counts(),
            OutcomeCounts {
                written: 1,
                skipped: 0,
                overwritten: 0,
                failed: 2
            }
        );
        assert_eq!(report.files[2].outcome, InstallOutcome::Written);
        assert!(!report.all_components_failed());
    }
}
