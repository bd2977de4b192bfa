//! Interactive `add` flow

use super::project_root;
use crate::config;
use crate::install::{InstallOutcome, OverwritePolicy};
use crate::product::ProductConfig;
use crate::provision::{self, ComponentRequest};
use crate::registry::{check_compatibility, Registry, TemplateSource};
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

/// Arguments for the add command
#[derive(Debug, Clone, Default)]
pub struct AddArgs {
    /// Components to add; empty means pick interactively
    pub components: Vec<String>,

    /// Add every registry component
    pub all: bool,

    /// Replace files that already exist
    pub overwrite: bool,

    /// Non-interactive mode
    pub yes: bool,

    /// Project root (defaults to the current directory)
    pub cwd: Option<PathBuf>,

    /// Template directory to use instead of the bundled one
    pub template_dir: Option<PathBuf>,
}

/// Add components to an initialized project
pub async fn run_add<C: ProductConfig>(config: &C, args: AddArgs, cli_version: &str) -> Result<()> {
    cliclack::intro(config.display_name())?;

    let root = project_root(args.cwd.as_deref())?;

    // Step 1: Load the manifest; without it there is nowhere to install to
    let manifest = match config::read(&root).await {
        Ok(manifest) => manifest,
        Err(e) => {
            cliclack::log::error(e.to_string())?;
            cliclack::outro_cancel("Add aborted")?;
            return Err(e.into());
        }
    };

    // Step 2: Load the bundled registry
    let source = TemplateSource::locate(config, args.template_dir.as_deref()).with_context(|| {
        format!(
            "Bundled templates not found. Pass --template-dir or set {}",
            config.template_dir_env()
        )
    })?;
    let registry = load_registry(&source, config, cli_version).await?;

    // Step 3: Decide what to install
    let request = match select_components(&registry, &args)? {
        Some(request) => request,
        None => {
            cliclack::outro_cancel("No components selected")?;
            return Ok(());
        }
    };

    // Step 4: Resolve and install
    let spinner = cliclack::spinner();
    spinner.start("Installing components...");

    let policy = OverwritePolicy::from_flag(args.overwrite);
    let report =
        match provision::apply_add(&root, &manifest, &registry, &request, policy, &source).await {
            Ok(report) => report,
            Err(e) => {
                spinner.error("Failed to resolve components");
                cliclack::log::error(e.to_string())?;
                return Err(e.into());
            }
        };
    spinner.stop(format!("Resolved: {}", report.resolved.join(", ")));

    for path in &report.utility_files {
        cliclack::log::info(format!("Restored utility {}", path.display()))?;
    }

    for file in &report.session.files {
        let path = file.path.display();
        match &file.outcome {
            InstallOutcome::Written => cliclack::log::success(format!("Created {path}"))?,
            InstallOutcome::Overwritten => cliclack::log::success(format!("Overwrote {path}"))?,
            InstallOutcome::SkippedExists => cliclack::log::info(format!(
                "Skipped {path} (already exists, use --overwrite to replace)"
            ))?,
            InstallOutcome::Failed(reason) => {
                cliclack::log::warning(format!("Failed {path}: {reason}"))?
            }
        }
    }

    // Step 5: Summarize
    let counts = report.session.counts();
    if report.session.all_components_failed() {
        cliclack::outro_cancel("Every component failed to install")?;
        anyhow::bail!("{} file(s) failed to install", counts.failed);
    }

    println!();
    println!(
        "  {} created, {} overwritten, {} skipped",
        counts.written.to_string().green(),
        counts.overwritten.to_string().yellow(),
        counts.skipped.to_string().dimmed()
    );
    if counts.failed > 0 {
        println!(
            "  {}",
            format!("{} file(s) failed, see warnings above", counts.failed).red()
        );
    }

    cliclack::outro("Components added")?;
    Ok(())
}

async fn load_registry<C: ProductConfig>(
    source: &TemplateSource,
    config: &C,
    cli_version: &str,
) -> Result<Registry> {
    let registry = source
        .read_registry()
        .await
        .with_context(|| format!("Failed to load templates from {}", source.dir().display()))?;

    if let Some(warning) =
        check_compatibility(cli_version, &registry.version, config.upgrade_command())
    {
        cliclack::log::warning(format!(
            "Version warning: {}",
            warning.lines().next().unwrap_or(&warning)
        ))?;
    }

    Ok(registry)
}

/// `None` when the user picked nothing
fn select_components(registry: &Registry, args: &AddArgs) -> Result<Option<ComponentRequest>> {
    if args.all {
        return Ok(Some(ComponentRequest::All));
    }
    if !args.components.is_empty() {
        return Ok(Some(ComponentRequest::Named(args.components.clone())));
    }
    if args.yes {
        anyhow::bail!("No components specified. Name them or pass --all.");
    }

    let mut multi = cliclack::multiselect("Which components would you like to add?");
    for component in &registry.components {
        multi = multi.item(
            component.name.clone(),
            &component.name,
            &component.description,
        );
    }

    let selected: Vec<String> = multi.required(false).interact()?;
    Ok((!selected.is_empty()).then_some(ComponentRequest::Named(selected)))
}
