//! Interactive `init` flow

use super::project_root;
use crate::config::{self, ensure_inside_root, Manifest, MANIFEST_FILE};
use crate::error::ProvisionError;
use crate::probe::{self, CapabilitySet};
use crate::product::ProductConfig;
use crate::provision;
use crate::registry::TemplateSource;
use crate::theme::MergeOutcome;
use crate::utilities::UtilityOrigin;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Arguments for the init command
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// Project root (defaults to the current directory)
    pub cwd: Option<PathBuf>,

    /// Template directory to use instead of the bundled one
    pub template_dir: Option<PathBuf>,

    /// Replace an existing manifest without asking
    pub overwrite: bool,

    /// Accept defaults and confirmations (non-interactive mode)
    pub yes: bool,
}

/// Run initialization with interactive prompts
///
/// Declining a confirmation returns `Ok(())` before anything is written.
pub async fn run_init<C: ProductConfig>(config: &C, args: InitArgs) -> Result<()> {
    cliclack::intro(format!("Welcome to {}", config.display_name()))?;

    let root = project_root(args.cwd.as_deref())?;

    // Step 1: Confirm replacing an existing manifest
    if config::exists(&root).await && !args.overwrite {
        let overwrite = if args.yes {
            cliclack::log::warning(format!(
                "{MANIFEST_FILE} already exists. Pass --overwrite to replace it."
            ))?;
            false
        } else {
            cliclack::confirm(format!("{MANIFEST_FILE} already exists. Overwrite?"))
                .initial_value(false)
                .interact()?
        };

        if !overwrite {
            cliclack::outro_cancel("Cancelled initialization")?;
            return Ok(());
        }
    }

    // Step 2: Detect project capabilities
    let caps = match probe::probe(&root).await {
        Ok(caps) => caps,
        Err(e) => {
            report_error(&e)?;
            return Err(e.into());
        }
    };

    // Step 3: Choose install locations
    let manifest = select_locations(config, &args, &caps)?;

    // Step 4: Tailwind CSS v4+ is recommended but not required
    if !caps.css_framework_version_ok && !confirm_without_tailwind(&caps, args.yes)? {
        cliclack::outro_cancel("Cancelled initialization")?;
        anyhow::bail!("Tailwind CSS v4 or higher is required.");
    }

    // Step 5: Write manifest, theme and utilities
    let source = TemplateSource::locate(config, args.template_dir.as_deref());
    let spinner = cliclack::spinner();
    spinner.start("Creating configuration file...");

    let report = match provision::apply_init(&root, &manifest, source.as_ref()).await {
        Ok(report) => report,
        Err(e) => {
            spinner.error("Failed to initialize");
            return Err(e).context("Failed to initialize project");
        }
    };
    spinner.stop(format!("Created {MANIFEST_FILE}"));

    let css = manifest.css_file.display();
    match report.theme {
        MergeOutcome::Created => cliclack::log::info(format!("Created {css} with theme"))?,
        MergeOutcome::AlreadyPresent => {
            cliclack::log::info(format!("Theme variables already exist in {css}"))?
        }
        MergeOutcome::Appended { .. } => {
            cliclack::log::info(format!("Added theme variables to {css}"))?
        }
    }

    let origin = match report.utility_origin {
        UtilityOrigin::Bundled => "bundled",
        UtilityOrigin::Synthesized => "built-in",
    };
    cliclack::log::info(format!(
        "Copied {} utility file(s) ({origin}) to {}",
        report.utility_files.len(),
        manifest.utils_dir.display()
    ))?;

    print_next_steps(config, &root)?;

    Ok(())
}

fn report_error(error: &ProvisionError) -> Result<()> {
    cliclack::log::error(error.to_string())?;
    if let Some(remediation) = error.remediation() {
        cliclack::log::remark(format!("Run: {remediation}"))?;
    }
    cliclack::outro_cancel("Initialization aborted")?;
    Ok(())
}

fn select_locations<C: ProductConfig>(
    config: &C,
    args: &InitArgs,
    caps: &CapabilitySet,
) -> Result<Manifest> {
    let component_dir = ask_path(
        "Where would you like to install components?",
        "componentDir",
        config.default_component_dir(),
        args.yes,
    )?;
    let utils_dir = ask_path(
        "Where would you like to install utilities?",
        "utilsDir",
        config.default_utils_dir(),
        args.yes,
    )?;
    let css_file = ask_path(
        "Path to your global CSS file:",
        "cssFile",
        config.default_css_file(),
        args.yes,
    )?;

    Ok(Manifest {
        typescript: caps.has_typed_language_config,
        component_dir,
        utils_dir,
        css_file,
        tailwind_config: caps.css_framework_config.map(PathBuf::from),
    })
}

fn ask_path(prompt: &str, key: &'static str, default: &str, yes: bool) -> Result<PathBuf> {
    if yes {
        return Ok(PathBuf::from(default));
    }

    let input: String = cliclack::input(prompt)
        .placeholder(default)
        .default_input(default)
        .validate(move |input: &String| {
            ensure_inside_root(key, Path::new(input.trim()))
                .map_err(|_| "Enter a relative path inside the project")
        })
        .interact()?;

    Ok(PathBuf::from(input.trim()))
}

fn confirm_without_tailwind(caps: &CapabilitySet, yes: bool) -> Result<bool> {
    let found = match &caps.declared_css_framework_version {
        Some(version) => format!("found tailwindcss {version}"),
        None => "tailwindcss is not a dependency".to_string(),
    };
    cliclack::log::warning(format!("Tailwind CSS v4+ not found ({found})"))?;
    cliclack::note(
        "Tailwind CSS v4.1 or higher is required",
        "bun add -d tailwindcss@^4.1.0\n\
         # or with npm: npm install -D tailwindcss@^4.1.0\n\
         # or with yarn: yarn add -D tailwindcss@^4.1.0",
    )?;

    if yes {
        cliclack::log::info("Continuing without Tailwind CSS v4 (--yes mode)")?;
        return Ok(true);
    }

    let proceed = cliclack::confirm("Continue anyway?")
        .initial_value(false)
        .interact()?;
    Ok(proceed)
}

fn print_next_steps<C: ProductConfig>(config: &C, root: &Path) -> Result<()> {
    let steps = config.next_steps(root);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro(format!("{} initialized!", config.display_name()))?;

    Ok(())
}
