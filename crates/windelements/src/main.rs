//! WindElements CLI - add UI components to vanilla JS/TS projects

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use windelements_core::registry::{print_components, TemplateSource};
use windelements_core::tui::{AddArgs, InitArgs};
use windelements_core::ProductConfig;

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable holding the tracing filter
const LOG_ENV: &str = "WINDELEMENTS_LOG";

/// WindElements product configuration
#[derive(Clone)]
pub struct WindElementsConfig;

impl ProductConfig for WindElementsConfig {
    fn name(&self) -> &'static str {
        "windelements"
    }

    fn display_name(&self) -> &'static str {
        "WindElements"
    }

    fn template_dir_env(&self) -> &'static str {
        "WINDELEMENTS_TEMPLATE_DIR"
    }

    fn upgrade_command(&self) -> &'static str {
        "cargo install windelements --force"
    }

    fn next_steps(&self, dir: &Path) -> Vec<String> {
        let mut steps = Vec::new();

        if std::env::current_dir().ok().as_deref() != Some(dir) {
            steps.push(format!("cd {}", dir.display()));
        }
        steps.push("Add components: windelements add button".to_string());
        steps.push("Or add all: windelements add --all".to_string());

        steps
    }
}

#[derive(Parser, Debug)]
#[command(name = "windelements")]
#[command(about = "Add production-ready UI components to your vanilla JS/TS project")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize WindElements in your project
    Init(CliInitArgs),
    /// Add components to your project
    Add(CliAddArgs),
    /// List the components available in the bundled registry
    List(ListArgs),
}

#[derive(Parser, Debug)]
pub struct CliInitArgs {
    /// Overwrite an existing components.json without asking
    #[arg(long)]
    pub overwrite: bool,

    /// Accept default locations and confirmations (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,

    /// Project directory (defaults to the current directory)
    #[arg(short, long)]
    pub cwd: Option<PathBuf>,

    /// Local template directory to use instead of the bundled one (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,
}

impl From<CliInitArgs> for InitArgs {
    fn from(args: CliInitArgs) -> Self {
        InitArgs {
            cwd: args.cwd,
            template_dir: args.template_dir,
            overwrite: args.overwrite,
            yes: args.yes,
        }
    }
}

#[derive(Parser, Debug)]
pub struct CliAddArgs {
    /// Components to add
    pub components: Vec<String>,

    /// Add all available components
    #[arg(long, conflicts_with = "components")]
    pub all: bool,

    /// Overwrite existing component files
    #[arg(long)]
    pub overwrite: bool,

    /// Never prompt (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,

    /// Project directory (defaults to the current directory)
    #[arg(short, long)]
    pub cwd: Option<PathBuf>,

    /// Local template directory to use instead of the bundled one (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,
}

impl From<CliAddArgs> for AddArgs {
    fn from(args: CliAddArgs) -> Self {
        AddArgs {
            components: args.components,
            all: args.all,
            overwrite: args.overwrite,
            yes: args.yes,
            cwd: args.cwd,
            template_dir: args.template_dir,
        }
    }
}

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Local template directory to use instead of the bundled one (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,
}

/// Initialize tracing on stderr so prompts on stdout stay clean
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn list(config: &WindElementsConfig, args: ListArgs) -> Result<()> {
    let source = TemplateSource::locate(config, args.template_dir.as_deref()).ok_or_else(|| {
        anyhow::anyhow!(
            "Bundled templates not found. Pass --template-dir or set {}",
            config.template_dir_env()
        )
    })?;
    let registry = source.read_registry().await?;
    print_components(&registry);
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic and Ctrl+C
    windelements_core::tui::install_terminal_guards();
    init_tracing();

    let args = Args::parse();
    let config = WindElementsConfig;

    let result = match args.command {
        Command::Init(init_args) => windelements_core::run_init(&config, init_args.into()).await,
        Command::Add(add_args) => {
            windelements_core::run_add(&config, add_args.into(), CLI_VERSION).await
        }
        Command::List(list_args) => list(&config, list_args).await,
    };

    // Ensure cursor is visible on normal exit
    windelements_core::tui::restore_cursor();

    match result {
        // Esc at a prompt is a cancellation, not a failure
        Err(e) if is_interrupted(&e) => Ok(()),
        other => other,
    }
}

fn is_interrupted(err: &anyhow::Error) -> bool {
    err.downcast_ref::<std::io::Error>()
        .is_some_and(|e| e.kind() == std::io::ErrorKind::Interrupted)
}
