//! CLI prompts using cliclack (Charm-style inline prompts)
//!
//! This module is optional and only available when the `tui` feature is enabled.

#[cfg(feature = "tui")]
mod add;
#[cfg(feature = "tui")]
mod init;
#[cfg(feature = "tui")]
mod terminal;

#[cfg(feature = "tui")]
pub use add::{run_add, AddArgs};
#[cfg(feature = "tui")]
pub use init::{run_init, InitArgs};
#[cfg(feature = "tui")]
pub use terminal::{install_terminal_guards, restore_cursor};

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Resolve the project root from an optional `--cwd`
pub(crate) fn project_root(cwd: Option<&Path>) -> Result<PathBuf> {
    let current_dir = std::env::current_dir().context("Failed to read current directory")?;
    let root = match cwd {
        Some(dir) if dir.is_absolute() => dir.to_path_buf(),
        Some(dir) => current_dir.join(dir),
        None => current_dir,
    };
    if !root.is_dir() {
        anyhow::bail!("Project directory does not exist: {}", root.display());
    }
    Ok(root)
}
