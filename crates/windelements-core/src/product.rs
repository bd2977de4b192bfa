//! Product configuration trait for CLI binaries
//!
//! The engine never hardcodes product identity; the binary supplies it through
//! this trait so the same core can back differently branded CLIs.

use std::path::Path;

/// Configuration trait for a provisioning product
///
/// Each product defines:
/// - Product identity (name, display name)
/// - Default install locations
/// - Where bundled templates are looked up
/// - Post-init instructions
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for CLI command, env vars)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Default destination for component files, relative to the project root
    fn default_component_dir(&self) -> &'static str {
        "src/components/ui"
    }

    /// Default destination for shared utilities
    fn default_utils_dir(&self) -> &'static str {
        "src/lib"
    }

    /// Default global stylesheet the theme is merged into
    fn default_css_file(&self) -> &'static str {
        "src/styles/globals.css"
    }

    /// Environment variable name for overriding the bundled template directory
    fn template_dir_env(&self) -> &'static str;

    /// Generate the "next steps" instructions after initialization
    fn next_steps(&self, dir: &Path) -> Vec<String>;

    /// Upgrade/install command shown in version warnings
    fn upgrade_command(&self) -> &'static str;
}
