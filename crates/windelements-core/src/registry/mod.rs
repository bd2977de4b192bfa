//! Component registry: bundled descriptors, lookup and dependency resolution
//!
//! This module provides:
//! - Registry types (Registry, ComponentDescriptor, FileEntry)
//! - Locating the bundled template directory
//! - Dependency resolution into an install order
//! - Version compatibility checking

pub mod manifest;
pub mod resolve;
pub mod source;
pub mod version;

use colored::Colorize;

pub use manifest::{ComponentDescriptor, FileEntry, Registry, REGISTRY_FILE};
pub use resolve::{resolve, Resolution};
pub use source::TemplateSource;
pub use version::check_compatibility;

/// Print every registry component with its description and dependencies
pub fn print_components(registry: &Registry) {
    println!(
        "{}",
        format!("{} component(s) available:", registry.components.len())
            .cyan()
            .bold()
    );
    println!();

    let width = registry
        .components
        .iter()
        .map(|c| c.name.len())
        .max()
        .unwrap_or(0);

    for component in &registry.components {
        let name = format!("{:width$}", component.name, width = width);
        print!("  {} {}  {}", "->".blue(), name.green(), component.description);
        if !component.depends_on.is_empty() {
            print!(" {}", format!("(needs {})", component.depends_on.join(", ")).dimmed());
        }
        println!();
    }
}
