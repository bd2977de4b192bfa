//! Per-project manifest (`components.json`) and path rules

pub mod manifest;
pub mod paths;

pub use manifest::{exists, read, write, Manifest, MANIFEST_FILE};
pub use paths::{ensure_inside_root, module_specifier};
