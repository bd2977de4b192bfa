//! Project environment detection
//!
//! This module provides:
//! - Marker-file detection (tsconfig, Tailwind config, package.json)
//! - The Tailwind CSS version acceptance rule

pub mod check;

pub use check::{
    probe, tailwind_version_ok, CapabilitySet, MIN_TAILWIND_MAJOR, PACKAGE_MANIFEST,
    TAILWIND_CONFIGS, TYPESCRIPT_CONFIG,
};
