//! Component file installation
//!
//! This module provides:
//! - The overwrite/skip policy
//! - Best-effort per-file materialization
//! - The session report of per-file outcomes

pub mod copier;
pub mod report;

pub use copier::{materialize, OverwritePolicy, UTILS_PLACEHOLDER};
pub use report::{FileReport, InstallOutcome, OutcomeCounts, SessionReport};
