//! WindElements Core - provisioning engine for the `windelements` CLI
//!
//! This library detects a project's toolchain, records install locations in a
//! per-project manifest (`components.json`), merges the design-token theme into
//! the global stylesheet and installs registry components with their
//! dependencies.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - probing, theme merging, utility staging,
//!   manifest storage, dependency resolution, file installation
//! - **Layer 2: Workflow Orchestration** - [`provision`] sequences the core
//!   operations for `init` and `add` without any prompting
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use windelements_core::{config, provision, registry::TemplateSource, OverwritePolicy};
//!
//! let manifest = config::read(&root).await?;
//! let source = TemplateSource::new("templates".into());
//! let registry = source.read_registry().await?;
//! let request = provision::ComponentRequest::Named(vec!["button".into()]);
//! let report =
//!     provision::apply_add(&root, &manifest, &registry, &request, OverwritePolicy::Skip, &source)
//!         .await?;
//! ```

pub mod config;
pub mod error;
pub mod install;
pub mod language;
pub mod probe;
pub mod product;
pub mod provision;
pub mod registry;
pub mod theme;
pub mod utilities;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::Manifest;
pub use error::{ProvisionError, Result};
pub use install::{InstallOutcome, OverwritePolicy, SessionReport};
pub use language::Language;
pub use probe::{probe, CapabilitySet};
pub use product::ProductConfig;
pub use registry::{resolve, ComponentDescriptor, Registry, TemplateSource};

#[cfg(feature = "tui")]
pub use tui::{run_add, run_init};
