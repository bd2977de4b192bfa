//! Dependency resolution for `add`
//!
//! Depth-first expansion with three-state marking:
//!
//! 1. unvisited: not in `marks`
//! 2. in progress: on the current expansion path
//! 3. done: already appended to the install order
//!
//! Reaching an in-progress node again means the path loops back on itself.
//! Each component is appended after all of its dependencies, so the order is
//! dependencies first.

use super::manifest::{ComponentDescriptor, Registry};
use crate::error::{ProvisionError, Result};
use std::collections::{BTreeSet, HashMap};

/// Components to install, in order, plus the utilities they need
#[derive(Debug)]
pub struct Resolution<'r> {
    pub order: Vec<&'r ComponentDescriptor>,
    pub utilities: BTreeSet<String>,
}

impl Resolution<'_> {
    pub fn names(&self) -> Vec<&str> {
        self.order.iter().map(|c| c.name.as_str()).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    InProgress,
    Done,
}

struct ResolveContext<'r> {
    registry: &'r Registry,
    marks: HashMap<&'r str, Mark>,
    /// Current expansion path, used to report cycles
    path: Vec<&'r str>,
    order: Vec<&'r ComponentDescriptor>,
}

impl<'r> ResolveContext<'r> {
    fn visit(&mut self, name: &str) -> Result<()> {
        match self.marks.get(name) {
            Some(Mark::Done) => return Ok(()),
            Some(Mark::InProgress) => {
                let start = self.path.iter().position(|n| *n == name).unwrap_or(0);
                let mut chain: Vec<&str> = self.path[start..].to_vec();
                chain.push(name);
                return Err(ProvisionError::CycleDetected {
                    chain: chain.join(" -> "),
                });
            }
            None => {}
        }

        let registry = self.registry;
        let component = registry
            .get(name)
            .ok_or_else(|| ProvisionError::UnknownComponent {
                name: name.to_string(),
            })?;
        let key = component.name.as_str();

        self.marks.insert(key, Mark::InProgress);
        self.path.push(key);
        for dependency in &component.depends_on {
            self.visit(dependency)?;
        }
        self.path.pop();
        self.marks.insert(key, Mark::Done);
        self.order.push(component);
        Ok(())
    }
}

/// Expand `requested` to its transitive closure in install order
///
/// Requested names are expanded in the order given; duplicates are ignored.
pub fn resolve<'r, S: AsRef<str>>(
    requested: &[S],
    registry: &'r Registry,
) -> Result<Resolution<'r>> {
    let mut ctx = ResolveContext {
        registry,
        marks: HashMap::new(),
        path: Vec::new(),
        order: Vec::new(),
    };

    for name in requested {
        ctx.visit(name.as_ref())?;
    }

    let utilities = ctx
        .order
        .iter()
        .flat_map(|c| c.utilities.iter().cloned())
        .collect();

    let resolution = Resolution {
        order: ctx.order,
        utilities,
    };
    tracing::debug!(
        order = ?resolution.names(),
        utilities = ?resolution.utilities,
        "resolved components"
    );
    Ok(resolution)
}
