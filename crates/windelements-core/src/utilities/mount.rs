//! Mount-point registry, the model the emitted `Portal` helper follows
//!
//! One container exists per identifier. It is created on first request and
//! shared by every later request for the same id until torn down.

use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug)]
pub struct MountRegistry<H> {
    mounts: HashMap<String, Rc<H>>,
}

impl<H> Default for MountRegistry<H> {
    fn default() -> Self {
        Self {
            mounts: HashMap::new(),
        }
    }
}

impl<H> MountRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the container for `id`, creating it with `create` if absent
    pub fn get_or_create(&mut self, id: &str, create: impl FnOnce() -> H) -> Rc<H> {
        Rc::clone(
            self.mounts
                .entry(id.to_string())
                .or_insert_with(|| Rc::new(create())),
        )
    }

    pub fn get(&self, id: &str) -> Option<Rc<H>> {
        self.mounts.get(id).cloned()
    }

    /// Drop the registry's handle; outstanding handles stay valid
    pub fn teardown(&mut self, id: &str) -> Option<Rc<H>> {
        self.mounts.remove(id)
    }

    pub fn len(&self) -> usize {
        self.mounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mounts.is_empty()
    }
}
