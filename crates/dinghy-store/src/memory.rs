//! In-memory mutable store

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::store::{DependencyStore, StoreClient};
use crate::{Error, Result};

#[derive(Debug, Default)]
struct State {
    /// url -> parents that depend on it, in registration order
    roots: HashMap<String, Vec<String>>,
    raw_data: HashMap<String, String>,
}

/// Mutable store kept in process memory.
///
/// `set_deps(parent, deps)` registers `parent` as a root of every URL in
/// `deps`. A `MemoryStore` is also a [`StoreClient`], so a
/// [`ReadOnlyStore`](crate::ReadOnlyStore) can be layered over it.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<State>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // State stays consistent across a panicked writer: every write is a
    // single map operation.
    fn read(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DependencyStore for MemoryStore {
    type Error = Error;

    fn set_deps(&self, parent: &str, deps: &[String]) {
        let mut state = self.write();
        for dep in deps {
            let roots = state.roots.entry(dep.clone()).or_default();
            if !roots.iter().any(|root| root == parent) {
                roots.push(parent.to_string());
            }
        }
        tracing::debug!(parent, count = deps.len(), "Registered dependencies");
    }

    fn get_roots(&self, url: &str) -> Result<Vec<String>> {
        Ok(self.read().roots.get(url).cloned().unwrap_or_default())
    }

    fn set_raw_data(&self, url: &str, raw_data: &str) -> Result<()> {
        self.write()
            .raw_data
            .insert(url.to_string(), raw_data.to_string());
        Ok(())
    }

    fn get_raw_data(&self, url: &str) -> Result<String> {
        self.read()
            .raw_data
            .get(url)
            .cloned()
            .ok_or_else(|| Error::RawDataNotFound {
                url: url.to_string(),
            })
    }

    fn clear(&self) {
        let mut state = self.write();
        state.roots.clear();
        state.raw_data.clear();
        tracing::debug!("Cleared store");
    }
}

impl StoreClient for MemoryStore {
    type Error = Error;

    fn roots(&self, url: &str) -> Result<Vec<String>> {
        self.get_roots(url)
    }

    fn raw_data(&self, url: &str) -> Result<String> {
        self.get_raw_data(url)
    }
}
