//! Read-only view over an external store

use crate::store::{DependencyStore, StoreClient};

/// Store that reads through a [`StoreClient`] and never writes.
///
/// Reads forward the client's result unchanged, errors included: there
/// is no retry and no translation. `set_deps`, `set_raw_data` and `clear`
/// are no-ops, and `set_raw_data` always reports success.
#[derive(Debug, Clone)]
pub struct ReadOnlyStore<C> {
    client: C,
}

impl<C: StoreClient> ReadOnlyStore<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// The underlying client.
    pub fn client(&self) -> &C {
        &self.client
    }
}

impl<C: StoreClient> DependencyStore for ReadOnlyStore<C> {
    type Error = C::Error;

    fn set_deps(&self, parent: &str, _deps: &[String]) {
        tracing::trace!(parent, "Read-only store ignores set_deps");
    }

    fn get_roots(&self, url: &str) -> Result<Vec<String>, Self::Error> {
        self.client.roots(url)
    }

    fn set_raw_data(&self, url: &str, _raw_data: &str) -> Result<(), Self::Error> {
        tracing::trace!(url, "Read-only store ignores set_raw_data");
        Ok(())
    }

    fn get_raw_data(&self, url: &str) -> Result<String, Self::Error> {
        self.client.raw_data(url)
    }

    fn clear(&self) {
        tracing::trace!("Read-only store ignores clear");
    }
}
