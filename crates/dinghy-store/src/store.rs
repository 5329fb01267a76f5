//! Store traits

use std::sync::Arc;

/// Client for an external store that answers the two read queries.
pub trait StoreClient: Send + Sync {
    /// Error reported by the underlying store.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Dependency roots registered for `url`.
    fn roots(&self, url: &str) -> Result<Vec<String>, Self::Error>;

    /// Raw payload previously stored for `url`.
    fn raw_data(&self, url: &str) -> Result<String, Self::Error>;
}

impl<C: StoreClient + ?Sized> StoreClient for Arc<C> {
    type Error = C::Error;

    fn roots(&self, url: &str) -> Result<Vec<String>, Self::Error> {
        (**self).roots(url)
    }

    fn raw_data(&self, url: &str) -> Result<String, Self::Error> {
        (**self).raw_data(url)
    }
}

/// Capability shared by the mutable and read-only stores.
///
/// Implementations that cannot mutate treat the setters and `clear` as
/// no-ops rather than failing.
pub trait DependencyStore: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Record that `parent` depends on each of `deps`.
    fn set_deps(&self, parent: &str, deps: &[String]);

    /// Roots registered for `url`; empty when there are none.
    fn get_roots(&self, url: &str) -> Result<Vec<String>, Self::Error>;

    /// Store the raw payload for `url`.
    fn set_raw_data(&self, url: &str, raw_data: &str) -> Result<(), Self::Error>;

    /// Raw payload stored for `url`.
    fn get_raw_data(&self, url: &str) -> Result<String, Self::Error>;

    /// Remove everything.
    fn clear(&self);
}
