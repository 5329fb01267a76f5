//! Dependency store capability for dinghy
//!
//! Callers are written against [`DependencyStore`] and do not need to know
//! which variant they hold:
//!
//! - [`MemoryStore`] records dependencies and raw dinghyfile payloads
//! - [`ReadOnlyStore`] forwards reads to an external [`StoreClient`] and
//!   discards every write

pub mod error;
pub mod memory;
pub mod readonly;
pub mod store;

pub use error::{Error, Result};
pub use memory::MemoryStore;
pub use readonly::ReadOnlyStore;
pub use store::{DependencyStore, StoreClient};
