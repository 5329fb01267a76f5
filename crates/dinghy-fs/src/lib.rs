//! Filesystem layer for dinghy
//!
//! Reads profile and configuration files and deserializes them according to
//! their extension.

pub mod config;
pub mod error;
pub mod io;

pub use config::ConfigStore;
pub use error::{Error, Result};
