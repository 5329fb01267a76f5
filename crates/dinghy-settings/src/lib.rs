//! Settings resolution for dinghy
//!
//! Builds the process-wide [`Settings`] from three inputs:
//!
//! - **Defaults** - the compiled-in configuration from [`Settings::new_default`]
//! - **Profiles** - untyped YAML maps decoded with [`decode_profiles_to_settings`]
//! - **Overrides** - a typed [`Settings`] merged field by field with [`configure_settings`]
//!
//! # Example
//!
//! ```ignore
//! use dinghy_settings::{Settings, SettingsLoader};
//!
//! let settings = SettingsLoader::new().load()?;
//! if let Some(repo) = settings.get_repo_config("github", "pipelines") {
//!     println!("watching branch {}", repo.branch);
//! }
//! ```

pub mod decode;
pub mod error;
pub mod loader;
pub mod logging;
pub mod merge;
pub mod settings;

pub use decode::decode_profiles_to_settings;
pub use error::{Error, Result};
pub use loader::{PROFILE_LAYERS, SettingsLoader};
pub use merge::{Merge, configure_settings};
pub use settings::{Logging, Redis, RepoConfig, Server, Settings, Sql};
