//! Layered profile loading
//!
//! Profiles are YAML files in the profile directory (`~/.spinnaker` by
//! default). They are read in [`PROFILE_LAYERS`] order and deep-merged, later
//! layers overriding earlier ones. The merged map is decoded into an override
//! [`Settings`] and merged onto the defaults with [`configure_settings`].

use dinghy_fs::ConfigStore;
use serde_json::{Map, Value};
use std::path::PathBuf;

use crate::decode::{decode_profiles_to_settings, kind};
use crate::merge::configure_settings;
use crate::settings::Settings;
use crate::{Error, Result};

/// Profile file names, lowest precedence first.
pub const PROFILE_LAYERS: [&str; 4] = [
    "spinnaker.yml",
    "spinnaker-local.yml",
    "dinghy.yml",
    "dinghy-local.yml",
];

/// Loads settings from the compiled-in defaults and the profile files.
#[derive(Debug, Default)]
pub struct SettingsLoader {
    store: ConfigStore,

    /// When `None`, `~/.spinnaker` is used.
    profile_dir_override: Option<PathBuf>,
}

impl SettingsLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader that reads profiles from `profile_dir`.
    pub fn with_profile_dir(profile_dir: impl Into<PathBuf>) -> Self {
        Self {
            store: ConfigStore::new(),
            profile_dir_override: Some(profile_dir.into()),
        }
    }

    /// The directory profiles are read from, if one can be determined.
    pub fn profile_dir(&self) -> Option<PathBuf> {
        if let Some(ref dir) = self.profile_dir_override {
            return Some(dir.clone());
        }
        dirs::home_dir().map(|home| home.join(".spinnaker"))
    }

    /// Read and deep-merge all existing profile layers.
    ///
    /// Missing files are skipped. A file whose top level is not a map
    /// produces [`Error::Decode`]; unreadable or invalid YAML produces
    /// [`Error::Fs`].
    pub fn load_profiles(&self) -> Result<Map<String, Value>> {
        let mut merged = Map::new();

        let Some(profile_dir) = self.profile_dir() else {
            tracing::debug!("No home directory, skipping profiles");
            return Ok(Map::new());
        };

        for layer in PROFILE_LAYERS {
            let path = profile_dir.join(layer);
            if !path.is_file() {
                tracing::debug!(?path, "Profile not found, skipping");
                continue;
            }

            tracing::debug!(?path, "Loading profile");
            let profile: Value = self.store.load(&path)?;
            match &profile {
                // An empty YAML document
                Value::Null => {}
                Value::Object(map) => deep_merge_map(&mut merged, map),
                other => {
                    return Err(Error::decode(path.display().to_string(), "map", kind(other)));
                }
            }
        }

        Ok(merged)
    }

    /// Load settings on top of [`Settings::new_default`].
    pub fn load(&self) -> Result<Settings> {
        self.load_with_defaults(Settings::new_default())
    }

    /// Load settings on top of an explicit default value.
    pub fn load_with_defaults(&self, defaults: Settings) -> Result<Settings> {
        let profile = self.load_profiles()?;

        let mut overrides = Settings::default();
        decode_profiles_to_settings(&profile, &mut overrides)?;

        configure_settings(defaults, overrides)
    }
}

/// Deep merge `other` into `base`, `other` taking precedence.
///
/// Keys are matched ASCII case-insensitively, as decoding does. When two
/// spellings of a key meet, the later spelling is kept.
fn deep_merge_map(base: &mut Map<String, Value>, other: &Map<String, Value>) {
    for (key, other_val) in other {
        let existing = base
            .keys()
            .find(|base_key| base_key.eq_ignore_ascii_case(key))
            .cloned();

        match existing.and_then(|base_key| base.remove(&base_key)) {
            Some(mut base_val) => {
                deep_merge_value(&mut base_val, other_val);
                base.insert(key.clone(), base_val);
            }
            None => {
                base.insert(key.clone(), other_val.clone());
            }
        }
    }
}

/// Deep merge two JSON values
///
/// If both values are maps, merge them recursively with `other` taking precedence.
/// Otherwise, `other` replaces `base`.
fn deep_merge_value(base: &mut Value, other: &Value) {
    match (base, other) {
        (Value::Object(base_map), Value::Object(other_map)) => {
            deep_merge_map(base_map, other_map);
        }
        (base, other) => {
            *base = other.clone();
        }
    }
}
