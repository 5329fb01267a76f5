//! Decoding of untyped profile maps into [`Settings`]
//!
//! Each settings struct enumerates the profile keys it understands. Keys are
//! matched case-insensitively. Only keys present in the profile are written,
//! so decoding onto an existing value is a partial update. `null` values and
//! unknown keys leave the target untouched.

use serde_json::{Map, Value};

use crate::settings::{Logging, Redis, RepoConfig, Server, Settings, Sql};
use crate::{Error, Result};

/// Decode a profile map onto `target`.
///
/// # Errors
///
/// Returns [`Error::Decode`] at the first value whose type does not fit its
/// field. Fields decoded before the mismatch keep their new values.
///
/// # Example
///
/// ```
/// use dinghy_settings::{Settings, decode_profiles_to_settings};
///
/// let profile = serde_json::json!({ "redis": { "baseUrl": "cache:6379" } });
/// let mut settings = Settings::default();
/// decode_profiles_to_settings(profile.as_object().unwrap(), &mut settings).unwrap();
///
/// assert_eq!(settings.redis.base_url, "cache:6379");
/// ```
pub fn decode_profiles_to_settings(
    profile: &Map<String, Value>,
    target: &mut Settings,
) -> Result<()> {
    decode_map(profile, target, "")
}

/// Explicit key schema for one settings struct.
trait ProfileSchema {
    /// Write `value` into the field named by the lower-cased `key`.
    ///
    /// Returns `Ok(false)` when the key is not part of the schema.
    fn decode_field(&mut self, key: &str, path: &str, value: &Value) -> Result<bool>;
}

fn decode_map<T: ProfileSchema>(
    map: &Map<String, Value>,
    target: &mut T,
    prefix: &str,
) -> Result<()> {
    for (key, value) in map {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };

        if value.is_null() {
            continue;
        }

        if !target.decode_field(&key.to_ascii_lowercase(), &path, value)? {
            tracing::trace!(key = %path, "Ignoring unrecognised profile key");
        }
    }
    Ok(())
}

pub(crate) fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "map",
    }
}

fn expect_string(path: &str, value: &Value) -> Result<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| Error::decode(path, "string", kind(value)))
}

fn expect_bool(path: &str, value: &Value) -> Result<bool> {
    value
        .as_bool()
        .ok_or_else(|| Error::decode(path, "boolean", kind(value)))
}

fn expect_port(path: &str, value: &Value) -> Result<u16> {
    match value.as_u64() {
        Some(n) => {
            u16::try_from(n).map_err(|_| Error::decode(path, "port number", n.to_string()))
        }
        None => Err(Error::decode(path, "port number", kind(value))),
    }
}

fn expect_map<'v>(path: &str, value: &'v Value) -> Result<&'v Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| Error::decode(path, "map", kind(value)))
}

fn decode_repo_configs(path: &str, value: &Value) -> Result<Vec<RepoConfig>> {
    let items = value
        .as_array()
        .ok_or_else(|| Error::decode(path, "array", kind(value)))?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let item_path = format!("{path}[{index}]");
            let mut repo_config = RepoConfig::default();
            decode_map(expect_map(&item_path, item)?, &mut repo_config, &item_path)?;
            Ok(repo_config)
        })
        .collect()
}

impl ProfileSchema for Settings {
    fn decode_field(&mut self, key: &str, path: &str, value: &Value) -> Result<bool> {
        match key {
            "parserformat" => self.parser_format = expect_string(path, value)?,
            "githubtoken" => self.github_token = expect_string(path, value)?,
            "githubcredspath" => self.github_creds_path = expect_string(path, value)?,
            "githubendpoint" => self.github_endpoint = expect_string(path, value)?,
            "templateorg" => self.template_org = expect_string(path, value)?,
            "templaterepo" => self.template_repo = expect_string(path, value)?,
            "dinghyfilename" => self.dinghy_filename = expect_string(path, value)?,
            "autolockpipelines" => self.auto_lock_pipelines = expect_string(path, value)?,
            "jsonvalidationdisabled" => {
                self.json_validation_disabled = expect_bool(path, value)?;
            }
            "logging" => decode_map(expect_map(path, value)?, &mut self.logging, path)?,
            "server" => decode_map(expect_map(path, value)?, &mut self.server, path)?,
            "redis" => decode_map(expect_map(path, value)?, &mut self.redis, path)?,
            "sql" => decode_map(expect_map(path, value)?, &mut self.sql, path)?,
            "repoconfig" => self.repo_config = decode_repo_configs(path, value)?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}

impl ProfileSchema for Redis {
    fn decode_field(&mut self, key: &str, path: &str, value: &Value) -> Result<bool> {
        match key {
            "baseurl" => self.base_url = expect_string(path, value)?,
            "password" => self.password = expect_string(path, value)?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}

impl ProfileSchema for Sql {
    fn decode_field(&mut self, key: &str, path: &str, value: &Value) -> Result<bool> {
        match key {
            "baseurl" => self.base_url = expect_string(path, value)?,
            "user" => self.user = expect_string(path, value)?,
            "password" => self.password = expect_string(path, value)?,
            "databasename" => self.database_name = expect_string(path, value)?,
            "enabled" => self.enabled = expect_bool(path, value)?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}

impl ProfileSchema for Logging {
    fn decode_field(&mut self, key: &str, path: &str, value: &Value) -> Result<bool> {
        match key {
            "level" => self.level = expect_string(path, value)?,
            "file" => self.file = expect_string(path, value)?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}

impl ProfileSchema for Server {
    fn decode_field(&mut self, key: &str, path: &str, value: &Value) -> Result<bool> {
        match key {
            "port" => self.port = expect_port(path, value)?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}

impl ProfileSchema for RepoConfig {
    fn decode_field(&mut self, key: &str, path: &str, value: &Value) -> Result<bool> {
        match key {
            "provider" => self.provider = expect_string(path, value)?,
            "repo" => self.repo = expect_string(path, value)?,
            "branch" => self.branch = expect_string(path, value)?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}
