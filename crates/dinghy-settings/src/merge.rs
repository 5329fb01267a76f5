//! Field-level merge of default and override settings
//!
//! Every leaf of the override replaces the matching leaf of the base unless
//! it is a zero value. Nested structures merge recursively, so overriding
//! `redis.base_url` alone keeps the base `redis.password`.

use std::path::Path;

use crate::settings::{DEFAULT_PARSER_FORMAT, Logging, Redis, RepoConfig, Server, Settings, Sql};
use crate::{Error, Result};

/// Overlay another value of the same shape onto `self`.
pub trait Merge {
    /// Merge `other` into `self`; non-zero fields of `other` take precedence.
    fn merge(&mut self, other: Self);
}

fn merge_string(base: &mut String, other: String) {
    if !other.is_empty() {
        *base = other;
    }
}

fn merge_bool(base: &mut bool, other: bool) {
    if other {
        *base = true;
    }
}

impl Merge for Redis {
    fn merge(&mut self, other: Self) {
        merge_string(&mut self.base_url, other.base_url);
        merge_string(&mut self.password, other.password);
    }
}

impl Merge for Sql {
    fn merge(&mut self, other: Self) {
        merge_string(&mut self.base_url, other.base_url);
        merge_string(&mut self.user, other.user);
        merge_string(&mut self.password, other.password);
        merge_string(&mut self.database_name, other.database_name);
        merge_bool(&mut self.enabled, other.enabled);
    }
}

impl Merge for Logging {
    fn merge(&mut self, other: Self) {
        merge_string(&mut self.level, other.level);
        merge_string(&mut self.file, other.file);
    }
}

impl Merge for Server {
    fn merge(&mut self, other: Self) {
        if other.port != 0 {
            self.port = other.port;
        }
    }
}

// A non-empty override list replaces the base list wholesale.
impl Merge for Vec<RepoConfig> {
    fn merge(&mut self, other: Self) {
        if !other.is_empty() {
            *self = other;
        }
    }
}

impl Merge for Settings {
    fn merge(&mut self, other: Self) {
        merge_string(&mut self.parser_format, other.parser_format);
        merge_string(&mut self.github_token, other.github_token);
        merge_string(&mut self.github_creds_path, other.github_creds_path);
        merge_string(&mut self.github_endpoint, other.github_endpoint);
        merge_string(&mut self.template_org, other.template_org);
        merge_string(&mut self.template_repo, other.template_repo);
        merge_string(&mut self.dinghy_filename, other.dinghy_filename);
        merge_string(&mut self.auto_lock_pipelines, other.auto_lock_pipelines);
        merge_bool(
            &mut self.json_validation_disabled,
            other.json_validation_disabled,
        );
        self.logging.merge(other.logging);
        self.server.merge(other.server);
        self.redis.merge(other.redis);
        self.sql.merge(other.sql);
        self.repo_config.merge(other.repo_config);
    }
}

/// Merge `overrides` onto `defaults` and complete the result.
///
/// After the field-level merge:
/// - an empty parser format becomes `"json"`
/// - an empty GitHub token is read from `github_creds_path` when that file exists
///
/// # Errors
///
/// Returns [`Error::Configuration`] if the credentials file is not in
/// `username:token` form, and [`Error::Fs`] if it cannot be read.
pub fn configure_settings(defaults: Settings, overrides: Settings) -> Result<Settings> {
    let mut settings = defaults;
    settings.merge(overrides);

    if settings.parser_format.is_empty() {
        settings.parser_format = DEFAULT_PARSER_FORMAT.to_string();
    }

    if settings.github_token.is_empty() && !settings.github_creds_path.is_empty() {
        let creds_path = Path::new(&settings.github_creds_path);
        if creds_path.is_file() {
            tracing::debug!(?creds_path, "Reading GitHub token from credentials file");
            settings.github_token = read_github_token(creds_path)?;
        } else {
            tracing::warn!(?creds_path, "GitHub credentials file not found, no token set");
        }
    }

    Ok(settings)
}

fn read_github_token(path: &Path) -> Result<String> {
    let content = dinghy_fs::io::read_text(path)?;
    let parts: Vec<&str> = content.trim().split(':').collect();

    match parts.as_slice() {
        [_, token] if !token.is_empty() => Ok((*token).to_string()),
        _ => Err(Error::Configuration {
            message: format!(
                "GitHub credentials file {} should have format 'username:token'",
                path.display()
            ),
        }),
    }
}
