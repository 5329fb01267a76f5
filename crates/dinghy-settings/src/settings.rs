//! Settings types
//!
//! `Settings::default()` is the all-zero value used as an empty override.
//! The compiled-in configuration comes from [`Settings::new_default`].

pub const DEFAULT_PARSER_FORMAT: &str = "json";

const DEFAULT_GITHUB_ENDPOINT: &str = "https://api.github.com";
const DEFAULT_TEMPLATE_ORG: &str = "armory";
const DEFAULT_DINGHY_FILENAME: &str = "dinghyfile";
const DEFAULT_REDIS_URL: &str = "redis:6379";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_SERVER_PORT: u16 = 8081;

/// Source-control binding for one repository.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RepoConfig {
    /// Provider name, e.g. "github" or "bitbucket"
    pub provider: String,
    pub repo: String,
    pub branch: String,
}

/// Redis connection descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Redis {
    pub base_url: String,
    pub password: String,
}

/// SQL connection descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sql {
    pub base_url: String,
    pub user: String,
    pub password: String,
    pub database_name: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Logging {
    /// Filter directive, e.g. "info" or "dinghy_settings=debug"
    pub level: String,
    /// Log file path; empty logs to stdout
    pub file: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Server {
    pub port: u16,
}

/// The merged, typed configuration of the process.
///
/// Zero values (empty strings, `false`, `0`, empty sequences) mean
/// "not set" when a value is used as an override.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Settings {
    /// Dinghyfile parser: "json", "yaml" or "hcl"
    pub parser_format: String,
    pub github_token: String,
    /// File holding `username:token`, read when no token is configured
    pub github_creds_path: String,
    pub github_endpoint: String,
    pub template_org: String,
    pub template_repo: String,
    pub dinghy_filename: String,
    pub auto_lock_pipelines: String,
    pub json_validation_disabled: bool,
    pub logging: Logging,
    pub server: Server,
    pub redis: Redis,
    pub sql: Sql,
    pub repo_config: Vec<RepoConfig>,
}

impl Settings {
    /// Create the compiled-in default configuration.
    pub fn new_default() -> Self {
        Self {
            parser_format: DEFAULT_PARSER_FORMAT.to_string(),
            github_endpoint: DEFAULT_GITHUB_ENDPOINT.to_string(),
            template_org: DEFAULT_TEMPLATE_ORG.to_string(),
            dinghy_filename: DEFAULT_DINGHY_FILENAME.to_string(),
            auto_lock_pipelines: "true".to_string(),
            logging: Logging {
                level: DEFAULT_LOG_LEVEL.to_string(),
                file: String::new(),
            },
            server: Server {
                port: DEFAULT_SERVER_PORT,
            },
            redis: Redis {
                base_url: DEFAULT_REDIS_URL.to_string(),
                password: String::new(),
            },
            ..Self::default()
        }
    }

    /// Find the configuration for a provider/repository pair.
    ///
    /// Both names must match exactly. Entries are scanned in order and the
    /// first match wins.
    pub fn get_repo_config(&self, provider: &str, repo: &str) -> Option<RepoConfig> {
        self.repo_config
            .iter()
            .find(|c| c.provider == provider && c.repo == repo)
            .cloned()
    }
}
