//! # Configuration
//!
//! Manages the loading and parsing of the application's configuration file (`config.yaml`).
//! Only the Matrix credentials are mandatory; every other section falls back to the
//! reference behaviour (15-20 minute pauses, 5s/3s cooldowns, 10s remark timeout).

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_CONFIG_PATH: &str = "data/config.yaml";

/// Main application configuration structure.
/// Matches the layout of `data/config.yaml`.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub services: ServicesConfig,
    #[serde(default)]
    pub triggers: TriggersConfig,
    #[serde(default)]
    pub remarks: RemarksConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Reads and validates the YAML file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: AppConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let pause = &self.triggers.pause;
        if pause.min_minutes > pause.max_minutes {
            bail!(
                "triggers.pause.min_minutes ({}) exceeds max_minutes ({})",
                pause.min_minutes,
                pause.max_minutes
            );
        }
        if self.remarks.timeout_seconds == 0 {
            bail!("remarks.timeout_seconds must be greater than zero");
        }
        Ok(())
    }
}

/// Configuration for various connected services.
#[derive(Debug, Deserialize, Clone)]
pub struct ServicesConfig {
    pub matrix: MatrixConfig,
}

/// Specific configuration for the Matrix service.
#[derive(Debug, Deserialize, Clone)]
pub struct MatrixConfig {
    pub homeserver: String,
    pub username: String,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default = "default_password_env")]
    pub password_env: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl MatrixConfig {
    /// Picks the login password: command line first, then the file, then the environment.
    pub fn resolve_password(&self, cli_override: Option<&str>) -> Result<String> {
        self.resolve_password_with(cli_override, |key| std::env::var(key).ok())
    }

    fn resolve_password_with<F>(&self, cli_override: Option<&str>, lookup: F) -> Result<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let candidates = [
            cli_override.map(str::to_string),
            self.password.clone(),
            lookup(&self.password_env),
        ];
        candidates
            .into_iter()
            .flatten()
            .find(|p| !p.is_empty())
            .with_context(|| {
                format!(
                    "No Matrix password provided. Use --password, services.matrix.password or the {} environment variable",
                    self.password_env
                )
            })
    }
}

fn default_password_env() -> String {
    "DADBOT_PASSWORD".to_string()
}

#[derive(Debug, Default, Deserialize, Clone)]
pub struct TriggersConfig {
    #[serde(default)]
    pub pause: PauseConfig,
    #[serde(default)]
    pub cooldowns: CooldownConfig,
}

/// Bounds (inclusive, whole minutes) for a randomized pause.
#[derive(Debug, Deserialize, Clone)]
pub struct PauseConfig {
    #[serde(default = "default_pause_min")]
    pub min_minutes: u64,
    #[serde(default = "default_pause_max")]
    pub max_minutes: u64,
}

impl Default for PauseConfig {
    fn default() -> Self {
        Self {
            min_minutes: default_pause_min(),
            max_minutes: default_pause_max(),
        }
    }
}

fn default_pause_min() -> u64 {
    15
}
fn default_pause_max() -> u64 {
    20
}

#[derive(Debug, Deserialize, Clone)]
pub struct CooldownConfig {
    #[serde(default = "default_joke_cooldown")]
    pub joke_seconds: u64,
    #[serde(default = "default_goodnight_cooldown")]
    pub goodnight_seconds: u64,
}

impl CooldownConfig {
    pub fn joke(&self) -> Duration {
        Duration::from_secs(self.joke_seconds)
    }

    pub fn goodnight(&self) -> Duration {
        Duration::from_secs(self.goodnight_seconds)
    }
}

impl Default for CooldownConfig {
    fn default() -> Self {
        Self {
            joke_seconds: default_joke_cooldown(),
            goodnight_seconds: default_goodnight_cooldown(),
        }
    }
}

fn default_joke_cooldown() -> u64 {
    5
}
fn default_goodnight_cooldown() -> u64 {
    3
}

/// Remote joke service settings.
#[derive(Debug, Deserialize, Clone)]
pub struct RemarksConfig {
    #[serde(default = "default_remark_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_remark_timeout")]
    pub timeout_seconds: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl RemarksConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for RemarksConfig {
    fn default() -> Self {
        Self {
            endpoint: default_remark_endpoint(),
            timeout_seconds: default_remark_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_remark_endpoint() -> String {
    "https://icanhazdadjoke.com/".to_string()
}
fn default_remark_timeout() -> u64 {
    10
}
fn default_user_agent() -> String {
    concat!("dadbot/", env!("CARGO_PKG_VERSION")).to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_dir")]
    pub directory: String,
    #[serde(default = "default_log_file")]
    pub file: String,
    #[serde(default = "default_json")]
    pub json: bool,
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: default_log_dir(),
            file: default_log_file(),
            json: default_json(),
            filter: default_filter(),
        }
    }
}

fn default_log_dir() -> String {
    "data".to_string()
}
fn default_log_file() -> String {
    "session.log".to_string()
}
fn default_json() -> bool {
    true
}
fn default_filter() -> String {
    "info,matrix_sdk=warn,matrix_sdk_base=warn,matrix_sdk_crypto=error,ruma=warn,hyper=warn"
        .to_string()
}
