//! Configuration management for the split policy and command timeout.
//!
//! Stores configuration in JSON format at `~/.netkit/config.json`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use crate::adapters::interfaces::DEFAULT_COMMAND_TIMEOUT;
use crate::domain::SplitPolicy;
use crate::error::{Error, Result};

/// Configuration data stored in JSON format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Policy used when no policy is requested explicitly.
    #[serde(default, rename = "splitPolicy")]
    pub split_policy: SplitPolicy,

    /// Interface lookup command timeout in milliseconds.
    #[serde(default = "default_command_timeout_ms", rename = "commandTimeoutMs")]
    pub command_timeout_ms: u64,
}

fn default_command_timeout_ms() -> u64 {
    DEFAULT_COMMAND_TIMEOUT.as_millis() as u64
}

impl Default for Config {
    fn default() -> Self {
        Self {
            split_policy: SplitPolicy::default(),
            command_timeout_ms: default_command_timeout_ms(),
        }
    }
}

impl Config {
    /// The command timeout as a duration.
    pub fn command_timeout(&self) -> Duration {
        Duration::from_millis(self.command_timeout_ms)
    }
}

/// Configuration store for managing settings.
///
/// Handles reading and writing configuration to `~/.netkit/config.json`.
pub struct ConfigStore {
    /// Path to the configuration file.
    config_path: PathBuf,
}

impl ConfigStore {
    /// Create a new config store with the default path.
    ///
    /// Default path: `~/.netkit/config.json`
    pub fn new() -> Result<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| Error::Config("Could not determine home directory".to_string()))?;

        let config_dir = home.join(".netkit");
        let config_path = config_dir.join("config.json");

        Ok(Self { config_path })
    }

    /// Create a config store with a custom path (for testing).
    pub fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Get the configuration file path.
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Load configuration from disk.
    ///
    /// Returns default config if the file doesn't exist. A zero command
    /// timeout is replaced by the default.
    pub async fn load(&self) -> Result<Config> {
        if !fs::try_exists(&self.config_path).await? {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&self.config_path).await?;
        let mut config: Config = serde_json::from_str(&content)?;

        if config.command_timeout_ms == 0 {
            warn!(
                path = %self.config_path.display(),
                "commandTimeoutMs is 0, using the default"
            );
            config.command_timeout_ms = default_command_timeout_ms();
        }

        Ok(config)
    }

    /// Save configuration to disk.
    ///
    /// The file is written next to its final path and renamed into place,
    /// so readers never see a partial file.
    pub async fn save(&self, config: &Config) -> Result<()> {
        if let Some(config_dir) = self.config_path.parent() {
            fs::create_dir_all(config_dir).await?;
        }

        let mut content = serde_json::to_vec_pretty(config)?;
        content.push(b'\n');

        let staging = self.config_path.with_extension("json.tmp");
        let mut file = fs::File::create(&staging).await?;
        file.write_all(&content).await?;
        file.sync_all().await?;
        drop(file);

        fs::rename(&staging, &self.config_path).await?;
        debug!(path = %self.config_path.display(), "saved config");
        Ok(())
    }

    // =========================================================================
    // Settings
    // =========================================================================

    /// Get the default split policy.
    pub async fn get_split_policy(&self) -> Result<SplitPolicy> {
        let config = self.load().await?;
        Ok(config.split_policy)
    }

    /// Set the default split policy.
    pub async fn set_split_policy(&self, policy: SplitPolicy) -> Result<()> {
        let mut config = self.load().await?;
        config.split_policy = policy;
        self.save(&config).await
    }

    /// Get the interface lookup command timeout.
    pub async fn get_command_timeout(&self) -> Result<Duration> {
        let config = self.load().await?;
        Ok(config.command_timeout())
    }

    /// Set the interface lookup command timeout.
    ///
    /// The timeout is stored in whole milliseconds and must be at least 1 ms.
    pub async fn set_command_timeout(&self, timeout: Duration) -> Result<()> {
        let millis = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        if millis == 0 {
            return Err(Error::Config(format!(
                "Command timeout must be at least 1 ms, got {:?}",
                timeout
            )));
        }

        let mut config = self.load().await?;
        config.command_timeout_ms = millis;
        self.save(&config).await
    }
}
