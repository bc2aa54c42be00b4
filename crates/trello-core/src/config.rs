use crate::{TrelloError, TrelloResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Floor applied to the refresh interval so the remote service is never hammered.
pub const MIN_REFRESH_INTERVAL: Duration = Duration::from_secs(1);
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(10);
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Raw configuration as read from the config file and command line.
///
/// Every field is optional so that layers can be merged; [`AppConfig::validate`]
/// turns the merged result into [`Settings`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub board: Option<String>,
    #[serde(default)]
    pub refresh_interval_secs: Option<u64>,
    #[serde(default)]
    pub fetch_timeout_secs: Option<u64>,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub snapshot_path: Option<PathBuf>,
    #[serde(default)]
    pub persist_snapshot: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub user: String,
    pub key: String,
    pub token: String,
}

/// Validated configuration consumed by the client, poller and snapshot store.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub board: String,
    pub refresh_interval: Duration,
    pub fetch_timeout: Duration,
    pub credentials: Credentials,
    pub snapshot_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/trello-tui/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("trello-tui/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("trello-tui\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Load the user config file, falling back to defaults when it is missing or unreadable.
    pub fn load() -> Self {
        let Some(config_path) = Self::config_path() else {
            return Self::default();
        };
        if !config_path.exists() {
            return Self::default();
        }
        match Self::load_from(&config_path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config file {}: {}", config_path.display(), e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> TrelloResult<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| TrelloError::Config(e.to_string()))
    }

    /// Layer `overrides` on top of `self`; any value set in `overrides` wins.
    pub fn merge(self, overrides: AppConfig) -> AppConfig {
        AppConfig {
            board: overrides.board.or(self.board),
            refresh_interval_secs: overrides.refresh_interval_secs.or(self.refresh_interval_secs),
            fetch_timeout_secs: overrides.fetch_timeout_secs.or(self.fetch_timeout_secs),
            user: overrides.user.or(self.user),
            key: overrides.key.or(self.key),
            token: overrides.token.or(self.token),
            snapshot_path: overrides.snapshot_path.or(self.snapshot_path),
            persist_snapshot: overrides.persist_snapshot.or(self.persist_snapshot),
        }
    }

    pub fn validate(&self) -> TrelloResult<Settings> {
        let board = self
            .board
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| TrelloError::Config("board name must not be empty".into()))?
            .to_string();

        let refresh_interval = self
            .refresh_interval_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_REFRESH_INTERVAL);
        let refresh_interval = if refresh_interval < MIN_REFRESH_INTERVAL {
            tracing::warn!(
                "Refresh interval {:?} is below the minimum, using {:?}",
                refresh_interval,
                MIN_REFRESH_INTERVAL
            );
            MIN_REFRESH_INTERVAL
        } else {
            refresh_interval
        };

        let fetch_timeout = match self.fetch_timeout_secs {
            Some(0) => {
                return Err(TrelloError::Config(
                    "fetch timeout must be greater than zero".into(),
                ))
            }
            Some(secs) => Duration::from_secs(secs),
            None => DEFAULT_FETCH_TIMEOUT,
        };

        let snapshot_path = if self.persist_snapshot.unwrap_or(true) {
            self.snapshot_path
                .clone()
                .or_else(|| default_snapshot_path(&board))
        } else {
            None
        };

        Ok(Settings {
            credentials: Credentials {
                user: self.user.clone().unwrap_or_default(),
                key: self.key.clone().unwrap_or_default(),
                token: self.token.clone().unwrap_or_default(),
            },
            board,
            refresh_interval,
            fetch_timeout,
            snapshot_path,
        })
    }
}

fn default_snapshot_path(board: &str) -> Option<PathBuf> {
    let file_name: String = board
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect();
    dirs::data_dir().map(|dir| dir.join("trello-tui").join(format!("{file_name}.json")))
}
