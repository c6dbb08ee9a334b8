//! Game configuration.
//!
//! - `GameConfig`: the finalized roster plus per-game options, built once
//!   before the engine is constructed.
//! - `Settings`: persistent defaults read from `SNAKES_CONFIG_JSON` or a
//!   `snakes.json` file in the working directory.

use log::warn;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::read_to_string;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fewest players a game can start with.
pub const MIN_PLAYERS: usize = 2;
/// Most players a game can seat.
pub const MAX_PLAYERS: usize = 5;

/// Default leaderboard location, relative to the working directory.
pub const DEFAULT_LEADERBOARD_FILE: &str = "leaderboard.json";

/// Environment variable holding a JSON settings document.
const CONFIG_ENV_KEY: &str = "SNAKES_CONFIG_JSON";
/// Settings file consulted when the environment variable is absent.
const CONFIG_FILE: &str = "snakes.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("a game needs 2-5 players, got {0}")]
    PlayerCount(usize),
    #[error("player name {0:?} is used more than once")]
    DuplicateName(String),
    #[error("malformed settings: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("unable to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Finalized configuration for one game.
#[derive(Clone, Debug)]
pub struct GameConfig {
    /// Player names in turn order.
    pub players: Vec<String>,

    /// RNG seed. `None` draws a fresh one from the OS.
    pub seed: Option<u64>,

    /// Where the leaderboard is persisted.
    pub leaderboard_path: PathBuf,

    /// Whether the front end should pace animation frames in real time.
    pub animate: bool,
}

impl GameConfig {
    /// Create a configuration from a raw roster.
    ///
    /// Names are trimmed, blank names become `Player<N>`, and the roster must
    /// hold 2-5 unique names.
    pub fn new<S: AsRef<str>>(names: &[S]) -> Result<Self, ConfigError> {
        Ok(Self {
            players: normalize_roster(names)?,
            seed: None,
            leaderboard_path: PathBuf::from(DEFAULT_LEADERBOARD_FILE),
            animate: true,
        })
    }

    /// Apply persisted settings as defaults.
    #[must_use]
    pub fn with_settings(mut self, settings: &Settings) -> Self {
        self.seed = settings.seed.or(self.seed);
        self.leaderboard_path = settings.leaderboard.clone();
        self.animate = settings.animate;
        self
    }

    /// Fix the RNG seed for a reproducible game.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_leaderboard_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.leaderboard_path = path.into();
        self
    }

    #[must_use]
    pub fn with_animation(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }
}

/// Trim names, default blanks to `Player<N>` and validate the roster.
pub fn normalize_roster<S: AsRef<str>>(names: &[S]) -> Result<Vec<String>, ConfigError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&names.len()) {
        return Err(ConfigError::PlayerCount(names.len()));
    }

    let mut roster: Vec<String> = Vec::with_capacity(names.len());
    for (i, name) in names.iter().enumerate() {
        let name = name.as_ref().trim();
        let name = if name.is_empty() {
            format!("Player{}", i + 1)
        } else {
            name.to_string()
        };

        if roster.contains(&name) {
            return Err(ConfigError::DuplicateName(name));
        }
        roster.push(name);
    }

    Ok(roster)
}

/// Persistent defaults for the front end.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub leaderboard: PathBuf,
    pub seed: Option<u64>,
    pub animate: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            leaderboard: PathBuf::from(DEFAULT_LEADERBOARD_FILE),
            seed: None,
            animate: true,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let data = read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&data)
    }

    /// Load settings from the environment, then the settings file, falling
    /// back to defaults when neither is present or usable.
    pub fn load() -> Self {
        if let Ok(json) = env::var(CONFIG_ENV_KEY) {
            return Self::from_json(&json).unwrap_or_else(|err| {
                warn!("Failed to load {} (using defaults): {}", CONFIG_ENV_KEY, err);
                Self::default()
            });
        }

        let file = Path::new(CONFIG_FILE);
        if !file.exists() {
            return Self::default();
        }

        Self::from_file(file).unwrap_or_else(|err| {
            warn!("Failed to load {} (using defaults): {}", CONFIG_FILE, err);
            Self::default()
        })
    }
}
