//! Diplomacy configuration with documented defaults
//!
//! Sentiment thresholds and bonus weights are fixed constants in
//! `crate::diplomacy`; this only covers how a game sets up its ledgers.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::core::error::{DiplomacyError, Result};
use crate::core::types::MAX_PLAYERS;

/// Configuration for the diplomacy subsystem
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiplomacyConfig {
    /// Number of player slots every ledger is sized to
    ///
    /// Must be between 2 and `MAX_PLAYERS`. A ledger for one player always
    /// leaves its owner's slot empty, so 2 is the smallest useful game.
    pub max_players: usize,

    /// Whether transient bonuses (border crossings, gifts, trades) expire
    ///
    /// When enabled the turn driver runs `diplomacy::expiry::expire` with
    /// the per-kind lifetimes. When disabled the ledger only accumulates.
    pub expire_bonuses: bool,

    /// Optional TOML file overriding the liking label/color palette
    pub palette_path: Option<PathBuf>,
}

impl Default for DiplomacyConfig {
    fn default() -> Self {
        Self {
            max_players: 8,
            expire_bonuses: true,
            palette_path: None,
        }
    }
}

impl DiplomacyConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from a TOML file and validate it
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    /// Parse a config from a TOML string and validate it
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: DiplomacyConfig = toml::from_str(content)?;
        config.validate().map_err(DiplomacyError::InvalidConfig)?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.max_players < 2 {
            return Err(format!(
                "max_players ({}) must be at least 2",
                self.max_players
            ));
        }

        if self.max_players > MAX_PLAYERS {
            return Err(format!(
                "max_players ({}) must be <= {}",
                self.max_players, MAX_PLAYERS
            ));
        }

        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

static CONFIG: OnceLock<DiplomacyConfig> = OnceLock::new();

/// Get the global diplomacy config (initializes with defaults if not set)
pub fn config() -> &'static DiplomacyConfig {
    CONFIG.get_or_init(DiplomacyConfig::default)
}

/// Set the global diplomacy config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: DiplomacyConfig) -> std::result::Result<(), DiplomacyConfig> {
    CONFIG.set(config)
}
