use std::path::Path;

use crate::error::{ConfigError, SetupError};
use crate::game::{Piece, Roster, WinDetector, DEFAULT_RUN_LENGTH};

/// Largest accepted grid width or height
pub const MAX_GRID_SIDE: usize = 64;

/// Top-level game configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Players registered up front; when empty they are asked for at startup
    pub players: Vec<PlayerConfig>,
    pub grid: GridConfig,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
    /// Pieces in a row needed to win
    pub connect: usize,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    pub piece: Piece,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            players: Vec::new(),
            grid: GridConfig::default(),
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            width: 7,
            height: 6,
            connect: DEFAULT_RUN_LENGTH,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.width == 0 {
            return Err(ConfigError::Validation("grid.width must be > 0".into()));
        }
        if self.grid.height == 0 {
            return Err(ConfigError::Validation("grid.height must be > 0".into()));
        }
        if self.grid.width > MAX_GRID_SIDE {
            return Err(ConfigError::Validation(format!(
                "grid.width must be <= {MAX_GRID_SIDE}"
            )));
        }
        if self.grid.height > MAX_GRID_SIDE {
            return Err(ConfigError::Validation(format!(
                "grid.height must be <= {MAX_GRID_SIDE}"
            )));
        }
        if self.grid.connect == 0 {
            return Err(ConfigError::Validation("grid.connect must be > 0".into()));
        }
        if self.grid.connect > self.grid.width.max(self.grid.height) {
            tracing::warn!(
                connect = self.grid.connect,
                "grid is too small for anyone to win"
            );
        }

        self.roster()
            .map_err(|e| ConfigError::Validation(format!("players: {e}")))?;

        Ok(())
    }

    /// Players from the configuration, in turn order.
    pub fn roster(&self) -> Result<Roster, SetupError> {
        Roster::from_assignments(
            self.players
                .iter()
                .map(|p| (p.name.clone(), p.piece)),
        )
    }

    pub fn detector(&self) -> WinDetector {
        WinDetector::new(self.grid.connect)
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&GameConfig::default()).expect("default config serializes")
    }
}
