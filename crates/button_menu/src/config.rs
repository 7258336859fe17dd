//! Configuration system
//!
//! Menu settings loadable from TOML or RON files, chosen by extension.

use serde::{Deserialize, Serialize};

use crate::widgets::{StatePalette, DEFAULT_CLICK_HOLD_FRAMES};

/// Menu-wide settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// How many frames a button stays visibly pressed after release
    pub click_hold_frames: u32,

    /// Default tint palette for tinted buttons
    pub palette: StatePalette,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            click_hold_frames: DEFAULT_CLICK_HOLD_FRAMES,
            palette: StatePalette::default(),
        }
    }
}

impl MenuConfig {
    /// Load configuration from a `.toml` or `.ron` file
    pub fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::parse(&contents, path)
    }

    /// Save configuration to a `.toml` or `.ron` file
    pub fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }

    fn parse(contents: &str, path: &str) -> Result<Self, ConfigError> {
        if path.ends_with(".toml") {
            toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}
