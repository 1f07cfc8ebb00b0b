// Chunk: docs/chunks/editor_config - TOML editor configuration

//! Editor configuration.
//!
//! All keys are optional; a missing key takes the default shown below.
//!
//! ```toml
//! initial_char_capacity = 100
//! initial_line_capacity = 10
//! line_addressing = "include-trailing"   # or "terminated-only"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::LineAddressing;

pub const DEFAULT_CHAR_CAPACITY: usize = 100;
pub const DEFAULT_LINE_CAPACITY: usize = 10;

/// Capacities and line policy for a new [`TextEditor`](crate::TextEditor).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    /// Initial slot count of the character store.
    pub initial_char_capacity: usize,
    /// Initial slot count of the line index.
    pub initial_line_capacity: usize,
    pub line_addressing: LineAddressing,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            initial_char_capacity: DEFAULT_CHAR_CAPACITY,
            initial_line_capacity: DEFAULT_LINE_CAPACITY,
            line_addressing: LineAddressing::default(),
        }
    }
}

impl EditorConfig {
    /// Parses a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("loaded editor config from {}: {:?}", path.display(), config);
        Ok(config)
    }
}
