//! Configuration handling for sheetmaker

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SheetError;
use crate::interaction::{Affirmatives, DEFAULT_AFFIRMATIVES};

/// Config file looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "sheetmaker.toml";

/// Sheetmaker configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Sheetmaker-specific settings
    #[serde(default)]
    pub sheetmaker: SheetmakerConfig,
}

/// Core sheetmaker settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SheetmakerConfig {
    /// Directory spreadsheets are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Answers accepted as "yes" (case-insensitive)
    #[serde(default = "default_affirmative_answers")]
    pub affirmative_answers: Vec<String>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("sheets")
}

fn default_affirmative_answers() -> Vec<String> {
    DEFAULT_AFFIRMATIVES.iter().map(|s| s.to_string()).collect()
}

impl Default for SheetmakerConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            affirmative_answers: default_affirmative_answers(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, SheetError> {
        toml::from_str(content).map_err(|e| SheetError::Config(e.to_string()))
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, SheetError> {
        let content = fs::read_to_string(path)
            .map_err(|e| SheetError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml(&content)
    }

    /// Load from an explicit path, else the first existing default location
    ///
    /// Defaults are used when no file is found.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, SheetError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match default_locations().into_iter().find(|p| p.is_file()) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading configuration");
                Self::load(&path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Affirmative answer set built from the configured words
    pub fn affirmatives(&self) -> Affirmatives {
        if self.sheetmaker.affirmative_answers.is_empty() {
            Affirmatives::default()
        } else {
            Affirmatives::new(&self.sheetmaker.affirmative_answers)
        }
    }
}

/// Default config locations, in lookup order
pub fn default_locations() -> Vec<PathBuf> {
    let mut locations = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
    if let Some(dir) = dirs::config_dir() {
        locations.push(dir.join("sheetmaker").join("config.toml"));
    }
    locations
}
