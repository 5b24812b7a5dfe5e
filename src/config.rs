use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DoctorError, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

/// Defaults for the CLI, optionally loaded from a TOML file. Command-line
/// flags take precedence over these values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Genre used when `--genre` is absent
    pub genre: String,

    /// Current greenlight score used when `--score` is absent
    pub score: i32,

    /// Fixed seed for reproducible rewrites
    pub seed: Option<u64>,

    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            genre: String::new(),
            score: 50,
            seed: None,
            format: OutputFormat::Json,
        }
    }
}

/// Values given on the command line. `None` falls back to the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub genre: Option<String>,
    pub score: Option<i32>,
    pub seed: Option<u64>,
    pub format: Option<OutputFormat>,
}

/// Effective settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub genre: String,
    pub score: i32,
    pub seed: Option<u64>,
    pub format: OutputFormat,
}

impl Config {
    /// Layers command-line overrides on top of this config.
    pub fn merge(self, overrides: Overrides) -> Settings {
        Settings {
            genre: overrides.genre.unwrap_or(self.genre),
            score: overrides.score.unwrap_or(self.score),
            seed: overrides.seed.or(self.seed),
            format: overrides.format.unwrap_or(self.format),
        }
    }

    pub fn from_toml_str(raw: &str, origin: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|source| DoctorError::Config {
            path: origin.to_string(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let display = path.display().to_string();
        let raw = std::fs::read_to_string(path).map_err(|source| DoctorError::Io {
            path: display.clone(),
            source,
        })?;
        Self::from_toml_str(&raw, &display)
    }
}
