//! Configuration schema and loading for `lode.toml`
//!
//! Everything is optional: a missing file or a missing section falls back
//! to the stock wiki endpoints, field by field.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::mods::Mod;

/// Error type for configuration loading failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Wiki image base paths, one per namespace.
///
/// Each path is concatenated directly with a percent-encoded file name,
/// so a trailing `/` is expected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sources {
    #[serde(default = "default_vanilla")]
    pub vanilla: String,
    #[serde(default = "default_calamity")]
    pub calamity: String,
    #[serde(default = "default_thorium")]
    pub thorium: String,
}

impl Default for Sources {
    fn default() -> Self {
        Self {
            vanilla: default_vanilla(),
            calamity: default_calamity(),
            thorium: default_thorium(),
        }
    }
}

fn default_vanilla() -> String {
    "https://terraria.wiki.gg/images/".to_string()
}

fn default_calamity() -> String {
    "https://calamitymod.wiki.gg/images/".to_string()
}

fn default_thorium() -> String {
    "https://thoriummod.wiki.gg/images/".to_string()
}

impl Sources {
    /// Base path for a namespace. Unrecognized namespaces use the
    /// base-game path.
    pub fn base_for(&self, game_mod: Mod) -> &str {
        match game_mod {
            Mod::Calamity => &self.calamity,
            Mod::Thorium => &self.thorium,
            Mod::Vanilla | Mod::Unknown => &self.vanilla,
        }
    }
}

/// Top-level `lode.toml` configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Wiki base path overrides.
    #[serde(default)]
    pub sources: Sources,
    /// Catalog files loaded before any files given on the command line.
    #[serde(default)]
    pub data: Vec<PathBuf>,
}

/// Load configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let text = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&text)?)
}
