use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tex_tutorials_engine::ParseOptions;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub tutorials_path: PathBuf,
    /// Link target for citations, e.g. `further-explorations#reference`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub words_per_minute: Option<usize>,
}

impl Config {
    pub fn new(tutorials_path: PathBuf) -> Self {
        Self {
            tutorials_path,
            reference_href: None,
            words_per_minute: None,
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded tutorials path
        config.tutorials_path =
            Self::expand_path(&config.tutorials_path).unwrap_or(config.tutorials_path);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/tex-tutorials");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Rendering options with unset fields left at the engine defaults.
    pub fn parse_options(&self) -> ParseOptions {
        let defaults = ParseOptions::default();
        ParseOptions {
            reference_href: self
                .reference_href
                .clone()
                .unwrap_or(defaults.reference_href),
            words_per_minute: self.words_per_minute.unwrap_or(defaults.words_per_minute),
        }
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
