use crate::dates::Zone;
use crate::duration::DurationStyle;
use crate::error::{Error, Result};
use crate::ident::IdStrategy;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Directory holding user, project and local config files
pub const CONFIG_DIR: &str = ".babar";

/// Fallback for `limit` when no length is given
pub const DEFAULT_LIMIT: usize = 80;

/// A validation error in the configuration
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]: {}", self.field, self.message)
    }
}

/// Timestamp and duration rendering
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct FormatConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<Zone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_style: Option<DurationStyle>,
}

/// Identifier generation
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct IdsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<IdStrategy>,
}

/// String helpers
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct StringsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_limit: Option<usize>,
}

/// Main configuration structure.
/// Unset fields fall back to built-in defaults through the accessors.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub format: FormatConfig,
    #[serde(default)]
    pub ids: IdsConfig,
    #[serde(default)]
    pub strings: StringsConfig,
}

impl Config {
    pub fn zone(&self) -> Zone {
        self.format.zone.unwrap_or_default()
    }

    pub fn duration_style(&self) -> DurationStyle {
        self.format.duration_style.unwrap_or_default()
    }

    pub fn id_strategy(&self) -> IdStrategy {
        self.ids.strategy.unwrap_or_default()
    }

    pub fn default_limit(&self) -> usize {
        self.strings.default_limit.unwrap_or(DEFAULT_LIMIT)
    }

    /// Load configuration from default paths
    /// Priority: local (.babar/config.local.toml) > project (.babar/config.toml) > user (~/.babar/config.toml)
    pub fn load() -> Result<Self> {
        let cwd =
            std::env::current_dir().map_err(|e| Error::io("resolve current directory", e))?;
        Self::load_layered(dirs::home_dir().as_deref(), &cwd)
    }

    /// Layered load rooted at explicit directories
    pub fn load_layered(home: Option<&Path>, project_root: &Path) -> Result<Self> {
        let mut config = Self::default();

        let mut layers = Vec::new();
        if let Some(home) = home {
            layers.push(home.join(CONFIG_DIR).join("config.toml"));
        }
        layers.push(project_root.join(CONFIG_DIR).join("config.toml"));
        // Should be gitignored
        layers.push(project_root.join(CONFIG_DIR).join("config.local.toml"));

        for path in layers {
            if path.exists() {
                tracing::debug!(path = %path.display(), "loading config layer");
                config.merge(Self::load_from(&path)?);
            }
        }

        Ok(config)
    }

    /// Load and validate configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("read {}", path.display()), e))?;
        let config: Config = toml::from_str(&content).map_err(|source| Error::Toml {
            path: path.to_path_buf(),
            source,
        })?;

        if let Err(errors) = config.validate() {
            let message = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(Error::Config {
                path: path.to_path_buf(),
                message,
            });
        }

        Ok(config)
    }

    /// Merge another config into this one (other takes priority)
    pub fn merge(&mut self, other: Config) {
        if other.format.zone.is_some() {
            self.format.zone = other.format.zone;
        }
        if other.format.duration_style.is_some() {
            self.format.duration_style = other.format.duration_style;
        }
        if other.ids.strategy.is_some() {
            self.ids.strategy = other.ids.strategy;
        }
        if other.strings.default_limit.is_some() {
            self.strings.default_limit = other.strings.default_limit;
        }
    }

    /// Validate configuration and return any errors found
    pub fn validate(&self) -> std::result::Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.strings.default_limit == Some(0) {
            errors.push(ValidationError {
                field: "strings.default_limit".to_string(),
                message: "Must be greater than 0".to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Every field filled in with the value actually in effect
    pub fn effective(&self) -> Config {
        Config {
            format: FormatConfig {
                zone: Some(self.zone()),
                duration_style: Some(self.duration_style()),
            },
            ids: IdsConfig {
                strategy: Some(self.id_strategy()),
            },
            strings: StringsConfig {
                default_limit: Some(self.default_limit()),
            },
        }
    }
}
