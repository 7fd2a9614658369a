//! Unified configuration for popsim front-ends.
//!
//! [`SimConfig`] is stored in `~/.popsim/config.toml`. Every section is
//! optional; unspecified values fall back to the defaults below.

use std::path::{Path, PathBuf};

use popsim_core::{ExponentialParams, LogisticParams, Palette};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Main configuration for all popsim front-ends.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Settings shared by both pipelines.
    pub core: CoreConfig,

    /// Numeric formatting for tabular output.
    pub display: DisplayConfig,

    /// Form defaults for new logistic scenarios.
    pub logistic: LogisticDefaults,

    /// Form defaults for new exponential scenarios.
    pub exponential: ExponentialDefaults,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// Curve colors; scenario colors wrap around this list.
    pub palette: Palette,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Decimal places for sampled population values.
    pub decimal_places: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { decimal_places: 2 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogisticDefaults {
    pub p0: f64,
    pub r: f64,
    pub k: f64,
    /// Years.
    pub time_max: u32,
}

impl Default for LogisticDefaults {
    fn default() -> Self {
        Self {
            p0: 10.0,
            r: 0.5,
            k: 1000.0,
            time_max: 50,
        }
    }
}

impl LogisticDefaults {
    /// Fill unset form values from these defaults.
    pub fn params(
        &self,
        p0: Option<f64>,
        r: Option<f64>,
        k: Option<f64>,
        time_max: Option<u32>,
    ) -> LogisticParams {
        LogisticParams::new(
            p0.unwrap_or(self.p0),
            r.unwrap_or(self.r),
            k.unwrap_or(self.k),
            time_max.unwrap_or(self.time_max),
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExponentialDefaults {
    pub p0: f64,
    pub r: f64,
    /// Hours.
    pub time_max: u32,
}

impl Default for ExponentialDefaults {
    fn default() -> Self {
        Self {
            p0: 100.0,
            r: 0.3,
            time_max: 24,
        }
    }
}

impl ExponentialDefaults {
    /// Fill unset form values from these defaults.
    pub fn params(
        &self,
        p0: Option<f64>,
        r: Option<f64>,
        time_max: Option<u32>,
    ) -> ExponentialParams {
        ExponentialParams::new(
            p0.unwrap_or(self.p0),
            r.unwrap_or(self.r),
            time_max.unwrap_or(self.time_max),
        )
    }
}

impl SimConfig {
    /// Get the default config directory path.
    pub fn config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".popsim"))
    }

    /// Get the default config file path.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }

    /// Load configuration from the default location.
    ///
    /// Returns default config if file doesn't exist.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| Error::LoadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to the default location.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()
            .ok_or_else(|| Error::Config("could not determine config directory".to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        self.save_to(&path)
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = SimConfig::default();
        assert_eq!(config.core.palette.len(), 8);
        assert_eq!(config.display.decimal_places, 2);
        assert_eq!(config.logistic.k, 1000.0);
        assert_eq!(config.exponential.time_max, 24);
    }

    #[test]
    fn test_partial_config_parsing() {
        let toml = r#"
            [logistic]
            r = 0.8

            [core]
            palette = ["red", "green"]
        "#;

        let config: SimConfig = toml::from_str(toml).unwrap();

        assert_eq!(config.logistic.r, 0.8);
        assert_eq!(config.core.palette.colors(), ["red", "green"]);

        // Defaults for unset values
        assert_eq!(config.logistic.p0, 10.0);
        assert_eq!(config.exponential.r, 0.3);
    }

    #[test]
    fn test_empty_palette_rejected() {
        let toml = r#"
            [core]
            palette = []
        "#;
        assert!(toml::from_str::<SimConfig>(toml).is_err());
    }

    #[test]
    fn test_save_and_load() {
        let file = NamedTempFile::new().unwrap();

        let mut config = SimConfig::default();
        config.exponential.time_max = 72;
        config.save_to(file.path()).unwrap();

        let loaded = SimConfig::load_from(file.path()).unwrap();
        assert_eq!(loaded.exponential.time_max, 72);
        assert_eq!(loaded.core.palette, Palette::default());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = SimConfig::load_from(Path::new("/nonexistent/popsim.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/popsim.toml"));
    }

    #[test]
    fn test_form_defaults_fill_gaps() {
        let config = SimConfig::default();
        let params = config.logistic.params(Some(25.0), None, None, Some(5));
        assert_eq!(params, LogisticParams::new(25.0, 0.5, 1000.0, 5));
        let params = config.exponential.params(None, Some(0.1), None);
        assert_eq!(params, ExponentialParams::new(100.0, 0.1, 24));
    }
}
