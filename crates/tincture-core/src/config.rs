// ABOUTME: Engine configuration for tone classification and validation rules
// ABOUTME: Loaded from TOML with environment overrides layered on top

use crate::tone::DEFAULT_DARK_AREA_THRESHOLD;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use tincture_types::ShadeKey;

/// Environment variable overriding `tone.dark_area_threshold`
pub const DARK_AREA_THRESHOLD_ENV: &str = "TINCTURE_DARK_AREA_THRESHOLD";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse engine config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to read engine config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("dark area threshold {0} must be a finite luminance within 0.0..=1.0")]
    InvalidThreshold(f64),

    #[error("environment variable {var} has invalid value `{value}`")]
    InvalidEnv { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToneConfig {
    /// Relative luminance below which a color is too dark for large areas
    pub dark_area_threshold: f64,
}

impl Default for ToneConfig {
    fn default() -> Self {
        Self {
            dark_area_threshold: DEFAULT_DARK_AREA_THRESHOLD,
        }
    }
}

/// Which findings the palette validator reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationRules {
    /// Shade allowed to be very dark without a finding
    pub dark_area_exempt_shade: ShadeKey,
    pub check_pure_black: bool,
    pub check_dark_areas: bool,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            dark_area_exempt_shade: ShadeKey::S950,
            check_pure_black: true,
            check_dark_areas: true,
        }
    }
}

/// Top-level engine configuration
///
/// ```toml
/// [tone]
/// dark_area_threshold = 0.008
///
/// [validation]
/// dark_area_exempt_shade = 950
/// check_pure_black = true
/// check_dark_areas = true
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub tone: ToneConfig,
    pub validation: ValidationRules,
}

impl EngineConfig {
    /// Parse and validate; every section and field is optional
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a config file without applying environment overrides
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Load the config file at `path`, then apply environment overrides.
    /// A missing file yields the defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let mut config = if path.exists() {
            Self::read(path)
                .with_context(|| format!("Failed to load engine config from {}", path.display()))?
        } else {
            Self::default()
        };

        config
            .apply_env_overrides()
            .context("Failed to apply engine config environment overrides")?;
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides_from(|var| env::var(var).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(DARK_AREA_THRESHOLD_ENV) {
            let threshold: f64 = value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                var: DARK_AREA_THRESHOLD_ENV,
                value: value.clone(),
            })?;
            self.tone.dark_area_threshold = threshold;
        }

        self.validate()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.tone.dark_area_threshold;
        if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::InvalidThreshold(threshold));
        }
        Ok(())
    }
}
