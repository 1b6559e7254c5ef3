// ABOUTME: Logging configuration and environment variable overrides
// ABOUTME: Covers log levels, per-module directives, output targets and the log file path

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::path::PathBuf;
use tracing::Level;

/// Serde-friendly wrapper around `tracing::Level`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLevel(pub Level);

impl Serialize for LogLevel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0.as_str().to_ascii_lowercase())
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<LogLevel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_log_level(&s)
            .map(LogLevel)
            .map_err(serde::de::Error::custom)
    }
}

impl From<Level> for LogLevel {
    fn from(level: Level) -> Self {
        LogLevel(level)
    }
}

impl From<LogLevel> for Level {
    fn from(log_level: LogLevel) -> Self {
        log_level.0
    }
}

/// Logging setup for an application embedding the engine
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Global log level
    pub level: LogLevel,

    /// Per-target overrides, e.g. `tincture_core = "trace"`
    pub module_levels: BTreeMap<String, LogLevel>,

    pub output: OutputConfig,

    pub file: FileConfig,
}

/// Which sinks receive events
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub console: bool,

    /// Opt-in, the engine itself never needs a log file
    pub file: bool,

    /// Emit console events as JSON lines instead of text
    pub json: bool,

    /// Multi-line console output (vs compact)
    pub pretty_console: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Defaults to `<config dir>/tincture/tincture.log`
    pub path: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(Level::INFO),
            module_levels: BTreeMap::new(),
            output: OutputConfig::default(),
            file: FileConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            console: true,
            file: false,
            json: false,
            pretty_console: false,
        }
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            path: default_log_file_path(),
        }
    }
}

impl LoggingConfig {
    /// Default configuration with environment overrides applied
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Apply `TINCTURE_LOG*` and `RUST_LOG` overrides.
    ///
    /// `TINCTURE_LOG` takes precedence over `RUST_LOG`. `TINCTURE_LOG_FILE`
    /// enables file output and, when non-empty, sets its path.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(directives) = env::var("TINCTURE_LOG") {
            self.parse_directives(&directives)
                .context("Invalid TINCTURE_LOG value")?;
        } else if let Ok(directives) = env::var("RUST_LOG") {
            self.parse_directives(&directives)
                .context("Invalid RUST_LOG value")?;
        }

        if env::var("TINCTURE_LOG_JSON").is_ok() {
            self.output.json = true;
        }

        if env::var("TINCTURE_LOG_NO_CONSOLE").is_ok() {
            self.output.console = false;
        }

        if let Ok(path) = env::var("TINCTURE_LOG_FILE") {
            self.output.file = true;
            if !path.trim().is_empty() {
                self.file.path = PathBuf::from(path);
            }
        }

        Ok(())
    }

    /// Parse `RUST_LOG`-style directives: `info,tincture_core=trace`
    pub fn parse_directives(&mut self, directives: &str) -> Result<()> {
        for directive in directives.split(',').map(str::trim) {
            if directive.is_empty() {
                continue;
            }

            match directive.split_once('=') {
                Some((module, level)) => {
                    let level = parse_log_level(level).with_context(|| {
                        format!("Invalid log level '{level}' for module '{module}'")
                    })?;
                    self.module_levels
                        .insert(module.trim().to_string(), LogLevel(level));
                }
                None => {
                    self.level = LogLevel(
                        parse_log_level(directive)
                            .with_context(|| format!("Invalid global log level '{directive}'"))?,
                    );
                }
            }
        }
        Ok(())
    }
}

fn default_log_file_path() -> PathBuf {
    match dirs::config_dir() {
        Some(dir) => dir.join("tincture").join("tincture.log"),
        None => PathBuf::from("tincture.log"),
    }
}

/// Parse a log level name, case-insensitively
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => anyhow::bail!(
            "Invalid log level: {level}. Must be one of: trace, debug, info, warn, error"
        ),
    }
}
