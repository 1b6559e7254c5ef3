// ABOUTME: Runtime log filter updates without reinstalling the subscriber
// ABOUTME: Keeps the current config so per-module changes accumulate

use anyhow::{Context, Result};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, Registry, reload};

use crate::config::LoggingConfig;
use crate::layers::create_env_filter;

/// Handle for changing log levels at runtime
#[derive(Clone)]
pub struct LoggingReloadHandle {
    filter_handle: reload::Handle<EnvFilter, Registry>,
    current_config: Arc<RwLock<LoggingConfig>>,
}

impl LoggingReloadHandle {
    pub fn new(filter_handle: reload::Handle<EnvFilter, Registry>, config: LoggingConfig) -> Self {
        Self {
            filter_handle,
            current_config: Arc::new(RwLock::new(config)),
        }
    }

    /// Change the global level
    pub fn update_log_level(&self, level: tracing::Level) -> Result<()> {
        self.apply(|config| config.level = level.into())?;
        tracing::info!(new_level = %level, "Log level updated at runtime");
        Ok(())
    }

    /// Change (or add) the level for one module
    pub fn update_module_level(&self, module: &str, level: tracing::Level) -> Result<()> {
        self.apply(|config| {
            config
                .module_levels
                .insert(module.to_string(), level.into());
        })?;
        tracing::info!(module = %module, new_level = %level, "Module log level updated at runtime");
        Ok(())
    }

    /// Re-read level directives from the environment; outputs are left as they are
    pub fn reload_from_env(&self) -> Result<()> {
        let mut from_env =
            LoggingConfig::from_env().context("Failed to load configuration from environment")?;

        self.apply(|config| {
            from_env.output = config.output.clone();
            from_env.file = config.file.clone();
            *config = from_env;
        })?;

        let config = self.current_config();
        tracing::info!(
            level = %config.level.0,
            module_count = config.module_levels.len(),
            "Logging configuration reloaded from environment"
        );
        Ok(())
    }

    pub fn current_config(&self) -> LoggingConfig {
        self.current_config.read().clone()
    }

    fn apply<F>(&self, update: F) -> Result<()>
    where
        F: FnOnce(&mut LoggingConfig),
    {
        let mut config = self.current_config.write();
        let mut candidate = config.clone();
        update(&mut candidate);

        let new_filter =
            create_env_filter(&candidate).context("Failed to create new environment filter")?;
        self.filter_handle
            .reload(new_filter)
            .context("Failed to reload log filter")?;

        *config = candidate;
        Ok(())
    }
}
