// ABOUTME: Global tracing subscriber installation
// ABOUTME: Composes the enabled output layers under one level filter, optionally reloadable

use anyhow::{Context, Result};
use tracing_subscriber::{Layer, prelude::*, reload, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::layers::{create_env_filter, create_layers};
use crate::reload::LoggingReloadHandle;

/// Install the global subscriber described by `config`.
///
/// Fails if another global subscriber is already installed.
pub fn init_subscriber(config: LoggingConfig) -> Result<()> {
    let env_filter = create_env_filter(&config).context("Failed to create environment filter")?;
    let layers = create_layers(&config)?;

    tracing_subscriber::registry()
        .with(layers.with_filter(env_filter))
        .try_init()
        .context("Failed to install global tracing subscriber")?;

    log_initialized(&config, false);
    Ok(())
}

/// Install the global subscriber with a filter that can be swapped at runtime
pub fn init_subscriber_with_reload(config: LoggingConfig) -> Result<LoggingReloadHandle> {
    let env_filter = create_env_filter(&config).context("Failed to create environment filter")?;
    let (filter, filter_handle) = reload::Layer::new(env_filter);
    let layers = create_layers(&config)?;

    tracing_subscriber::registry()
        .with(layers.with_filter(filter))
        .try_init()
        .context("Failed to install global tracing subscriber")?;

    log_initialized(&config, true);
    Ok(LoggingReloadHandle::new(filter_handle, config))
}

fn log_initialized(config: &LoggingConfig, reload_enabled: bool) {
    tracing::info!(
        log_level = %config.level.0,
        console_output = config.output.console,
        file_output = config.output.file,
        json_output = config.output.json,
        file_path = %config.file.path.display(),
        reload_enabled,
        "Tincture logging initialized"
    );
}
