// ABOUTME: Output layer construction for console, JSON and rolling file sinks
// ABOUTME: Layers are boxed so the subscriber can compose whichever are enabled

use anyhow::{Context, Result};
use std::fs;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{
    EnvFilter, Layer, Registry,
    fmt::{self, format::FmtSpan},
};

use crate::config::{FileConfig, LoggingConfig, OutputConfig};

pub type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Console layer: text (pretty or compact) or JSON lines, or `None` when disabled
pub fn create_console_layer(config: &OutputConfig) -> Option<BoxedLayer> {
    if !config.console {
        return None;
    }

    let layer = if config.json {
        fmt::layer()
            .json()
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .boxed()
    } else if config.pretty_console {
        fmt::layer()
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .pretty()
            .boxed()
    } else {
        fmt::layer().with_target(true).compact().boxed()
    };

    Some(layer)
}

/// Daily-rolling file layer. Creates the parent directory if needed.
pub fn create_file_layer(config: &FileConfig) -> Result<BoxedLayer> {
    let directory = config
        .path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .context("Log file path has no parent directory")?;

    fs::create_dir_all(directory).with_context(|| {
        format!("Failed to create log directory: {}", directory.display())
    })?;

    let file_name = config
        .path
        .file_name()
        .and_then(|n| n.to_str())
        .context("Invalid log file path")?;

    let (writer, guard) = non_blocking(rolling::daily(directory, file_name));

    // The worker must outlive every event; there is no shutdown hook to hand it to
    std::mem::forget(guard);

    Ok(fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_span_events(FmtSpan::CLOSE)
        .boxed())
}

/// Every enabled output layer for `config`
pub fn create_layers(config: &LoggingConfig) -> Result<Vec<BoxedLayer>> {
    let mut layers = Vec::new();
    layers.extend(create_console_layer(&config.output));
    if config.output.file {
        layers.push(create_file_layer(&config.file)?);
    }
    Ok(layers)
}

/// Build the level filter from the global level and per-module overrides
pub fn create_env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    let mut filter = EnvFilter::new(config.level.0.as_str().to_ascii_lowercase());

    for (module, level) in &config.module_levels {
        let directive = format!("{module}={}", level.0.as_str().to_ascii_lowercase())
            .parse()
            .with_context(|| format!("Invalid filter directive for module '{module}'"))?;
        filter = filter.add_directive(directive);
    }

    Ok(filter)
}
