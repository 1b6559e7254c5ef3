// ABOUTME: Public API for Tincture logging built on tokio-tracing
// ABOUTME: Re-exports the tracing macros and owns subscriber setup for embedding applications

pub mod config;
pub mod layers;
pub mod performance;
pub mod reload;
pub mod subscriber;

#[cfg(test)]
mod structured_tests;

// Re-export tracing macros so engine crates log through one facade
pub use tracing::{Level, Span, debug, error, info, instrument, span, trace, warn};

use std::sync::OnceLock;

pub use config::LoggingConfig;
pub use performance::PerfTimer;
pub use reload::LoggingReloadHandle;
pub use subscriber::{init_subscriber, init_subscriber_with_reload};

use anyhow::Result;

static GLOBAL_RELOAD_HANDLE: OnceLock<LoggingReloadHandle> = OnceLock::new();

/// Initialize logging from the default configuration plus environment overrides
pub fn init_logging() -> Result<()> {
    init_subscriber(LoggingConfig::from_env()?)
}

pub fn init_logging_with_config(config: LoggingConfig) -> Result<()> {
    init_subscriber(config)
}

/// Initialize logging with a reloadable filter.
///
/// The handle is also stored globally for [`update_log_level`].
pub fn init_logging_with_reload(config: LoggingConfig) -> Result<LoggingReloadHandle> {
    let handle = init_subscriber_with_reload(config)?;
    let _ = GLOBAL_RELOAD_HANDLE.set(handle.clone());
    Ok(handle)
}

/// Update the global level through the stored reload handle
pub fn update_log_level(level: Level) -> Result<()> {
    match GLOBAL_RELOAD_HANDLE.get() {
        Some(handle) => handle.update_log_level(level),
        None => anyhow::bail!("Logging not initialized with reload support"),
    }
}

/// Update one module's level through the stored reload handle
pub fn update_module_level(module: &str, level: Level) -> Result<()> {
    match GLOBAL_RELOAD_HANDLE.get() {
        Some(handle) => handle.update_module_level(module, level),
        None => anyhow::bail!("Logging not initialized with reload support"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_without_reload_support_fails() {
        // Nothing in this test binary installs a reloadable subscriber
        assert!(update_log_level(Level::DEBUG).is_err());
        assert!(update_module_level("tincture_core", Level::TRACE).is_err());
    }

    #[test]
    fn test_macros_available() {
        info!("info through the facade");
        debug!(scale = "primary", "debug through the facade");
        warn!("warn through the facade");
        error!("error through the facade");
    }
}
