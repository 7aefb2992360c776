//! Structured logging setup

use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::Result};

/// Initialize JSON tracing output filtered by `service.log_level`
///
/// An invalid filter directive falls back to `info`. Calling this again after
/// a subscriber is installed is a no-op, so tests and embedders can call it freely.
pub fn init_tracing(config: &Config) -> Result<()> {
    let log_level = &config.service.log_level;

    let installed = tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("Tracing initialized for service: {}", config.service.name);
    } else {
        tracing::debug!("Tracing subscriber already installed");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_is_idempotent() {
        let config = Config::default();
        assert!(init_tracing(&config).is_ok());
        assert!(init_tracing(&config).is_ok());
    }

    #[test]
    fn test_init_tracing_with_bad_filter() {
        let mut config = Config::default();
        config.service.log_level = "bird_service=nonsense[".to_string();
        assert!(init_tracing(&config).is_ok());
    }
}
