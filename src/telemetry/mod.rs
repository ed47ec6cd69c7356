//! Telemetry initialization
//!
//! Sets up the `tracing` subscriber the rest of the crate logs through,
//! including the undeclared-dependency diagnostics emitted during tool
//! synthesis.

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

use crate::config::Settings;
use crate::utils::error::ToolkitResult;

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Configuration for the telemetry system
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Name of the service
    pub service_name: String,

    /// Enable console output
    pub enable_console: bool,

    /// Log level used when `RUST_LOG` is not set
    pub log_level: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "component-toolkit".to_string(),
            enable_console: true,
            log_level: "info".to_string(),
        }
    }
}

impl TelemetryConfig {
    /// Derives a telemetry configuration from loaded settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            log_level: settings.logger.level.clone(),
            enable_console: settings
                .logger
                .transports
                .iter()
                .any(|t| t == "console")
                || settings.logger.transports.is_empty(),
            ..Self::default()
        }
    }
}

/// Initialize telemetry for the specified service with configuration options.
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_telemetry(config: TelemetryConfig) -> ToolkitResult<()> {
    INITIALIZED.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_ansi(config.enable_console)
            .try_init();
    });

    Ok(())
}
