use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::utils::error::{ToolkitError, ToolkitResult};

/// Settings for the toolkit host
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Logger settings
    #[serde(default)]
    pub logger: LoggerSettings,
}

/// Logger settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// Log transports (file, console)
    #[serde(default)]
    pub transports: Vec<String>,

    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log file path
    pub path: Option<String>,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            transports: Vec::new(),
            level: default_log_level(),
            path: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Load settings from a YAML file
pub fn load_settings<P: AsRef<Path>>(path: P) -> ToolkitResult<Settings> {
    let mut file = File::open(path)
        .map_err(|e| ToolkitError::Config(format!("Failed to open config file: {}", e)))?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| ToolkitError::Config(format!("Failed to read config file: {}", e)))?;

    parse_settings(&contents)
}

/// Parse settings from a YAML string
pub fn parse_settings(contents: &str) -> ToolkitResult<Settings> {
    serde_yaml::from_str(contents)
        .map_err(|e| ToolkitError::Config(format!("Failed to parse config file: {}", e)))
}
