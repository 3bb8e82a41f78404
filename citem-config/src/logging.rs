use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    pub enabled: bool,
    /// Maximum level that gets printed: off, error, warn, info, debug or trace.
    pub level: String,
    pub threads: bool,
    pub color: bool,
    pub timestamp: bool,
}

impl LoggingConfig {
    pub const LEVELS: [&'static str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

    pub fn validate(&self) -> Result<(), String> {
        if Self::LEVELS.contains(&self.level.to_ascii_lowercase().as_str()) {
            Ok(())
        } else {
            Err(format!(
                "Unknown log level \"{}\", expected one of {:?}",
                self.level,
                Self::LEVELS
            ))
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: "info".to_string(),
            threads: true,
            color: true,
            timestamp: true,
        }
    }
}
