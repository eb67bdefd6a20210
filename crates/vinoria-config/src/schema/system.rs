//! System configuration types: frame pacing and logging.

use serde::{Deserialize, Serialize};

/// Frame pacing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Upper bound on a single frame's simulation delta, in seconds.
    pub max_frame_delta: f64,
    /// Seconds between FPS log lines (0 disables).
    pub fps_log_interval: f64,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            max_frame_delta: 0.1,
            fps_log_interval: 10.0,
        }
    }
}

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// `tracing-subscriber` filter directive for the workspace crates.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "vinoria=trace",
            LogLevel::Debug => "vinoria=debug",
            LogLevel::Info => "vinoria=info",
            LogLevel::Warning => "vinoria=warn",
            LogLevel::Error => "vinoria=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
