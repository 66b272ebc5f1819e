//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the keypad works out of the box.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// UI appearance and behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// `chrono` format string for the status bar clock.
    #[serde(default = "default_clock_format")]
    pub clock_format: String,
    /// How many 50 ms ticks a pressed button stays highlighted.
    #[serde(default = "default_highlight_ticks")]
    pub highlight_ticks: u8,
    #[serde(default = "default_true")]
    pub show_help: bool,
    /// Capture the mouse so keypad buttons can be clicked.
    #[serde(default = "default_true")]
    pub mouse: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            clock_format: default_clock_format(),
            highlight_ticks: default_highlight_ticks(),
            show_help: true,
            mouse: true,
        }
    }
}

impl UiConfig {
    /// Whether `clock_format` only uses specifiers chrono understands.
    pub fn clock_format_is_valid(&self) -> bool {
        !StrftimeItems::new(&self.clock_format).any(|item| matches!(item, Item::Error))
    }

    /// Render `now` for the status bar. An unusable `clock_format` falls
    /// back to the default instead of failing the draw.
    pub fn format_clock(&self, now: &DateTime<Local>) -> String {
        let mut out = String::new();
        if write!(out, "{}", now.format(&self.clock_format)).is_err() {
            out.clear();
            let _ = write!(out, "{}", now.format(&default_clock_format()));
        }
        out
    }
}

/// Diagnostic log settings. The terminal belongs to the UI, so logs go to a file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// Default filter directive; `RUST_LOG` wins when set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_clock_format() -> String {
    "%H:%M".to_string()
}

fn default_highlight_ticks() -> u8 {
    4
}

fn default_log_dir() -> String {
    "~/.local/share/crabdial/logs".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}
