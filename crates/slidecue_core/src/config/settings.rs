//! Settings struct with TOML-based sections.
//!
//! Settings are organized into logical sections that map to TOML
//! tables. Each section can be updated independently for atomic
//! section-level updates.

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Slide timing behavior.
    #[serde(default)]
    pub timing: TimingSettings,

    /// Export defaults.
    #[serde(default)]
    pub export: ExportSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Slide timing behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingSettings {
    /// Span given to a newly created slide, in seconds.
    #[serde(default = "default_slide_span")]
    pub default_slide_span_seconds: f64,

    /// Whether end-boundary edits cascade to all later slides.
    #[serde(default = "default_true")]
    pub auto_shift: bool,
}

fn default_slide_span() -> f64 {
    10.0
}

fn default_true() -> bool {
    true
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self {
            default_slide_span_seconds: default_slide_span(),
            auto_shift: true,
        }
    }
}

/// Export defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Suggested filename for exported subtitle text.
    #[serde(default = "default_export_filename")]
    pub default_filename: String,
}

fn default_export_filename() -> String {
    "slideshow-timing.srt".to_string()
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            default_filename: default_export_filename(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Minimum level for the global subscriber.
    #[serde(default)]
    pub level: LogLevel,

    /// Use compact log format.
    #[serde(default = "default_true")]
    pub compact: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            compact: true,
        }
    }
}

/// Names of config sections for targeted updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigSection {
    Timing,
    Export,
    Logging,
}

impl ConfigSection {
    /// Get the TOML table name for this section.
    pub fn table_name(&self) -> &'static str {
        match self {
            ConfigSection::Timing => "timing",
            ConfigSection::Export => "export",
            ConfigSection::Logging => "logging",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_serializes() {
        let settings = Settings::default();
        let toml = toml::to_string_pretty(&settings).unwrap();
        assert!(toml.contains("[timing]"));
        assert!(toml.contains("[logging]"));
        assert!(toml.contains("default_slide_span_seconds"));
    }

    #[test]
    fn settings_round_trip() {
        let settings = Settings::default();
        let toml = toml::to_string_pretty(&settings).unwrap();
        let parsed: Settings = toml::from_str(&toml).unwrap();
        assert_eq!(
            parsed.timing.default_slide_span_seconds,
            settings.timing.default_slide_span_seconds
        );
        assert_eq!(parsed.export.default_filename, settings.export.default_filename);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let minimal = "[timing]\ndefault_slide_span_seconds = 5.0";
        let parsed: Settings = toml::from_str(minimal).unwrap();
        // Custom value preserved
        assert_eq!(parsed.timing.default_slide_span_seconds, 5.0);
        // Defaults applied for missing
        assert!(parsed.timing.auto_shift);
        assert_eq!(parsed.export.default_filename, "slideshow-timing.srt");
        assert!(parsed.logging.compact);
    }
}
