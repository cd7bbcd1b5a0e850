//! Configuration management for Slidecue.
//!
//! This module provides:
//! - TOML-based configuration with logical sections
//! - Atomic file writes (write to temp, then rename)
//! - Section-level updates (only the changed section is modified)
//! - Validation on load with automatic defaults
//!
//! # Example
//!
//! ```no_run
//! use slidecue_core::config::{ConfigManager, ConfigSection};
//!
//! // Create manager and load (or create default) config
//! let mut config = ConfigManager::new(".config/slidecue.toml");
//! config.load_or_create().unwrap();
//!
//! // Read settings
//! println!("Auto-shift: {}", config.settings().timing.auto_shift);
//!
//! // Modify a setting
//! config.settings_mut().timing.auto_shift = false;
//!
//! // Save just the timing section atomically
//! config.update_section(ConfigSection::Timing).unwrap();
//! ```

mod manager;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigResult};
pub use settings::{ConfigSection, ExportSettings, LoggingSettings, Settings, TimingSettings};
