//! # Configuration Management
//!
//! This module handles loading and parsing configuration from the
//! plant-config.toml file. It provides a centralized way to configure sensor
//! thresholds, loop timing, and hardware pin assignments.
//!
//! Every value has a compiled-in default matching the original deployment, so
//! the monitor runs without any config file present.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Application configuration loaded from plant-config.toml
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Sensor interpretation thresholds
    pub thresholds: Thresholds,
    /// Loop and playback timing
    pub timing: TimingConfig,
    /// Hardware channel assignments
    pub hardware: HardwareConfig,
}

/// Threshold configuration for classifying raw 12-bit readings.
///
/// Comparisons are strict: a reading exactly at a threshold falls into the
/// middle bucket (1500 is OPTIMAL, not DRY).
#[derive(Debug, Deserialize, Serialize)]
pub struct Thresholds {
    /// Moisture readings below this are dry soil
    pub moisture_dry: u16,
    /// Moisture readings above this are waterlogged soil
    pub moisture_wet: u16,
    /// Light readings below this are dark conditions
    pub light_dark: u16,
    /// Light readings above this are bright conditions
    pub light_bright: u16,
}

/// Loop cadence and melody replay timing
#[derive(Debug, Deserialize, Serialize)]
pub struct TimingConfig {
    /// Minimum interval between melody playbacks in milliseconds
    pub melody_interval_ms: u64,
    /// Fixed delay between loop cycles in milliseconds
    pub cycle_delay_ms: u32,
}

/// Hardware channel assignments for the Raspberry Pi adapters
#[derive(Debug, Deserialize, Serialize)]
pub struct HardwareConfig {
    /// MCP3208 ADC channel wired to the soil moisture sensor
    pub moisture_channel: u8,
    /// MCP3208 ADC channel wired to the light sensor (LDR)
    pub light_channel: u8,
    /// PWM channel driving the piezo buzzer (0 = GPIO18, 1 = GPIO19)
    pub buzzer_pwm_channel: u8,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            thresholds: Thresholds {
                moisture_dry: 1500,
                moisture_wet: 3000,
                light_dark: 1000,
                light_bright: 3000,
            },
            timing: TimingConfig {
                melody_interval_ms: 10_000, // Play melody every 10 seconds
                cycle_delay_ms: 2000,       // Wait between readings
            },
            hardware: HardwareConfig {
                moisture_channel: 0,
                light_channel: 3,
                buzzer_pwm_channel: 0,
            },
        }
    }
}

impl Config {
    /// Load configuration from plant-config.toml file
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load() -> Self {
        Self::load_from_path("plant-config.toml")
    }

    /// Load configuration from specified path
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str::<Config>(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Warning: Invalid config file format: {}", e);
                    eprintln!("Using default configuration");
                    Self::default()
                }
            },
            Err(_) => {
                eprintln!("Info: No config file found, using default configuration");
                Self::default()
            }
        }
    }

    /// Save current configuration to plant-config.toml
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let contents = toml::to_string_pretty(self)?;
        fs::write("plant-config.toml", contents)?;
        println!("Configuration saved to plant-config.toml");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.thresholds.moisture_dry, 1500);
        assert_eq!(config.thresholds.moisture_wet, 3000);
        assert_eq!(config.thresholds.light_dark, 1000);
        assert_eq!(config.thresholds.light_bright, 3000);
        assert_eq!(config.timing.melody_interval_ms, 10_000);
        assert_eq!(config.timing.cycle_delay_ms, 2000);
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(config.thresholds.moisture_dry, parsed.thresholds.moisture_dry);
        assert_eq!(config.timing.melody_interval_ms, parsed.timing.melody_interval_ms);
        assert_eq!(config.hardware.light_channel, parsed.hardware.light_channel);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let config = Config::load_from_path("/nonexistent/path");
        // Should fallback to default
        assert_eq!(config.thresholds.moisture_dry, 1500);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[thresholds]
moisture_dry = 1200
moisture_wet = 2800
light_dark = 900
light_bright = 3100

[timing]
melody_interval_ms = 15000
cycle_delay_ms = 1000

[hardware]
moisture_channel = 1
light_channel = 2
buzzer_pwm_channel = 1
"#
        )
        .unwrap();

        let config = Config::load_from_path(file.path());
        assert_eq!(config.thresholds.moisture_dry, 1200);
        assert_eq!(config.timing.melody_interval_ms, 15_000);
        assert_eq!(config.hardware.buzzer_pwm_channel, 1);
    }

    #[test]
    fn test_invalid_file_falls_back_to_default() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not valid toml [[[").unwrap();

        let config = Config::load_from_path(file.path());
        assert_eq!(config.thresholds.moisture_wet, 3000);
    }
}
