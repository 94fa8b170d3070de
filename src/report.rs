//! # Diagnostic Reporting
//!
//! Human-readable status text for the serial console / journal. Pure
//! formatting: these functions assemble `String`s and the control loop writes
//! them to whatever `io::Write` sink it was given. Nothing here influences
//! control flow.

use crate::classifier::{ConditionState, OverallState};
use crate::config::Config;
use crate::pattern::Pattern;
use crate::Reading;
use std::fmt::Write;

/// Qualitative health label, derived solely from the overall state.
pub fn health_label(overall: OverallState) -> &'static str {
    match overall {
        OverallState::Happy => "thriving",
        OverallState::Stressed => "needs attention",
        OverallState::Alert => "requires immediate care",
        OverallState::Neutral => "stable",
    }
}

/// Startup banner with the active threshold and timing configuration.
pub fn format_configuration(config: &Config) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Configuration:");
    let _ = writeln!(
        out,
        "- Moisture Dry Threshold: {}",
        config.thresholds.moisture_dry
    );
    let _ = writeln!(
        out,
        "- Moisture Wet Threshold: {}",
        config.thresholds.moisture_wet
    );
    let _ = writeln!(
        out,
        "- Light Dark Threshold: {}",
        config.thresholds.light_dark
    );
    let _ = writeln!(
        out,
        "- Light Bright Threshold: {}",
        config.thresholds.light_bright
    );
    let _ = writeln!(
        out,
        "- Melody Interval: {} seconds",
        config.timing.melody_interval_ms / 1000
    );
    out
}

/// Per-cycle status report: raw readings, interpreted states, selected
/// pattern and the health label.
pub fn format_status(
    reading: &Reading,
    state: &ConditionState,
    pattern: Pattern,
    uptime_secs: u64,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Plant Status Report ===");
    let _ = writeln!(out, "Timestamp: {}s", uptime_secs);
    let _ = writeln!(out, "Raw Sensor Readings:");
    let _ = writeln!(out, "  Soil Moisture: {} (0-4095)", reading.moisture_raw);
    let _ = writeln!(out, "  Light Level:   {} (0-4095)", reading.light_raw);
    let _ = writeln!(out, "Interpreted States:");
    let _ = writeln!(out, "  Moisture: {}", state.moisture);
    let _ = writeln!(out, "  Light:    {}", state.light);
    let _ = writeln!(out, "  Overall:  {}", state.overall);
    let _ = writeln!(out, "Selected Musical Pattern: {}", pattern);
    let _ = writeln!(out, "Plant Health: {}", health_label(state.overall));
    let _ = writeln!(out, "========================");
    out
}
