//! # Plant Music Monitor Core Library
//!
//! This library provides the sensing, classification and playback pipeline for
//! the plant music monitor: a small periodic control loop that samples a soil
//! moisture sensor and a light sensor, classifies the plant's condition from
//! smoothed readings, and answers with one of four pre-authored melodies on a
//! piezo buzzer.
//!
//! ## Design Philosophy
//!
//! ### Explicit pipeline state
//! All mutable state (the two 5-slot smoothing windows, the melody replay
//! gate) is owned by [`monitor::PlantMonitor`] and threaded through the
//! pipeline stages. The classifier and pattern selector are pure functions,
//! which keeps the interesting logic testable on any host.
//!
//! ### Hardware behind traits
//! The library never touches a register. Raw analog conversions come from a
//! [`sampler::SensorProvider`], tones go to a [`player::ToneOutput`], and
//! time comes from a [`player::Clock`]. The binary supplies real Raspberry Pi
//! implementations behind the `hardware` cargo feature and simulated ones for
//! development mode.
//!
//! ### Permissive by design
//! Sensor reads are trusted: there is no range validation, no disconnect
//! detection and no retry policy. Ambiguous readings resolve into the
//! classifier's catch-all buckets rather than signalling errors, so the loop
//! runs indefinitely regardless of how implausible the inputs are.
//!
//! ## Data Flow
//! 1. **Sample**: read both sensors, push into the smoothing windows, return
//!    the truncating 5-sample means
//! 2. **Classify**: threshold the smoothed pair into discrete condition states
//! 3. **Select**: map the condition to one of four melody patterns
//! 4. **Play**: every 10 s, step the selected melody out to the buzzer
//!
//! A status report is written every cycle regardless of melody timing.

use serde::{Deserialize, Serialize};

// Module declarations
pub mod classifier;
pub mod config;
pub mod melody;
pub mod monitor;
pub mod pattern;
pub mod player;
pub mod report;
pub mod sampler;
pub mod sim;

/// One pair of smoothed sensor readings, produced once per cycle.
///
/// Values are moving averages of the last 5 raw analog conversions, bounded
/// by the 12-bit ADC range (0-4095). A `Reading` is transient: it is
/// recomputed and discarded every cycle, and no history is retained beyond
/// the sampler's smoothing windows.
///
/// # Example
/// ```
/// use plant_monitor_lib::Reading;
///
/// let reading = Reading { moisture_raw: 2000, light_raw: 3500 };
/// assert!(reading.moisture_raw <= 4095);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    /// Smoothed soil moisture reading (0-4095)
    pub moisture_raw: u16,
    /// Smoothed ambient light reading (0-4095)
    pub light_raw: u16,
}

/// A single melody step: a tone frequency and how long to hold it.
///
/// A frequency of 0 Hz denotes a rest (silence held for the duration).
/// Melodies are `&'static [Note]` tables in [`melody`]; nothing mutates them
/// at runtime.
///
/// # Example
/// ```
/// use plant_monitor_lib::Note;
/// use plant_monitor_lib::melody::{NOTE_C5, NOTE_REST};
///
/// let tone = Note { frequency_hz: NOTE_C5, duration_ms: 200 };
/// let rest = Note { frequency_hz: NOTE_REST, duration_ms: 100 };
/// assert!(tone.frequency_hz > 0);
/// assert_eq!(rest.frequency_hz, 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Tone frequency in Hz; 0 means rest/silence
    pub frequency_hz: u16,
    /// How long to hold the tone (or rest) in milliseconds
    pub duration_ms: u32,
}
