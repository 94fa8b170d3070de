//! # Sensor Sampling and Smoothing
//!
//! This module owns the raw side of the pipeline: it pulls one analog
//! conversion per sensor per cycle from a [`SensorProvider`] and smooths it
//! through a fixed-depth moving-average window.
//!
//! ## Smoothing Strategy
//! Each sensor gets a 5-slot circular buffer. A new raw sample overwrites the
//! oldest slot and the smoothed value is the truncating integer mean over all
//! 5 slots. The buffers start zeroed, so the first few cycles average against
//! zeros and ramp up toward the true level - the monitor tolerates that
//! warm-up rather than special-casing it.
//!
//! There is no error path here by contract: a provider must always hand back
//! a plausible integer. Hardware adapters resolve their own I/O failures
//! internally (typically by repeating the last good conversion).

use crate::Reading;

/// Number of raw samples in each moving-average window
pub const SMOOTHING_DEPTH: usize = 5;

/// Source of raw analog conversions for both sensors.
///
/// Each call is a single blocking ADC conversion returning a 12-bit value
/// (0-4095). Implementations: the MCP3208 adapter in the binary (`hardware`
/// feature) and [`crate::sim::SimulatedSensors`] for development and tests.
pub trait SensorProvider {
    /// Read the soil moisture sensor (0-4095)
    fn read_moisture(&mut self) -> u16;
    /// Read the ambient light sensor (0-4095)
    fn read_light(&mut self) -> u16;
}

/// Fixed-capacity circular buffer holding the last 5 raw samples.
///
/// Never exposed outside the sampler; mutated every cycle.
#[derive(Clone, Debug)]
pub struct SmoothingWindow {
    slots: [u16; SMOOTHING_DEPTH],
    index: usize,
}

impl SmoothingWindow {
    pub fn new() -> Self {
        Self {
            slots: [0; SMOOTHING_DEPTH],
            index: 0,
        }
    }

    /// Overwrite the oldest slot with a new raw sample.
    pub fn push(&mut self, raw: u16) {
        self.slots[self.index] = raw;
        self.index = (self.index + 1) % SMOOTHING_DEPTH;
    }

    /// Truncating integer mean over all 5 slots (zeros included during warm-up).
    pub fn mean(&self) -> u16 {
        let sum: u32 = self.slots.iter().map(|&s| s as u32).sum();
        (sum / SMOOTHING_DEPTH as u32) as u16
    }
}

impl Default for SmoothingWindow {
    fn default() -> Self {
        Self::new()
    }
}

/// Stateful sampling stage: one smoothing window per sensor.
#[derive(Clone, Debug, Default)]
pub struct Sampler {
    moisture: SmoothingWindow,
    light: SmoothingWindow,
}

impl Sampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read both sensors once, update the windows, return the smoothed pair.
    pub fn sample<P: SensorProvider>(&mut self, provider: &mut P) -> Reading {
        self.moisture.push(provider.read_moisture());
        self.light.push(provider.read_light());
        Reading {
            moisture_raw: self.moisture.mean(),
            light_raw: self.light.mean(),
        }
    }
}
