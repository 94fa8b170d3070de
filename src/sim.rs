//! # Simulated Collaborators
//!
//! Development-mode stand-ins for the hardware: a deterministic synthetic
//! sensor waveform, a console tone output that prints notes instead of
//! sounding them, and a virtual clock that advances instead of sleeping.
//!
//! The sensor model is intentionally simple but exercises every condition
//! bucket: light follows a full-range sine "day" while the soil slowly dries
//! out from waterlogged to parched and is then "watered" back to the top.
//! Runs are deterministic - the waveform depends only on the step counter,
//! never on wall-clock time.

use crate::player::{Clock, ToneError, ToneOutput};
use crate::sampler::SensorProvider;
use std::f32::consts::TAU;

/// Steps for one full simulated day of light
const LIGHT_PERIOD_STEPS: u32 = 48;
/// Steps for the soil to dry from 4095 to 0
const DRYOUT_PERIOD_STEPS: u32 = 96;

/// Deterministic synthetic sensor waveform for development and tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimulatedSensors {
    step: u32,
}

impl SimulatedSensors {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SensorProvider for SimulatedSensors {
    fn read_moisture(&mut self) -> u16 {
        // Linear dry-out ramp, reset ("watering") each period
        let phase = self.step % DRYOUT_PERIOD_STEPS;
        let level = 4095 - (4095 * phase) / DRYOUT_PERIOD_STEPS;
        level as u16
    }

    fn read_light(&mut self) -> u16 {
        let phase = (self.step % LIGHT_PERIOD_STEPS) as f32 / LIGHT_PERIOD_STEPS as f32;
        let level = 2047.5 + 2047.5 * (phase * TAU).sin();
        // light is read second each cycle, so the step advances here
        self.step += 1;
        level.clamp(0.0, 4095.0) as u16
    }
}

/// Tone output that narrates playback on the console.
#[derive(Default)]
pub struct ConsoleTone {
    sounding: bool,
}

impl ConsoleTone {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ToneOutput for ConsoleTone {
    fn tone(&mut self, frequency_hz: u16) -> Result<(), ToneError> {
        println!("  [buzzer] {} Hz", frequency_hz);
        self.sounding = true;
        Ok(())
    }

    fn silence(&mut self) -> Result<(), ToneError> {
        // Only narrate transitions, not the per-note gap chatter
        if self.sounding {
            println!("  [buzzer] off");
            self.sounding = false;
        }
        Ok(())
    }
}

/// Clock whose sleeps advance virtual time instantly.
///
/// Development mode and tests use this so a 10-second melody interval does
/// not take 10 real seconds.
#[derive(Clone, Copy, Debug, Default)]
pub struct VirtualClock {
    now_ms: u64,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for VirtualClock {
    fn now_ms(&self) -> u64 {
        self.now_ms
    }

    fn sleep_ms(&mut self, ms: u32) {
        self.now_ms += ms as u64;
    }
}
