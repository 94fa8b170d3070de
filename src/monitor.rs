//! # Control Loop
//!
//! [`PlantMonitor`] owns every piece of pipeline state - the sampler's
//! smoothing windows, the melody replay gate, the sensor provider and the
//! player - and runs the cycle: sample, classify, select, report, and
//! (when the gate opens) play.
//!
//! The loop is single-threaded and cooperative. Melody playback and the
//! inter-cycle delay block in-line, so actual playback can lag the nominal
//! 10 s interval by up to one full loop period. That matches the original
//! behavior and is accepted.

use crate::classifier::{classify, ConditionState};
use crate::config::Config;
use crate::pattern::{select, Pattern};
use crate::player::{Clock, Player, ToneError, ToneOutput};
use crate::report;
use crate::sampler::{Sampler, SensorProvider};
use crate::Reading;
use std::io;
use thiserror::Error;

/// Errors surfaced by the control loop itself.
///
/// The classification pipeline has no error path by design; only the tone
/// output and the diagnostic sink can fail.
#[derive(Error, Debug)]
pub enum MonitorError {
    /// Tone output device failed
    #[error("playback: {0}")]
    Tone(#[from] ToneError),

    /// Diagnostic sink write failed
    #[error("diagnostic sink: {0}")]
    Sink(#[from] io::Error),
}

/// Gates melody playback to a fixed minimum interval.
///
/// The last-played timestamp starts at zero, so the first gated playback
/// happens one full interval after process start (the startup scale has
/// already played by then).
#[derive(Clone, Copy, Debug)]
pub struct MelodyGate {
    last_played_ms: u64,
    interval_ms: u64,
}

impl MelodyGate {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            last_played_ms: 0,
            interval_ms,
        }
    }

    /// True once a full interval has elapsed since the last playback.
    pub fn is_open(&self, now_ms: u64) -> bool {
        now_ms - self.last_played_ms >= self.interval_ms
    }

    /// Record a completed playback.
    pub fn mark_played(&mut self, now_ms: u64) {
        self.last_played_ms = now_ms;
    }
}

/// What one cycle observed and did. Returned for tests and development mode.
#[derive(Clone, Copy, Debug)]
pub struct CycleOutcome {
    pub reading: Reading,
    pub state: ConditionState,
    pub pattern: Pattern,
    pub played: bool,
}

/// The monitor: all loop state plus the external collaborators.
pub struct PlantMonitor<P: SensorProvider, T: ToneOutput, C: Clock> {
    config: Config,
    sampler: Sampler,
    gate: MelodyGate,
    sensors: P,
    player: Player<T, C>,
}

impl<P: SensorProvider, T: ToneOutput, C: Clock> PlantMonitor<P, T, C> {
    pub fn new(config: Config, sensors: P, tone: T, clock: C) -> Self {
        let gate = MelodyGate::new(config.timing.melody_interval_ms);
        Self {
            config,
            sampler: Sampler::new(),
            gate,
            sensors,
            player: Player::new(tone, clock),
        }
    }

    /// One-time startup: banner, configuration printout, startup scale.
    pub fn start<W: io::Write>(&mut self, sink: &mut W) -> Result<(), MonitorError> {
        writeln!(sink, "=================================")?;
        writeln!(sink, "Plant Music Monitor Started")?;
        writeln!(sink, "=================================")?;
        writeln!(sink, "Monitoring soil moisture and light conditions...")?;
        write!(sink, "{}", report::format_configuration(&self.config))?;

        writeln!(sink, "Playing startup sequence...")?;
        self.player.play_startup()?;
        writeln!(sink, "Startup sequence complete!")?;
        Ok(())
    }

    /// Run one cycle: sample, classify, select, report, maybe play.
    ///
    /// Does not include the inter-cycle delay; `run` adds it.
    pub fn cycle<W: io::Write>(&mut self, sink: &mut W) -> Result<CycleOutcome, MonitorError> {
        let reading = self.sampler.sample(&mut self.sensors);
        let state = classify(reading, &self.config.thresholds);
        let pattern = select(&state);

        let uptime_secs = self.player.clock.now_ms() / 1000;
        write!(
            sink,
            "{}",
            report::format_status(&reading, &state, pattern, uptime_secs)
        )?;

        // Playback cadence is re-checked once per cycle, not via a timer
        let mut played = false;
        if self.gate.is_open(self.player.clock.now_ms()) {
            writeln!(sink, "Playing melody: {}", pattern)?;
            self.player.play(pattern.melody())?;
            self.gate.mark_played(self.player.clock.now_ms());
            played = true;
        }

        Ok(CycleOutcome {
            reading,
            state,
            pattern,
            played,
        })
    }

    /// Run a bounded number of cycles with the inter-cycle delay.
    /// Used by development mode and tests.
    pub fn run_cycles<W: io::Write>(
        &mut self,
        cycles: usize,
        sink: &mut W,
    ) -> Result<Vec<CycleOutcome>, MonitorError> {
        let mut outcomes = Vec::with_capacity(cycles);
        for _ in 0..cycles {
            outcomes.push(self.cycle(sink)?);
            let delay = self.config.timing.cycle_delay_ms;
            self.player.clock.sleep_ms(delay);
        }
        Ok(outcomes)
    }

    /// Run forever. Only errors from the tone output or the sink escape.
    pub fn run<W: io::Write>(&mut self, sink: &mut W) -> Result<(), MonitorError> {
        loop {
            self.cycle(sink)?;
            let delay = self.config.timing.cycle_delay_ms;
            self.player.clock.sleep_ms(delay);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_opens_after_interval() {
        let mut gate = MelodyGate::new(10_000);
        // Starts at zero: closed until one full interval has passed
        assert!(!gate.is_open(0));
        assert!(!gate.is_open(9_999));
        assert!(gate.is_open(10_000));

        gate.mark_played(10_000);
        assert!(!gate.is_open(15_000));
        assert!(gate.is_open(20_000));
    }
}
