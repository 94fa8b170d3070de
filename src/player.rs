//! # Melody Playback
//!
//! The player steps a note table out to a [`ToneOutput`] device, strictly
//! sequentially and blocking: no note begins before the previous note's hold
//! and inter-note gap complete. Time comes from a [`Clock`] so tests and
//! development mode can run against virtual time instead of sleeping.

use crate::melody::STARTUP_SCALE;
use crate::Note;
use std::thread;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Forced-silence gap between notes, for clarity
pub const NOTE_GAP_MS: u32 = 20;

/// Tone hold per startup-scale note
const STARTUP_TONE_MS: u32 = 150;
/// Silence gap between startup-scale notes
const STARTUP_GAP_MS: u32 = 50;

/// Error from a tone output device (PWM failure, pin contention, ...)
#[derive(Error, Debug)]
#[error("tone output: {0}")]
pub struct ToneError(pub String);

/// A single PWM-capable audio output.
///
/// Implementations: the rppal PWM buzzer in the binary (`hardware` feature)
/// and [`crate::sim::ConsoleTone`] for development and tests.
pub trait ToneOutput {
    /// Start emitting a continuous tone at the given frequency
    fn tone(&mut self, frequency_hz: u16) -> Result<(), ToneError>;
    /// Stop emitting
    fn silence(&mut self) -> Result<(), ToneError>;
}

/// Source of monotonic time and blocking delays.
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin (process start)
    fn now_ms(&self) -> u64;
    /// Block for the given number of milliseconds
    fn sleep_ms(&mut self, ms: u32);
}

/// Real clock: `Instant`-based monotonic time plus `thread::sleep`.
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    fn sleep_ms(&mut self, ms: u32) {
        thread::sleep(Duration::from_millis(ms as u64));
    }
}

/// Blocking melody player over a tone output and a clock.
pub struct Player<T: ToneOutput, C: Clock> {
    tone: T,
    pub clock: C,
}

impl<T: ToneOutput, C: Clock> Player<T, C> {
    pub fn new(tone: T, clock: C) -> Self {
        Self { tone, clock }
    }

    /// Play a melody start to finish.
    ///
    /// Per note: rest (0 Hz) emits silence, anything else a tone; hold for
    /// the note's duration, then force silence and hold the 20 ms gap. After
    /// the last note the output is silenced unconditionally, in case the
    /// final note was audible.
    pub fn play(&mut self, melody: &[Note]) -> Result<(), ToneError> {
        for note in melody {
            if note.frequency_hz == 0 {
                self.tone.silence()?;
            } else {
                self.tone.tone(note.frequency_hz)?;
            }
            self.clock.sleep_ms(note.duration_ms);

            // Small pause between notes for clarity
            self.tone.silence()?;
            self.clock.sleep_ms(NOTE_GAP_MS);
        }

        self.tone.silence()?;
        Ok(())
    }

    /// Play the fixed ascending startup scale, once, before the main loop.
    pub fn play_startup(&mut self) -> Result<(), ToneError> {
        for &frequency in STARTUP_SCALE {
            self.tone.tone(frequency)?;
            self.clock.sleep_ms(STARTUP_TONE_MS);
            self.tone.silence()?;
            self.clock.sleep_ms(STARTUP_GAP_MS);
        }
        self.clock.sleep_ms(500);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::melody::{ALERT_MELODY, HAPPY_MELODY, NOTE_C5, NOTE_REST};

    /// Virtual clock: sleeping just advances the counter.
    struct TestClock {
        now: u64,
    }

    impl Clock for TestClock {
        fn now_ms(&self) -> u64 {
            self.now
        }

        fn sleep_ms(&mut self, ms: u32) {
            self.now += ms as u64;
        }
    }

    #[derive(Debug, PartialEq, Eq)]
    enum Emission {
        Tone(u16),
        Silence,
    }

    /// Tone output that records every emission in order.
    #[derive(Default)]
    struct RecordingTone {
        log: std::rc::Rc<std::cell::RefCell<Vec<Emission>>>,
    }

    struct SharedLog(std::rc::Rc<std::cell::RefCell<Vec<Emission>>>);

    fn player_with_log() -> (Player<RecordingTone, TestClock>, SharedLog) {
        let tone = RecordingTone::default();
        let log = SharedLog(tone.log.clone());
        (Player::new(tone, TestClock { now: 0 }), log)
    }

    impl ToneOutput for RecordingTone {
        fn tone(&mut self, frequency_hz: u16) -> Result<(), ToneError> {
            self.log.borrow_mut().push(Emission::Tone(frequency_hz));
            Ok(())
        }

        fn silence(&mut self) -> Result<(), ToneError> {
            self.log.borrow_mut().push(Emission::Silence);
            Ok(())
        }
    }

    #[test]
    fn melody_emission_sequence_is_note_silence_pairs() {
        let (mut player, log) = player_with_log();
        player.play(ALERT_MELODY).unwrap();

        let log = log.0.borrow();
        // Per note: one tone-or-silence emission plus one gap silence,
        // then a final unconditional silence
        assert_eq!(log.len(), ALERT_MELODY.len() * 2 + 1);

        for (i, note) in ALERT_MELODY.iter().enumerate() {
            let expected = if note.frequency_hz == NOTE_REST {
                Emission::Silence
            } else {
                Emission::Tone(note.frequency_hz)
            };
            assert_eq!(log[i * 2], expected, "note {}", i);
            assert_eq!(log[i * 2 + 1], Emission::Silence, "gap after note {}", i);
        }
        assert_eq!(*log.last().unwrap(), Emission::Silence);
    }

    #[test]
    fn playback_duration_accounts_for_gaps() {
        let (mut player, _log) = player_with_log();
        player.play(HAPPY_MELODY).unwrap();

        let expected: u64 = HAPPY_MELODY
            .iter()
            .map(|n| (n.duration_ms + NOTE_GAP_MS) as u64)
            .sum();
        assert_eq!(player.clock.now_ms(), expected);
    }

    #[test]
    fn startup_scale_plays_eight_tones() {
        let (mut player, log) = player_with_log();
        player.play_startup().unwrap();

        let log = log.0.borrow();
        let tones: Vec<u16> = log
            .iter()
            .filter_map(|e| match e {
                Emission::Tone(hz) => Some(*hz),
                Emission::Silence => None,
            })
            .collect();
        assert_eq!(tones, STARTUP_SCALE);

        // 8 * (150 tone + 50 gap) + trailing 500 ms settle
        assert_eq!(player.clock.now_ms(), 8 * 200 + 500);
    }

    #[test]
    fn rest_notes_emit_silence_not_zero_hertz_tones() {
        let (mut player, log) = player_with_log();
        let melody = [
            Note {
                frequency_hz: NOTE_C5,
                duration_ms: 100,
            },
            Note {
                frequency_hz: NOTE_REST,
                duration_ms: 100,
            },
        ];
        player.play(&melody).unwrap();

        let log = log.0.borrow();
        assert_eq!(log[0], Emission::Tone(NOTE_C5));
        assert_eq!(log[2], Emission::Silence);
        assert!(log.iter().all(|e| !matches!(e, Emission::Tone(0))));
    }
}
