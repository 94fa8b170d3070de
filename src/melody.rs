//! # Melody Library
//!
//! The four pre-authored melodies and the startup scale, stored as
//! compile-time constant note tables. Nothing here is mutated at runtime;
//! the tables have process-wide static lifetime.
//!
//! Frequencies are the usual equal-temperament values for the C4-A5 range,
//! matching the original pattern authoring.

use crate::Note;

// Note frequencies in Hz
pub const NOTE_C4: u16 = 262;
pub const NOTE_D4: u16 = 294;
pub const NOTE_E4: u16 = 330;
pub const NOTE_F4: u16 = 349;
pub const NOTE_G4: u16 = 392;
pub const NOTE_A4: u16 = 440;
pub const NOTE_B4: u16 = 494;
pub const NOTE_C5: u16 = 523;
pub const NOTE_D5: u16 = 587;
pub const NOTE_E5: u16 = 659;
pub const NOTE_F5: u16 = 698;
pub const NOTE_G5: u16 = 784;
pub const NOTE_A5: u16 = 880;
pub const NOTE_REST: u16 = 0;

const fn note(frequency_hz: u16, duration_ms: u32) -> Note {
    Note {
        frequency_hz,
        duration_ms,
    }
}

/// Upbeat melody for healthy, well-lit plants
pub static HAPPY_MELODY: &[Note] = &[
    note(NOTE_C5, 200),
    note(NOTE_E5, 200),
    note(NOTE_G5, 200),
    note(NOTE_C5, 200),
    note(NOTE_F5, 300),
    note(NOTE_E5, 200),
    note(NOTE_D5, 200),
    note(NOTE_C5, 400),
    note(NOTE_G5, 200),
    note(NOTE_F5, 200),
    note(NOTE_E5, 200),
    note(NOTE_G5, 400),
    note(NOTE_REST, 100),
];

/// Gentle melody for content plants
pub static RELAXED_MELODY: &[Note] = &[
    note(NOTE_C4, 400),
    note(NOTE_E4, 400),
    note(NOTE_G4, 600),
    note(NOTE_REST, 200),
    note(NOTE_F4, 400),
    note(NOTE_A4, 400),
    note(NOTE_C5, 600),
    note(NOTE_REST, 200),
    note(NOTE_G4, 400),
    note(NOTE_C5, 400),
    note(NOTE_E5, 800),
    note(NOTE_REST, 200),
];

/// Simple melody for stable conditions
pub static NEUTRAL_MELODY: &[Note] = &[
    note(NOTE_A4, 300),
    note(NOTE_REST, 100),
    note(NOTE_A4, 300),
    note(NOTE_REST, 100),
    note(NOTE_C5, 400),
    note(NOTE_B4, 400),
    note(NOTE_A4, 600),
    note(NOTE_REST, 200),
    note(NOTE_G4, 400),
    note(NOTE_A4, 400),
    note(NOTE_C5, 600),
    note(NOTE_REST, 200),
];

/// Warning melody for problematic conditions
pub static ALERT_MELODY: &[Note] = &[
    note(NOTE_C5, 150),
    note(NOTE_REST, 50),
    note(NOTE_C5, 150),
    note(NOTE_REST, 50),
    note(NOTE_C5, 150),
    note(NOTE_REST, 100),
    note(NOTE_G4, 200),
    note(NOTE_REST, 100),
    note(NOTE_C5, 150),
    note(NOTE_REST, 50),
    note(NOTE_C5, 150),
    note(NOTE_REST, 200),
];

/// Ascending C4-C5 scale played once at startup, independent of sensor state
pub static STARTUP_SCALE: &[u16] = &[
    NOTE_C4, NOTE_D4, NOTE_E4, NOTE_F4, NOTE_G4, NOTE_A4, NOTE_B4, NOTE_C5,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn melodies_are_nonempty_and_bounded() {
        for melody in [HAPPY_MELODY, RELAXED_MELODY, NEUTRAL_MELODY, ALERT_MELODY] {
            assert!(!melody.is_empty());
            for note in melody {
                // Rests are 0 Hz; audible notes stay in the authored C4-A5 range
                assert!(note.frequency_hz == NOTE_REST || (NOTE_C4..=NOTE_A5).contains(&note.frequency_hz));
                assert!(note.duration_ms > 0);
            }
        }
    }

    #[test]
    fn startup_scale_is_ascending() {
        assert_eq!(STARTUP_SCALE.len(), 8);
        for pair in STARTUP_SCALE.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert_eq!(STARTUP_SCALE[0], NOTE_C4);
        assert_eq!(STARTUP_SCALE[7], NOTE_C5);
    }
}
