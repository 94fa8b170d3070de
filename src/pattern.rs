//! # Pattern Selection
//!
//! Deterministic rule table mapping a [`ConditionState`] to one of the four
//! named melody patterns. The table is reproduced exactly from the original
//! deployment, including its asymmetries: both `Stressed` and `Alert` overall
//! states share the ALERT pattern, and RELAXED is reachable only through the
//! `Neutral` branch when moisture happens to be optimal.
//!
//! This is the seam for any future remote/LLM-driven selection: an alternate
//! selector only has to implement the same `ConditionState -> Pattern`
//! contract and neither the classifier nor the player changes.

use crate::classifier::{ConditionState, MoistureLevel, OverallState};
use crate::melody;
use crate::Note;
use std::fmt;

/// Named melody pattern
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pattern {
    Happy,
    Relaxed,
    Neutral,
    Alert,
}

impl Pattern {
    /// The static note table this pattern plays.
    pub fn melody(self) -> &'static [Note] {
        match self {
            Pattern::Happy => melody::HAPPY_MELODY,
            Pattern::Relaxed => melody::RELAXED_MELODY,
            Pattern::Neutral => melody::NEUTRAL_MELODY,
            Pattern::Alert => melody::ALERT_MELODY,
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Pattern::Happy => "HAPPY",
            Pattern::Relaxed => "RELAXED",
            Pattern::Neutral => "NEUTRAL",
            Pattern::Alert => "ALERT",
        };
        write!(f, "{}", tag)
    }
}

/// Select the melody pattern for a classified condition. Pure function.
pub fn select(state: &ConditionState) -> Pattern {
    match state.overall {
        OverallState::Happy => Pattern::Happy,
        OverallState::Stressed => Pattern::Alert,
        OverallState::Alert => Pattern::Alert,
        OverallState::Neutral => {
            if state.moisture == MoistureLevel::Optimal {
                Pattern::Relaxed
            } else {
                Pattern::Neutral
            }
        }
    }
}
