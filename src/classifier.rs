//! # Condition Classification
//!
//! Pure threshold logic mapping a smoothed [`Reading`] to discrete condition
//! states. No side effects, no carried state: the whole classification is
//! recomputed from scratch every cycle.
//!
//! ## Boundary Semantics
//! All comparisons are strict `<` / `>`, so a reading exactly at a threshold
//! lands in the middle bucket: moisture 1500 is `Optimal` (not `Dry`) and
//! light 3000 is `Moderate` (not `Bright`).
//!
//! ## Overall State Priority
//! The overall state is evaluated in strict priority order, first match wins:
//! 1. optimal moisture with moderate/bright light -> `Happy`
//! 2. dry soil or dark conditions -> `Stressed`
//! 3. wet soil -> `Alert`
//! 4. anything else -> `Neutral`
//!
//! Rule 2 deliberately outranks everything after it: optimal moisture in the
//! dark is still `Stressed`. The catch-all branches are intentional
//! permissive defaults, not gaps.

use crate::config::Thresholds;
use crate::Reading;
use std::fmt;

/// Discrete soil moisture level
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoistureLevel {
    Dry,
    Optimal,
    Wet,
}

/// Discrete ambient light level
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightLevel {
    Dark,
    Moderate,
    Bright,
}

/// Overall plant wellbeing, derived from (moisture, light) only
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverallState {
    Happy,
    Stressed,
    Alert,
    Neutral,
}

impl fmt::Display for MoistureLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            MoistureLevel::Dry => "DRY",
            MoistureLevel::Optimal => "OPTIMAL",
            MoistureLevel::Wet => "WET",
        };
        write!(f, "{}", tag)
    }
}

impl fmt::Display for LightLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            LightLevel::Dark => "DARK",
            LightLevel::Moderate => "MODERATE",
            LightLevel::Bright => "BRIGHT",
        };
        write!(f, "{}", tag)
    }
}

impl fmt::Display for OverallState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            OverallState::Happy => "HAPPY",
            OverallState::Stressed => "STRESSED",
            OverallState::Alert => "ALERT",
            OverallState::Neutral => "NEUTRAL",
        };
        write!(f, "{}", tag)
    }
}

/// Full classification of one reading
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConditionState {
    pub moisture: MoistureLevel,
    pub light: LightLevel,
    pub overall: OverallState,
}

/// Classify a smoothed reading against the configured thresholds.
///
/// Pure and total over the full `u16` range: out-of-ADC-range inputs still
/// resolve into a defined bucket rather than erroring.
pub fn classify(reading: Reading, thresholds: &Thresholds) -> ConditionState {
    let moisture = if reading.moisture_raw < thresholds.moisture_dry {
        MoistureLevel::Dry
    } else if reading.moisture_raw > thresholds.moisture_wet {
        MoistureLevel::Wet
    } else {
        MoistureLevel::Optimal
    };

    let light = if reading.light_raw < thresholds.light_dark {
        LightLevel::Dark
    } else if reading.light_raw > thresholds.light_bright {
        LightLevel::Bright
    } else {
        LightLevel::Moderate
    };

    let overall = if moisture == MoistureLevel::Optimal
        && (light == LightLevel::Moderate || light == LightLevel::Bright)
    {
        OverallState::Happy
    } else if moisture == MoistureLevel::Dry || light == LightLevel::Dark {
        OverallState::Stressed
    } else if moisture == MoistureLevel::Wet {
        OverallState::Alert
    } else {
        OverallState::Neutral
    };

    ConditionState {
        moisture,
        light,
        overall,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn classify_raw(moisture_raw: u16, light_raw: u16) -> ConditionState {
        let thresholds = Config::default().thresholds;
        classify(
            Reading {
                moisture_raw,
                light_raw,
            },
            &thresholds,
        )
    }

    #[test]
    fn moisture_boundaries_are_inclusive_toward_optimal() {
        assert_eq!(classify_raw(1499, 2000).moisture, MoistureLevel::Dry);
        assert_eq!(classify_raw(1500, 2000).moisture, MoistureLevel::Optimal);
        assert_eq!(classify_raw(1501, 2000).moisture, MoistureLevel::Optimal);
        assert_eq!(classify_raw(3000, 2000).moisture, MoistureLevel::Optimal);
        assert_eq!(classify_raw(3001, 2000).moisture, MoistureLevel::Wet);
    }

    #[test]
    fn light_boundaries_are_inclusive_toward_moderate() {
        assert_eq!(classify_raw(2000, 999).light, LightLevel::Dark);
        assert_eq!(classify_raw(2000, 1000).light, LightLevel::Moderate);
        assert_eq!(classify_raw(2000, 1001).light, LightLevel::Moderate);
        assert_eq!(classify_raw(2000, 3000).light, LightLevel::Moderate);
        assert_eq!(classify_raw(2000, 3001).light, LightLevel::Bright);
    }

    #[test]
    fn dry_and_bright_is_stressed_not_happy() {
        // Rule 2 (dry or dark) must fire even with bright light
        let state = classify_raw(500, 3500);
        assert_eq!(state.moisture, MoistureLevel::Dry);
        assert_eq!(state.light, LightLevel::Bright);
        assert_eq!(state.overall, OverallState::Stressed);
    }

    #[test]
    fn optimal_but_dark_is_stressed() {
        // Dark outranks the happy rule: rule 1 requires moderate or bright light
        let state = classify_raw(1800, 500);
        assert_eq!(state.moisture, MoistureLevel::Optimal);
        assert_eq!(state.light, LightLevel::Dark);
        assert_eq!(state.overall, OverallState::Stressed);
    }

    #[test]
    fn wet_with_moderate_light_is_alert() {
        let state = classify_raw(3500, 2000);
        assert_eq!(state.moisture, MoistureLevel::Wet);
        assert_eq!(state.overall, OverallState::Alert);
    }

    #[test]
    fn wet_and_dark_is_stressed_before_alert() {
        // Priority ordering: rule 2 (dark) wins over rule 3 (wet)
        let state = classify_raw(3500, 500);
        assert_eq!(state.overall, OverallState::Stressed);
    }

    #[test]
    fn wet_and_bright_is_alert() {
        // Falls through rules 1 and 2, rule 3 catches the wet soil
        let state = classify_raw(3500, 3500);
        assert_eq!(state.overall, OverallState::Alert);
    }

    #[test]
    fn optimal_and_moderate_is_happy() {
        let state = classify_raw(2000, 2000);
        assert_eq!(state.overall, OverallState::Happy);
    }

    #[test]
    fn classify_is_deterministic() {
        // Pure function: identical inputs, identical outputs
        for (m, l) in [(0, 0), (1500, 1000), (4095, 4095), (2222, 3333)] {
            assert_eq!(classify_raw(m, l), classify_raw(m, l));
        }
    }

    #[test]
    fn out_of_adc_range_inputs_still_classify() {
        // Undefined-but-not-crashing: values beyond 4095 resolve into a bucket
        let state = classify_raw(u16::MAX, u16::MAX);
        assert_eq!(state.moisture, MoistureLevel::Wet);
        assert_eq!(state.light, LightLevel::Bright);
        assert_eq!(state.overall, OverallState::Alert);
    }
}
