// src/hw_buzzer_pwm.rs
//
// Piezo buzzer on a hardware PWM channel (GPIO18 = Pwm0, GPIO19 = Pwm1).
// A tone is the PWM carrier at the note frequency with 50% duty; silence
// disables the channel entirely so the buzzer draws nothing between notes.

use plant_monitor_lib::player::{ToneError, ToneOutput};
use rppal::pwm::{Channel, Polarity, Pwm};

pub struct PwmBuzzer {
    pwm: Pwm,
}

impl PwmBuzzer {
    pub fn new(channel: u8) -> anyhow::Result<Self> {
        let channel = match channel {
            0 => Channel::Pwm0,
            _ => Channel::Pwm1,
        };
        // Start disabled at a placeholder frequency; tone() reprograms it
        let pwm = Pwm::with_frequency(channel, 440.0, 0.5, Polarity::Normal, false)?;
        Ok(Self { pwm })
    }
}

impl ToneOutput for PwmBuzzer {
    fn tone(&mut self, frequency_hz: u16) -> Result<(), ToneError> {
        self.pwm
            .set_frequency(frequency_hz as f64, 0.5)
            .map_err(|e| ToneError(e.to_string()))?;
        self.pwm.enable().map_err(|e| ToneError(e.to_string()))
    }

    fn silence(&mut self) -> Result<(), ToneError> {
        self.pwm.disable().map_err(|e| ToneError(e.to_string()))
    }
}
