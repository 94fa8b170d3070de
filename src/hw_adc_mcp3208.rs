// src/hw_adc_mcp3208.rs
//
// MCP3208 12-bit SPI ADC adapter. Both analog sensors (soil moisture probe,
// LDR divider) hang off one MCP3208 on SPI0; the library only ever sees the
// SensorProvider trait.

use plant_monitor_lib::sampler::SensorProvider;
use rppal::spi::{Bus, Mode, SlaveSelect, Spi};

pub struct Mcp3208Sensors {
    spi: Spi,
    moisture_channel: u8,
    light_channel: u8,
    // Last good conversions, reused when a transfer fails. The sampling
    // contract is infallible; a stuck value beats a fabricated zero.
    last_moisture: u16,
    last_light: u16,
}

impl Mcp3208Sensors {
    pub fn new(moisture_channel: u8, light_channel: u8) -> anyhow::Result<Self> {
        // MCP3208 is good to 2 MHz at 5 V; stay conservative at 1 MHz
        let spi = Spi::new(Bus::Spi0, SlaveSelect::Ss0, 1_000_000, Mode::Mode0)?;
        Ok(Self {
            spi,
            moisture_channel,
            light_channel,
            last_moisture: 0,
            last_light: 0,
        })
    }

    /// Single-ended conversion on the given channel (0-7).
    fn convert(&mut self, channel: u8) -> rppal::spi::Result<u16> {
        // Start bit + single-ended mode + 3-bit channel, per MCP3208 datasheet
        let tx = [
            0x06 | (channel >> 2),
            (channel & 0x03) << 6,
            0x00,
        ];
        let mut rx = [0u8; 3];
        self.spi.transfer(&mut rx, &tx)?;
        Ok((((rx[1] & 0x0F) as u16) << 8) | rx[2] as u16)
    }

    fn read_channel(&mut self, channel: u8, last: u16) -> u16 {
        match self.convert(channel) {
            Ok(raw) => raw,
            Err(e) => {
                eprintln!("ADC channel {} read failed: {} (reusing last value)", channel, e);
                last
            }
        }
    }
}

impl SensorProvider for Mcp3208Sensors {
    fn read_moisture(&mut self) -> u16 {
        let raw = self.read_channel(self.moisture_channel, self.last_moisture);
        self.last_moisture = raw;
        raw
    }

    fn read_light(&mut self) -> u16 {
        let raw = self.read_channel(self.light_channel, self.last_light);
        self.last_light = raw;
        raw
    }
}
