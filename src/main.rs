//! # Plant Music Monitor Application Entry Point
//!
//! This binary wires the library pipeline to its collaborators: real
//! Raspberry Pi hardware (MCP3208 ADC + PWM buzzer, `hardware` feature) in
//! production, or simulated sensors with a console buzzer in development
//! mode (`--stdout`).

// Test modules
#[cfg(test)]
mod tests;

#[cfg(all(target_os = "linux", feature = "hardware"))]
mod hw_adc_mcp3208;
#[cfg(all(target_os = "linux", feature = "hardware"))]
mod hw_buzzer_pwm;

use chrono::Local;
use plant_monitor_lib::config::Config;
use plant_monitor_lib::monitor::PlantMonitor;
use plant_monitor_lib::sim::{ConsoleTone, SimulatedSensors, VirtualClock};
use std::env;
use std::io;

/// Cycles to run in development mode before exiting
const DEV_MODE_CYCLES: usize = 12;

/// Run the monitor against simulated sensors on a virtual clock.
///
/// The virtual clock means a full melody interval passes in microseconds of
/// real time, so a dozen cycles demonstrate the whole pipeline - warm-up,
/// classification drift as the simulated soil dries, and gated playback -
/// without sitting through real delays.
fn run_simulated(config: Config) -> anyhow::Result<()> {
    let mut monitor = PlantMonitor::new(
        config,
        SimulatedSensors::new(),
        ConsoleTone::new(),
        VirtualClock::new(),
    );

    let mut stdout = io::stdout();
    monitor.start(&mut stdout)?;
    let outcomes = monitor.run_cycles(DEV_MODE_CYCLES, &mut stdout)?;

    let played = outcomes.iter().filter(|o| o.played).count();
    eprintln!(
        "Development run complete: {} cycles, {} melodies played",
        outcomes.len(),
        played
    );
    Ok(())
}

/// Initialize the Pi hardware and run the monitor forever.
#[cfg(all(target_os = "linux", feature = "hardware"))]
fn run_hardware(config: Config) -> anyhow::Result<()> {
    use anyhow::Context;
    use plant_monitor_lib::player::SystemClock;

    let hw = &config.hardware;
    eprintln!("Hardware configuration:");
    eprintln!("   Moisture sensor: MCP3208 channel {}", hw.moisture_channel);
    eprintln!("   Light sensor:    MCP3208 channel {}", hw.light_channel);
    eprintln!("   Buzzer:          PWM channel {}", hw.buzzer_pwm_channel);

    let sensors = hw_adc_mcp3208::Mcp3208Sensors::new(hw.moisture_channel, hw.light_channel)
        .context("open MCP3208 on SPI0")?;
    let buzzer =
        hw_buzzer_pwm::PwmBuzzer::new(hw.buzzer_pwm_channel).context("open PWM buzzer channel")?;

    let mut monitor = PlantMonitor::new(config, sensors, buzzer, SystemClock::new());

    let mut stdout = io::stdout();
    monitor.start(&mut stdout)?;
    monitor.run(&mut stdout)?;
    Ok(())
}

/// Main application entry point.
fn main() -> anyhow::Result<()> {
    // Development mode: simulated sensors and console buzzer, no hardware
    let development_mode = env::args().any(|arg| arg == "--stdout");

    println!("Plant monitor starting at {}", Local::now().format("%-m/%-d %-I:%M%p"));

    if development_mode {
        return run_simulated(Config::load());
    }

    #[cfg(all(target_os = "linux", feature = "hardware"))]
    {
        run_hardware(Config::load())?;
    }

    #[cfg(all(target_os = "linux", not(feature = "hardware")))]
    {
        eprintln!("Buzzer hardware support not enabled. Rebuild with --features hardware.");
        eprintln!("Running simulated development cycles instead:");
        run_simulated(Config::load())?;
    }

    #[cfg(not(target_os = "linux"))]
    {
        eprintln!("Hardware mode is only available on Linux. Use --stdout for development mode.");
        #[allow(unreachable_code)]
        return Err(anyhow::anyhow!(
            "Hardware mode not supported on this platform"
        ));
    }

    #[allow(unreachable_code)]
    Ok(())
}
