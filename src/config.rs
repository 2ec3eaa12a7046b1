//! System configuration parameters
//!
//! Everything a demo needs to know about the board and its timing.  The
//! configuration is compiled in: there are no flags, environment
//! variables or files.  Change [`SystemConfig::default`] (or the pin
//! constants in `pins.rs`) and reflash.

use serde::{Deserialize, Serialize};

use crate::app::ports::Edge;
use crate::error::ConfigError;
use crate::pins;

/// Which demo the firmware runs after boot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DemoMode {
    /// Toggle the indicator at a fixed rate.
    Blinky,
    /// Sample the pot and write the indicator from the same loop.
    PotDirect,
    /// Sample the pot and hand decisions to the relay task over the queue.
    PotRelay,
    /// Blink the indicator; the pot selects a fast or slow rate.
    PotBlink,
    /// Poll the button and mirror its level on the indicator.
    ButtonPoll,
    /// Toggle the indicator from the button edge interrupt.
    ButtonInterrupt,
}

/// Hand-off semantics of the sampler → relay command queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueueMode {
    /// A send waits while the single slot is occupied.
    Blocking,
    /// A send replaces any decision the relay has not consumed yet.
    Overwrite,
}

/// Pull resistor applied to the button input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonPull {
    None,
    Up,
    Down,
}

/// Logical pin roles mapped to platform GPIO numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinMap {
    /// Onboard / discrete indicator LED (output).
    pub indicator: i32,
    /// Potentiometer wiper (analog input).
    pub sensor_input: i32,
    /// Push-button (digital input, interrupt capable).
    pub button_input: i32,
    pub button_pull: ButtonPull,
}

impl Default for PinMap {
    fn default() -> Self {
        Self {
            indicator: pins::INDICATOR_GPIO,
            sensor_input: pins::SENSOR_ADC_GPIO,
            button_input: pins::BUTTON_GPIO,
            button_pull: ButtonPull::None,
        }
    }
}

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    pub mode: DemoMode,
    pub pins: PinMap,

    // --- Pot sampling ---
    /// Sampler period (milliseconds)
    pub sample_period_ms: u32,
    /// Decision threshold; samples at or above it drive the output high
    pub threshold: u16,
    /// Opt-in hysteresis band below the threshold (0 = none)
    pub hysteresis: u16,
    pub queue: QueueMode,

    // --- Blink ---
    /// Blinky period, and the pot-blink period at/above the threshold (ms)
    pub blink_period_ms: u32,
    /// Pot-blink period below the threshold (ms)
    pub fast_blink_period_ms: u32,

    // --- Button ---
    /// Button poll period (milliseconds)
    pub button_poll_ms: u32,
    /// Edge that toggles the indicator in the interrupt demo
    pub button_edge: Edge,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            mode: DemoMode::PotRelay,
            pins: PinMap::default(),

            sample_period_ms: 100, // 10 Hz
            threshold: 0x8000,     // midpoint of the u16 range
            hysteresis: 0,
            queue: QueueMode::Blocking,

            blink_period_ms: 500,
            fast_blink_period_ms: 250,

            button_poll_ms: 100,
            button_edge: Edge::Falling,
        }
    }
}

impl SystemConfig {
    /// Range-check every field.  Invalid values are rejected, never clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.pins;
        for gpio in [p.indicator, p.sensor_input, p.button_input] {
            if !(0..=pins::MAX_GPIO).contains(&gpio) {
                return Err(ConfigError::ValidationFailed("GPIO number out of range"));
            }
        }
        if p.indicator == p.sensor_input
            || p.indicator == p.button_input
            || p.sensor_input == p.button_input
        {
            return Err(ConfigError::ValidationFailed("pin roles must use distinct GPIOs"));
        }
        if self.sample_period_ms == 0 || self.button_poll_ms == 0 {
            return Err(ConfigError::ValidationFailed("poll periods must be non-zero"));
        }
        if self.blink_period_ms == 0 || self.fast_blink_period_ms == 0 {
            return Err(ConfigError::ValidationFailed("blink periods must be non-zero"));
        }
        if self.hysteresis > self.threshold {
            return Err(ConfigError::ValidationFailed("hysteresis band exceeds threshold"));
        }
        Ok(())
    }
}
