//! One-shot board bring-up.
//!
//! Configures the indicator output (driven low), the button input and
//! the pot's ADC channel from a [`PinMap`], using the raw ESP-IDF
//! adapters in [`crate::adapters::hardware`].  Called once from `main()`
//! before any demo starts.

#[cfg(target_os = "espidf")]
use log::info;

#[cfg(target_os = "espidf")]
use crate::adapters::hardware::{EspAnalogInput, EspInputPin, EspOutputPin};
#[cfg(target_os = "espidf")]
use crate::config::PinMap;
#[cfg(target_os = "espidf")]
use crate::error::PeripheralError;

/// Every peripheral a demo may need, already configured.
#[cfg(target_os = "espidf")]
pub struct Board {
    pub indicator: EspOutputPin,
    pub button: EspInputPin,
    pub pot: EspAnalogInput,
}

#[cfg(target_os = "espidf")]
impl Board {
    pub fn init(pins: &PinMap) -> Result<Self, PeripheralError> {
        let indicator = EspOutputPin::configure(pins.indicator)?;
        let button = EspInputPin::configure(pins.button_input, pins.button_pull)?;
        let pot = EspAnalogInput::configure(pins.sensor_input)?;
        info!(
            "hw_init: indicator=GPIO{} button=GPIO{} pot=GPIO{}",
            pins.indicator, pins.button_input, pins.sensor_input
        );
        Ok(Self { indicator, button, pot })
    }
}
