//! Default GPIO assignments for the demo board (ESP32-S3 DevKitC).
//!
//! Single source of truth for [`PinMap::default`](crate::config::PinMap);
//! drivers never hard-code pin numbers, they receive them through the
//! [`PinMap`](crate::config::PinMap) handed over at startup.
//!
//! ```text
//!                  100 kΩ pot
//!  GND    ────────^v^v^v^────┐
//!                     │      │
//!  3V3    ───────────────────┘
//!                     │
//!  GPIO5  ────────────┘          (ADC1 CH4, wiper)
//!
//!  GPIO15 ──── button (external drive, HIGH while pressed)
//!  GPIO2  ──── indicator LED ──── 330 Ω ──── GND
//! ```

// ---------------------------------------------------------------------------
// Outputs
// ---------------------------------------------------------------------------

/// Indicator LED, active HIGH.
pub const INDICATOR_GPIO: i32 = 2;

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// Potentiometer wiper, ADC1 channel 4.
pub const SENSOR_ADC_GPIO: i32 = 5;

/// Push-button input.  Edge interrupts fire on the falling edge (release).
pub const BUTTON_GPIO: i32 = 15;

/// Highest GPIO number on the ESP32-S3.
pub const MAX_GPIO: i32 = 48;

// ---------------------------------------------------------------------------
// ADC configuration
// ---------------------------------------------------------------------------

/// Oneshot ADC resolution.  Samples are normalized to 16 bits.
pub const ADC_RESOLUTION_BITS: u8 = 12;
