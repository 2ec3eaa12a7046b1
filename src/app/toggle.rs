//! Edge-triggered toggle: flips the indicator on every button edge.
//!
//! ## Interrupt model
//!
//! The handler runs in ISR context, preempting the idle main task.  The
//! only state shared with the rest of the program is a one-byte atomic
//! [`ToggleRegister`]: the ISR is its single writer, anything else may
//! read it.  There is no debounce; a bouncing contact toggles once per
//! edge the hardware reports.
//!
//! | Edge # | Register | Indicator |
//! |--------|----------|-----------|
//! | start  | Low      | low       |
//! | 1      | High     | high      |
//! | 2      | Low      | low       |
//! | 3      | High     | high      |

use core::sync::atomic::{AtomicU8, Ordering};

use embedded_hal::digital::OutputPin;

use super::ports::{Edge, EdgeSource};
use super::relay::write_level;
use crate::error::{ActuatorError, PeripheralError};

/// Register backing the board's button toggle demo.
pub static BUTTON_TOGGLE: ToggleRegister = ToggleRegister::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ToggleState {
    Low = 0,
    High = 1,
}

impl ToggleState {
    pub const fn toggled(self) -> Self {
        match self {
            Self::Low => Self::High,
            Self::High => Self::Low,
        }
    }

    pub const fn is_high(self) -> bool {
        matches!(self, Self::High)
    }
}

/// Lock-free single-byte register shared with interrupt context.
pub struct ToggleRegister(AtomicU8);

impl ToggleRegister {
    pub const fn new() -> Self {
        Self(AtomicU8::new(ToggleState::Low as u8))
    }

    pub fn get(&self) -> ToggleState {
        if self.0.load(Ordering::Acquire) == 0 {
            ToggleState::Low
        } else {
            ToggleState::High
        }
    }

    pub fn set(&self, state: ToggleState) {
        self.0.store(state as u8, Ordering::Release);
    }
}

impl Default for ToggleRegister {
    fn default() -> Self {
        Self::new()
    }
}

/// Owns the indicator pin inside the interrupt handler.
pub struct EdgeToggle<P> {
    pin: P,
    register: &'static ToggleRegister,
}

impl<P: OutputPin> EdgeToggle<P> {
    /// Reset `register` to `Low`.  The pin must already be configured low.
    pub fn new(pin: P, register: &'static ToggleRegister) -> Self {
        register.set(ToggleState::Low);
        Self { pin, register }
    }

    /// Handle one edge: flip the state and drive the pin to match.
    ///
    /// The register only advances once the pin write succeeds, so it
    /// always mirrors the indicator.
    pub fn on_edge(&mut self) -> Result<ToggleState, ActuatorError> {
        let next = self.register.get().toggled();
        write_level(&mut self.pin, next.is_high())?;
        self.register.set(next);
        Ok(next)
    }

    pub fn state(&self) -> ToggleState {
        self.register.get()
    }
}

/// Move `toggle` into an interrupt handler on `source`.
///
/// On failure the handler (and the pin it owns) is dropped without ever
/// running; the indicator keeps its configured level.
pub fn arm<E, P>(source: &mut E, edge: Edge, mut toggle: EdgeToggle<P>) -> Result<(), PeripheralError>
where
    E: EdgeSource,
    P: OutputPin + Send + 'static,
{
    source.on_edge(
        edge,
        Box::new(move || {
            // No way to report from ISR context; the register stays put.
            let _ = toggle.on_edge();
        }),
    )
}
