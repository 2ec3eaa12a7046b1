//! Actuator relay: the only writer of the indicator pin in the pot demos.
//!
//! Every received decision is applied immediately, even when it matches
//! the current level.  Writes are idempotent, so repeats are harmless;
//! they are not elided.

use core::convert::Infallible;

use embedded_hal::digital::OutputPin;

use super::events::DemoEvent;
use super::ports::EventSink;
use super::queue::CommandQueue;
use crate::error::{ActuatorError, Result};

pub struct ActuatorRelay<P, S> {
    pin: P,
    sink: S,
    state: bool,
    applied: u32,
}

impl<P: OutputPin, S: EventSink> ActuatorRelay<P, S> {
    /// Take ownership of an output pin already configured low.
    pub fn new(pin: P, sink: S) -> Self {
        Self {
            pin,
            sink,
            state: false,
            applied: 0,
        }
    }

    /// Drive the pin to `on`.
    pub fn apply(&mut self, on: bool) -> Result<()> {
        write_level(&mut self.pin, on)?;
        self.state = on;
        self.applied = self.applied.wrapping_add(1);
        self.sink.emit(&DemoEvent::OutputApplied(on));
        Ok(())
    }

    /// Serve the queue forever.  Only returns on a pin write failure.
    pub async fn run(&mut self, queue: &CommandQueue) -> Result<Infallible> {
        loop {
            let on = queue.receive().await;
            self.apply(on)?;
        }
    }

    /// Serve exactly `count` decisions, then return.
    pub async fn run_for(&mut self, queue: &CommandQueue, count: usize) -> Result<()> {
        for _ in 0..count {
            let on = queue.receive().await;
            self.apply(on)?;
        }
        Ok(())
    }

    /// Last level written to the pin.
    pub fn state(&self) -> bool {
        self.state
    }

    /// Number of decisions applied since construction.
    pub fn applied(&self) -> u32 {
        self.applied
    }

    pub fn into_pin(self) -> P {
        self.pin
    }
}

/// Shared by every demo that owns an output pin.
pub(crate) fn write_level(pin: &mut impl OutputPin, on: bool) -> core::result::Result<(), ActuatorError> {
    let res = if on { pin.set_high() } else { pin.set_low() };
    res.map_err(|_| ActuatorError::GpioWriteFailed)
}
