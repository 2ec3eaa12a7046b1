//! Polled button: the indicator mirrors the button level.
//!
//! Sleeps first, then samples, so the first write lands one poll period
//! after start-up.  No debounce.

use core::convert::Infallible;
use core::time::Duration;

use embedded_hal::digital::{InputPin, OutputPin};

use super::events::DemoEvent;
use super::ports::{Clock, EventSink};
use super::relay::write_level;
use crate::error::{Result, SensorError};

pub struct ButtonFollower<I, P, C, S> {
    button: I,
    led: P,
    clock: C,
    sink: S,
    period: Duration,
    last: Option<bool>,
}

impl<I: InputPin, P: OutputPin, C: Clock, S: EventSink> ButtonFollower<I, P, C, S> {
    pub fn new(button: I, led: P, clock: C, sink: S, period: Duration) -> Self {
        Self {
            button,
            led,
            clock,
            sink,
            period,
            last: None,
        }
    }

    /// Sleep one period, then copy the button level to the indicator.
    pub async fn step(&mut self) -> Result<bool> {
        self.clock.sleep(self.period).await;
        let level = self.button.is_high().map_err(|_| SensorError::GpioReadFailed)?;
        write_level(&mut self.led, level)?;
        // Written every poll; only changes are reported.
        if self.last != Some(level) {
            self.sink.emit(&DemoEvent::OutputApplied(level));
            self.last = Some(level);
        }
        Ok(level)
    }

    pub async fn run(&mut self) -> Result<Infallible> {
        loop {
            self.step().await?;
        }
    }

    pub fn led(&self) -> &P {
        &self.led
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}
