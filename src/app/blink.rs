//! Blinking indicator, optionally rate-controlled by the pot.
//!
//! The [`Blinker`] writes its current phase (starting low), flips it and
//! sleeps for whatever the shared [`PeriodRegister`] holds.  The
//! [`RateSampler`] is the register's only writer: every sample period it
//! picks the fast period below the threshold and the slow one at or
//! above it.  A new period takes effect on the blinker's next cycle.

use core::convert::Infallible;
use core::sync::atomic::{AtomicU32, Ordering};
use core::time::Duration;

use embedded_hal::digital::OutputPin;
use log::info;

use super::events::DemoEvent;
use super::ports::{AnalogInput, Clock, EventSink};
use super::relay::write_level;
use super::sampler::Sampler;
use crate::error::Result;

/// Blink half-period in milliseconds, shared between tasks.
pub struct PeriodRegister(AtomicU32);

impl PeriodRegister {
    pub const fn new(period_ms: u32) -> Self {
        Self(AtomicU32::new(period_ms))
    }

    pub fn get(&self) -> u32 {
        self.0.load(Ordering::Acquire)
    }

    pub fn set(&self, period_ms: u32) {
        self.0.store(period_ms, Ordering::Release);
    }
}

pub struct Blinker<P, C> {
    pin: P,
    clock: C,
    high: bool,
}

impl<P: OutputPin, C: Clock> Blinker<P, C> {
    pub fn new(pin: P, clock: C) -> Self {
        Self {
            pin,
            clock,
            high: false,
        }
    }

    /// Write one phase and sleep.  Returns the level written.
    pub async fn blink_once(&mut self, period: &PeriodRegister) -> Result<bool> {
        let level = self.high;
        write_level(&mut self.pin, level)?;
        self.high = !level;
        self.clock.sleep(Duration::from_millis(u64::from(period.get()))).await;
        Ok(level)
    }

    pub async fn run(&mut self, period: &PeriodRegister) -> Result<Infallible> {
        loop {
            self.blink_once(period).await?;
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn pin(&self) -> &P {
        &self.pin
    }
}

/// Samples the pot and retunes the blink period.
pub struct RateSampler<A, C, S> {
    sampler: Sampler<A, C, S>,
    slow_ms: u32,
    fast_ms: u32,
    current: Option<u32>,
}

impl<A: AnalogInput, C: Clock, S: EventSink> RateSampler<A, C, S> {
    /// `slow_ms` applies at/above the threshold, `fast_ms` below it.
    pub fn new(sampler: Sampler<A, C, S>, slow_ms: u32, fast_ms: u32) -> Self {
        Self {
            sampler,
            slow_ms,
            fast_ms,
            current: None,
        }
    }

    /// Sample once and publish the matching period.  No sleep.
    pub fn step(&mut self, period: &PeriodRegister) -> Result<u32> {
        let on = self.sampler.sample()?;
        let ms = if on { self.slow_ms } else { self.fast_ms };
        period.set(ms);
        if self.current != Some(ms) {
            info!("blink period -> {}ms", ms);
            self.sampler.emit(&DemoEvent::BlinkPeriodChanged { period_ms: ms });
            self.current = Some(ms);
        }
        Ok(ms)
    }

    pub async fn run(&mut self, period: &PeriodRegister) -> Result<Infallible> {
        loop {
            self.step(period)?;
            self.sampler.sleep().await;
        }
    }
}
