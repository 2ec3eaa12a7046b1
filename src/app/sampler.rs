//! Sampler loop: reads the pot on a fixed period and forwards decisions.
//!
//! Each tick: read → classify → send, then sleep one period.  The task
//! suspends only at the send (while the relay still holds the previous
//! decision) and at the sleep.  A failed read ends the loop; there is no
//! retry.

use core::convert::Infallible;
use core::time::Duration;

use super::events::DemoEvent;
use super::ports::{AnalogInput, Clock, EventSink};
use super::queue::CommandQueue;
use super::threshold::ThresholdRule;
use crate::error::Result;

pub struct Sampler<A, C, S> {
    adc: A,
    clock: C,
    sink: S,
    rule: ThresholdRule,
    period: Duration,
}

impl<A: AnalogInput, C: Clock, S: EventSink> Sampler<A, C, S> {
    pub fn new(adc: A, clock: C, sink: S, rule: ThresholdRule, period: Duration) -> Self {
        Self {
            adc,
            clock,
            sink,
            rule,
            period,
        }
    }

    /// Read and classify one sample without sending it anywhere.
    pub fn sample(&mut self) -> Result<bool> {
        let sample = self.adc.read()?;
        let decision = self.rule.evaluate(sample);
        self.sink.emit(&DemoEvent::Sampled { sample, decision });
        Ok(decision)
    }

    /// One tick without the trailing sleep.
    pub async fn step(&mut self, queue: &CommandQueue) -> Result<bool> {
        let decision = self.sample()?;
        queue.send(decision).await;
        Ok(decision)
    }

    /// Sample forever.  Only returns when the ADC fails.
    pub async fn run(&mut self, queue: &CommandQueue) -> Result<Infallible> {
        loop {
            self.step(queue).await?;
            self.clock.sleep(self.period).await;
        }
    }

    /// Run exactly `ticks` iterations, sleeps included.
    pub async fn run_ticks(&mut self, queue: &CommandQueue, ticks: usize) -> Result<()> {
        for _ in 0..ticks {
            self.step(queue).await?;
            self.clock.sleep(self.period).await;
        }
        Ok(())
    }

    /// Sleep one sample period.
    pub async fn sleep(&mut self) {
        self.clock.sleep(self.period).await;
    }

    /// Forward an event to this sampler's sink.
    pub fn emit(&mut self, event: &DemoEvent) {
        self.sink.emit(event);
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}
