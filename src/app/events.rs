//! Outbound demo events.
//!
//! Emitted through the [`EventSink`](super::ports::EventSink) port.  The
//! board build routes them to the serial log; tests record them.

use crate::config::DemoMode;
use crate::error::PeripheralError;

/// Structured events emitted by the demo loops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoEvent {
    /// A demo has been wired up and is about to run.
    Started(DemoMode),

    /// The sampler converted a reading into a decision.
    Sampled { sample: u16, decision: bool },

    /// An output level was written to the indicator.
    OutputApplied(bool),

    /// The pot moved the blink period across the threshold.
    BlinkPeriodChanged { period_ms: u32 },

    /// A peripheral could not be configured; the demo keeps running
    /// without it.
    Degraded(PeripheralError),
}
