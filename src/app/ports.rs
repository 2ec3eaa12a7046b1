//! Port traits: the boundary between demo logic and the board.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ Sampler / Relay / Toggle (domain)
//! ```
//!
//! Digital pins use the `embedded-hal` 1.0 [`InputPin`] / [`OutputPin`]
//! traits directly.  `embedded-hal` has no analog or interrupt traits, so
//! those capabilities are defined here, alongside the clock and the
//! event sink.  The ESP-IDF adapters implement them on the board; tests
//! implement them with fakes.
//!
//! [`InputPin`]: embedded_hal::digital::InputPin
//! [`OutputPin`]: embedded_hal::digital::OutputPin

use core::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{PeripheralError, SensorError};

// ───────────────────────────────────────────────────────────────
// Analog input (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// A single ADC channel producing normalized 16-bit samples.
pub trait AnalogInput {
    /// Take one conversion, scaled to the full `0..=u16::MAX` range.
    fn read(&mut self) -> Result<u16, SensorError>;
}

// ───────────────────────────────────────────────────────────────
// Edge interrupts (driven adapter: hardware → domain, ISR context)
// ───────────────────────────────────────────────────────────────

/// Signal transition that raises a pin interrupt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    Rising,
    Falling,
    /// Both transitions.
    Any,
}

/// Callback run from interrupt context.  Must not block, allocate or log.
pub type EdgeHandler = Box<dyn FnMut() + Send + 'static>;

/// Registers interrupt callbacks on an input pin.
pub trait EdgeSource {
    /// Attach `handler` to `edge`.
    ///
    /// Fails when the platform cannot honor the edge/mode combination or
    /// the interrupt service cannot be installed; the handler is dropped
    /// and never runs in that case.
    fn on_edge(&mut self, edge: Edge, handler: EdgeHandler) -> Result<(), PeripheralError>;
}

// ───────────────────────────────────────────────────────────────
// Clock (periodic scheduling)
// ───────────────────────────────────────────────────────────────

/// Suspends the calling task for one loop period.
///
/// Real adapters arm a timer; tests advance a virtual clock instead so
/// scenarios run deterministically without real time passing.
#[allow(async_fn_in_trait)]
pub trait Clock {
    async fn sleep(&mut self, period: Duration);
}

// ───────────────────────────────────────────────────────────────
// Event sink (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The demos emit structured [`DemoEvent`](super::events::DemoEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::DemoEvent);
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, event: &super::events::DemoEvent) {
        (**self).emit(event);
    }
}
