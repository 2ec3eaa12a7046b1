//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing demo events to the ESP-IDF logger
//! (UART / USB-CDC on the board, stderr on the host).  Samples arrive
//! every period, so they go out at `debug`; everything else at `info`,
//! except degradation which is a `warn`.

use log::{debug, info, warn};

use crate::app::events::DemoEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`DemoEvent`] to the serial console.
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &DemoEvent) {
        match event {
            DemoEvent::Started(mode) => info!("START | mode={:?}", mode),
            DemoEvent::Sampled { sample, decision } => {
                debug!(
                    "SAMPLE | raw=0x{:04x} | {}",
                    sample,
                    if *decision { "ON" } else { "OFF" }
                );
            }
            DemoEvent::OutputApplied(on) => info!("OUT | {}", if *on { "high" } else { "low" }),
            DemoEvent::BlinkPeriodChanged { period_ms } => info!("BLINK | period={}ms", period_ms),
            DemoEvent::Degraded(err) => warn!("DEGRADED | {}", err),
        }
    }
}
