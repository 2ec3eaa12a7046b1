//! Mock hardware adapters for integration tests.
//!
//! Records every pin write so tests can assert on the full output
//! history without touching real GPIO registers.

use std::collections::VecDeque;
use std::convert::Infallible;
use std::sync::{Arc, Mutex, PoisonError};

use embedded_hal::digital::{ErrorType, InputPin, OutputPin};
use pinlab::app::events::DemoEvent;
use pinlab::app::ports::{AnalogInput, Edge, EdgeHandler, EdgeSource, EventSink};
use pinlab::error::{PeripheralError, SensorError};

// ── SharedPin ─────────────────────────────────────────────────

/// Output pin whose write log stays readable after the pin has been
/// moved into a task or an interrupt handler.
#[derive(Debug, Clone, Default)]
pub struct SharedPin {
    log: Arc<Mutex<Vec<bool>>>,
}

#[allow(dead_code)]
impl SharedPin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> Vec<bool> {
        self.log.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn level(&self) -> Option<bool> {
        self.writes().last().copied()
    }
}

impl ErrorType for SharedPin {
    type Error = Infallible;
}

impl OutputPin for SharedPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.log.lock().unwrap_or_else(PoisonError::into_inner).push(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.log.lock().unwrap_or_else(PoisonError::into_inner).push(true);
        Ok(())
    }
}

// ── MockAdc ───────────────────────────────────────────────────

/// Replays a fixed list of samples, then fails every read with `rc`.
pub struct MockAdc {
    samples: VecDeque<u16>,
    rc: i32,
}

impl MockAdc {
    pub fn then_fail(samples: &[u16], rc: i32) -> Self {
        Self {
            samples: samples.iter().copied().collect(),
            rc,
        }
    }
}

impl AnalogInput for MockAdc {
    fn read(&mut self) -> Result<u16, SensorError> {
        self.samples.pop_front().ok_or(SensorError::AdcReadFailed(self.rc))
    }
}

// ── MockButton ────────────────────────────────────────────────

/// Replays button levels, holding the last one once the script ends.
pub struct MockButton {
    levels: VecDeque<bool>,
    last: bool,
}

impl MockButton {
    pub fn new(levels: &[bool]) -> Self {
        Self {
            levels: levels.iter().copied().collect(),
            last: false,
        }
    }

    fn next_level(&mut self) -> bool {
        if let Some(level) = self.levels.pop_front() {
            self.last = level;
        }
        self.last
    }
}

impl ErrorType for MockButton {
    type Error = Infallible;
}

impl InputPin for MockButton {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.next_level())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.next_level())
    }
}

// ── MockEdgeSource ────────────────────────────────────────────

/// Stores registered handlers; [`fire`](Self::fire) plays the ISR.
pub struct MockEdgeSource {
    supported: Vec<Edge>,
    fail_rc: Option<i32>,
    handlers: Vec<(Edge, EdgeHandler)>,
}

#[allow(dead_code)]
impl MockEdgeSource {
    pub fn new() -> Self {
        Self::supporting(&[Edge::Rising, Edge::Falling, Edge::Any])
    }

    pub fn supporting(edges: &[Edge]) -> Self {
        Self {
            supported: edges.to_vec(),
            fail_rc: None,
            handlers: Vec::new(),
        }
    }

    /// Every registration fails with `rc`.
    pub fn failing(rc: i32) -> Self {
        Self {
            fail_rc: Some(rc),
            ..Self::new()
        }
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Simulate one physical transition (`Rising` or `Falling`).
    pub fn fire(&mut self, transition: Edge) {
        for (edge, handler) in &mut self.handlers {
            if *edge == Edge::Any || *edge == transition {
                handler();
            }
        }
    }
}

impl EdgeSource for MockEdgeSource {
    fn on_edge(&mut self, edge: Edge, handler: EdgeHandler) -> Result<(), PeripheralError> {
        if let Some(rc) = self.fail_rc {
            return Err(PeripheralError::InterruptRegistration(rc));
        }
        if !self.supported.contains(&edge) {
            return Err(PeripheralError::UnsupportedEdge(edge));
        }
        self.handlers.push((edge, handler));
        Ok(())
    }
}

// ── RecordingSink ─────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<DemoEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn outputs(&self) -> Vec<bool> {
        self.events
            .iter()
            .filter_map(|e| match e {
                DemoEvent::OutputApplied(on) => Some(*on),
                _ => None,
            })
            .collect()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &DemoEvent) {
        self.events.push(*event);
    }
}
