//! In-crate test doubles for the unit tests.

use core::convert::Infallible;

use embedded_hal::digital::{self, ErrorKind, ErrorType, InputPin, OutputPin};

use crate::app::events::DemoEvent;
use crate::app::ports::{AnalogInput, EventSink};
use crate::error::SensorError;

/// Output pin that remembers every level written to it.
#[derive(Debug, Default)]
pub struct RecordingPin {
    pub writes: Vec<bool>,
}

impl ErrorType for RecordingPin {
    type Error = Infallible;
}

impl OutputPin for RecordingPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.writes.push(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.writes.push(true);
        Ok(())
    }
}

#[derive(Debug)]
pub struct PinFault;

impl digital::Error for PinFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Pin whose every read and write fails.
#[derive(Debug)]
pub struct FailingPin;

impl ErrorType for FailingPin {
    type Error = PinFault;
}

impl OutputPin for FailingPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Err(PinFault)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Err(PinFault)
    }
}

impl InputPin for FailingPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Err(PinFault)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Err(PinFault)
    }
}

/// Input pin that replays a script, then holds its last level.
#[derive(Debug)]
pub struct ScriptedInput {
    levels: Vec<bool>,
    next: usize,
}

impl ScriptedInput {
    pub fn new(levels: &[bool]) -> Self {
        Self {
            levels: levels.to_vec(),
            next: 0,
        }
    }

    fn advance(&mut self) -> bool {
        let level = self
            .levels
            .get(self.next)
            .or(self.levels.last())
            .copied()
            .unwrap_or(false);
        self.next += 1;
        level
    }
}

impl ErrorType for ScriptedInput {
    type Error = Infallible;
}

impl InputPin for ScriptedInput {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.advance())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.advance())
    }
}

/// ADC that replays a script, then holds its last sample.
#[derive(Debug)]
pub struct ScriptedAdc {
    samples: Vec<u16>,
    next: usize,
    fail: Option<i32>,
}

impl ScriptedAdc {
    pub fn new(samples: &[u16]) -> Self {
        Self {
            samples: samples.to_vec(),
            next: 0,
            fail: None,
        }
    }

    /// Every read fails with `rc`.
    pub fn failing(rc: i32) -> Self {
        Self {
            samples: Vec::new(),
            next: 0,
            fail: Some(rc),
        }
    }
}

impl AnalogInput for ScriptedAdc {
    fn read(&mut self) -> Result<u16, SensorError> {
        if let Some(rc) = self.fail {
            return Err(SensorError::AdcReadFailed(rc));
        }
        let sample = self
            .samples
            .get(self.next)
            .or(self.samples.last())
            .copied()
            .unwrap_or(0);
        self.next += 1;
        Ok(sample)
    }
}

pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: &DemoEvent) {}
}

#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<DemoEvent>,
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &DemoEvent) {
        self.events.push(*event);
    }
}
