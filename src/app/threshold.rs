//! Sample → decision rule.
//!
//! The rule is a bare comparison against the midpoint of the sample
//! range.  Readings that hover around the threshold make the output
//! flap; [`ThresholdRule`] can add a hysteresis band, but only when the
//! configuration asks for one.

/// Midpoint of the normalized sample range.
pub const THRESHOLD: u16 = 0x8000;

/// Drive the output high for samples at or above [`THRESHOLD`].
pub const fn decide(sample: u16) -> bool {
    sample >= THRESHOLD
}

/// Scale a raw `resolution_bits`-wide ADC reading into the top bits of a
/// `u16`, so every board reports samples on the same 0..=65535 scale.
///
/// Bits above the resolution are discarded.
pub const fn normalize(raw: u16, resolution_bits: u8) -> u16 {
    if resolution_bits == 0 || resolution_bits >= 16 {
        return raw;
    }
    let mask = (1u16 << resolution_bits) - 1;
    (raw & mask) << (16 - resolution_bits)
}

/// Threshold comparison with an optional hysteresis band.
///
/// With `band == 0` every call is exactly [`decide`] against `threshold`.
/// With a band, turning on still needs `sample >= threshold`, but once on
/// the output only drops when the sample falls below `threshold - band`.
#[derive(Debug, Clone, Copy)]
pub struct ThresholdRule {
    threshold: u16,
    band: u16,
    last: bool,
}

impl Default for ThresholdRule {
    fn default() -> Self {
        Self::new(THRESHOLD, 0)
    }
}

impl ThresholdRule {
    pub const fn new(threshold: u16, band: u16) -> Self {
        Self {
            threshold,
            band,
            last: false,
        }
    }

    pub fn threshold(&self) -> u16 {
        self.threshold
    }

    pub fn band(&self) -> u16 {
        self.band
    }

    /// Classify one sample.
    pub fn evaluate(&mut self, sample: u16) -> bool {
        let on = if self.last && self.band > 0 {
            sample >= self.threshold.saturating_sub(self.band)
        } else {
            sample >= self.threshold
        };
        self.last = on;
        on
    }
}
