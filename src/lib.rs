//! Pinlab firmware library.
//!
//! Exposes the demo logic for integration testing.  All ESP-IDF-specific
//! code is guarded by `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod drivers;
pub mod error;
pub mod pins;

#[cfg(target_os = "espidf")]
mod esp_link_shims;

#[cfg(test)]
mod test_support;
