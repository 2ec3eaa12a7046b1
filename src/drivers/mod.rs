//! Board initialisation.

pub mod hw_init;
