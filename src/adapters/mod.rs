//! Adapters: concrete implementations of the port traits.
//!
//! | Adapter    | Implements               | Connects to              |
//! |------------|--------------------------|--------------------------|
//! | `hardware` | AnalogInput, EdgeSource  | ESP32 ADC1, GPIO ISR     |
//! |            | OutputPin, InputPin      | ESP32 GPIO               |
//! | `log_sink` | EventSink                | Serial log output        |
//! | `time`     | Clock                    | async-io-mini reactor    |
//! |            |                          | virtual clock (host)     |
//! | `isr_slot` | (helper)                 | ISR handler ownership    |

#[cfg(target_os = "espidf")]
pub mod hardware;
pub mod isr_slot;
pub mod log_sink;
pub mod time;
