//! Single-slot command queue between the sampler and the relay.
//!
//! ```text
//! ┌──────────┐  bool (capacity 1)  ┌──────────┐
//! │ Sampler  │────────────────────▶│  Relay   │
//! └──────────┘                     └──────────┘
//! ```
//!
//! `Blocking` is an `embassy-sync` channel of depth 1: a second send
//! waits until the relay has taken the first.  `Overwrite` is an
//! `embassy-sync` signal: a second send replaces the first, and the relay
//! only ever sees the most recent decision.  Either way there is no
//! history; the controller is level-driven.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use crate::config::QueueMode;

pub struct CommandQueue {
    mode: QueueMode,
    slot: Channel<CriticalSectionRawMutex, bool, 1>,
    latest: Signal<CriticalSectionRawMutex, bool>,
}

impl CommandQueue {
    pub const fn new(mode: QueueMode) -> Self {
        Self {
            mode,
            slot: Channel::new(),
            latest: Signal::new(),
        }
    }

    pub fn mode(&self) -> QueueMode {
        self.mode
    }

    /// Hand a decision to the relay, waiting for the slot in `Blocking` mode.
    pub async fn send(&self, decision: bool) {
        match self.mode {
            QueueMode::Blocking => self.slot.send(decision).await,
            QueueMode::Overwrite => self.latest.signal(decision),
        }
    }

    /// Non-waiting send.  Returns `false` if a `Blocking` slot is occupied
    /// (the decision is dropped); `Overwrite` always accepts.
    pub fn try_send(&self, decision: bool) -> bool {
        match self.mode {
            QueueMode::Blocking => self.slot.try_send(decision).is_ok(),
            QueueMode::Overwrite => {
                self.latest.signal(decision);
                true
            }
        }
    }

    /// Wait for the next decision.
    pub async fn receive(&self) -> bool {
        match self.mode {
            QueueMode::Blocking => self.slot.receive().await,
            QueueMode::Overwrite => self.latest.wait().await,
        }
    }

    /// Take a pending decision without waiting.
    pub fn try_receive(&self) -> Option<bool> {
        match self.mode {
            QueueMode::Blocking => self.slot.try_receive().ok(),
            QueueMode::Overwrite => self.latest.try_take(),
        }
    }

    /// Whether a decision is waiting for the relay.
    pub fn is_pending(&self) -> bool {
        match self.mode {
            QueueMode::Blocking => !self.slot.is_empty(),
            QueueMode::Overwrite => self.latest.signaled(),
        }
    }
}
