//! Clock adapters.
//!
//! - [`ReactorClock`] sleeps on an `async-io-mini` timer.  Used on the
//!   board, and works on the host too.
//! - [`VirtualClock`] never waits: it adds the requested period to an
//!   elapsed counter and yields once, so tests drive many periods
//!   instantly and still interleave tasks the way real sleeps would.

use core::time::Duration;

use async_io_mini::Timer;
use futures_lite::future;

use crate::app::ports::Clock;

/// Wall-clock sleeps backed by the async-io-mini reactor.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReactorClock;

impl ReactorClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for ReactorClock {
    async fn sleep(&mut self, period: Duration) {
        Timer::after(period).await;
    }
}

/// Simulated time for tests.
#[derive(Debug, Default, Clone)]
pub struct VirtualClock {
    elapsed: Duration,
    sleeps: usize,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total simulated time slept.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Number of completed sleeps.
    pub fn sleeps(&self) -> usize {
        self.sleeps
    }
}

impl Clock for VirtualClock {
    async fn sleep(&mut self, period: Duration) {
        self.elapsed += period;
        self.sleeps += 1;
        future::yield_now().await;
    }
}
