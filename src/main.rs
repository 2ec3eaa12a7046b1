//! Pinlab firmware: main entry point.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    Adapters (outer ring)                     │
//! │                                                              │
//! │  EspAnalogInput  EspOutputPin  EspInputPin  EspEdgeSource    │
//! │  (AnalogInput)   (OutputPin)   (InputPin)   (EdgeSource)     │
//! │  ReactorClock    LogEventSink                                │
//! │  (Clock)         (EventSink)                                 │
//! │                                                              │
//! │  ──────────────── Port Trait Boundary ─────────────────      │
//! │                                                              │
//! │  ┌────────────────────────────────────────────────────────┐  │
//! │  │  Sampler · ActuatorRelay · Blinker · ButtonFollower ·  │  │
//! │  │  EdgeToggle            (pure logic, host-tested)       │  │
//! │  └────────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! One demo runs per boot, selected by [`SystemConfig::mode`].  The
//! sampler/relay demo runs on a single-threaded `edge-executor`; the
//! interrupt demo arms the button ISR and idles.
#![deny(unused_must_use)]

use core::time::Duration;

use anyhow::Result;
use edge_executor::LocalExecutor;
use esp_idf_hal::delay::FreeRtos;
use futures_lite::future;
use log::{debug, error, info};

use pinlab::adapters::log_sink::LogEventSink;
use pinlab::adapters::time::ReactorClock;
use pinlab::app::blink::{Blinker, PeriodRegister, RateSampler};
use pinlab::app::demos;
use pinlab::app::events::DemoEvent;
use pinlab::app::follower::ButtonFollower;
use pinlab::app::ports::EventSink;
use pinlab::app::queue::CommandQueue;
use pinlab::app::relay::ActuatorRelay;
use pinlab::app::sampler::Sampler;
use pinlab::app::threshold::ThresholdRule;
use pinlab::app::toggle::{BUTTON_TOGGLE, EdgeToggle};
use pinlab::config::{DemoMode, SystemConfig};
use pinlab::drivers::hw_init::Board;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Pinlab v{}                       ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Config (compiled in) ───────────────────────────────
    let config = SystemConfig::default();
    config.validate()?;
    info!("config: {}", serde_json::to_string(&config)?);

    // ── 3. Peripherals ────────────────────────────────────────
    let board = Board::init(&config.pins)?;

    let mut sink = LogEventSink::new();
    sink.emit(&DemoEvent::Started(config.mode));

    let sample_period = Duration::from_millis(u64::from(config.sample_period_ms));
    let rule = ThresholdRule::new(config.threshold, config.hysteresis);

    // ── 4. Run the selected demo ──────────────────────────────
    // Declared before the executor so spawned tasks may borrow it.
    let queue = CommandQueue::new(config.queue);
    let executor: LocalExecutor<'_, 8> = LocalExecutor::new();

    let outcome = match config.mode {
        DemoMode::Blinky => {
            let period = PeriodRegister::new(config.blink_period_ms);
            let mut blinker = Blinker::new(board.indicator, ReactorClock::new());
            future::block_on(demos::blinky(&mut blinker, &period))
        }
        DemoMode::PotDirect => {
            let mut sampler = Sampler::new(board.pot, ReactorClock::new(), LogEventSink::new(), rule, sample_period);
            let mut relay = ActuatorRelay::new(board.indicator, LogEventSink::new());
            future::block_on(demos::pot_direct(&mut sampler, &mut relay))
        }
        DemoMode::PotRelay => {
            let sampler = Sampler::new(board.pot, ReactorClock::new(), LogEventSink::new(), rule, sample_period);
            let relay = ActuatorRelay::new(board.indicator, LogEventSink::new());
            info!("queue mode: {:?}", queue.mode());
            future::block_on(executor.run(demos::pot_relay(&executor, sampler, relay, &queue)))
        }
        DemoMode::PotBlink => {
            let period = PeriodRegister::new(config.blink_period_ms);
            let sampler = Sampler::new(board.pot, ReactorClock::new(), LogEventSink::new(), rule, sample_period);
            let mut rate = RateSampler::new(sampler, config.blink_period_ms, config.fast_blink_period_ms);
            let mut blinker = Blinker::new(board.indicator, ReactorClock::new());
            future::block_on(demos::pot_blink(&mut rate, &mut blinker, &period))
        }
        DemoMode::ButtonPoll => {
            let mut follower = ButtonFollower::new(
                board.button,
                board.indicator,
                ReactorClock::new(),
                LogEventSink::new(),
                Duration::from_millis(u64::from(config.button_poll_ms)),
            );
            future::block_on(demos::button_poll(&mut follower))
        }
        DemoMode::ButtonInterrupt => {
            let mut edges = board.button.edge_source();
            let toggle = EdgeToggle::new(board.indicator, &BUTTON_TOGGLE);
            if demos::button_interrupt(&mut edges, config.button_edge, toggle, &mut sink).is_err() {
                info!("idling with the indicator held low");
            }
            // All work happens in the ISR.
            let mut seen = BUTTON_TOGGLE.get();
            loop {
                FreeRtos::delay_ms(1000);
                let now = BUTTON_TOGGLE.get();
                if now != seen {
                    debug!("toggle -> {:?}", now);
                    seen = now;
                }
            }
        }
    };

    let Err(e) = outcome;
    error!("demo stopped: {}", e);
    Err(e.into())
}
