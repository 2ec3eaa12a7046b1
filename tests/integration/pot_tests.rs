//! Pot demos end to end: sampler → queue → relay, direct drive, and the
//! pot-controlled blink rate.

use std::time::Duration;

use edge_executor::LocalExecutor;
use futures_lite::future;
use pinlab::adapters::time::VirtualClock;
use pinlab::app::blink::{Blinker, PeriodRegister, RateSampler};
use pinlab::app::demos;
use pinlab::app::events::DemoEvent;
use pinlab::app::queue::CommandQueue;
use pinlab::app::relay::ActuatorRelay;
use pinlab::app::sampler::Sampler;
use pinlab::app::threshold::ThresholdRule;
use pinlab::config::QueueMode;
use pinlab::error::{Error, SensorError};

use crate::mock_hw::{MockAdc, RecordingSink, SharedPin};

const PERIOD: Duration = Duration::from_millis(100);

fn sampler(samples: &[u16], rc: i32) -> Sampler<MockAdc, VirtualClock, RecordingSink> {
    Sampler::new(
        MockAdc::then_fail(samples, rc),
        VirtualClock::new(),
        RecordingSink::new(),
        ThresholdRule::default(),
        PERIOD,
    )
}

// ── Sampler → queue → relay ───────────────────────────────────

#[test]
fn low_high_low_reaches_the_pin_in_order() {
    let queue = CommandQueue::new(QueueMode::Blocking);
    let pin = SharedPin::new();
    let mut sampler = sampler(&[0x0000, 0x9000, 0x1000], -1);
    let mut relay = ActuatorRelay::new(pin.clone(), RecordingSink::new());

    let (s, r) = future::block_on(future::zip(
        sampler.run_ticks(&queue, 3),
        relay.run_for(&queue, 3),
    ));
    s.unwrap();
    r.unwrap();

    assert_eq!(pin.writes(), vec![false, true, false]);
    assert_eq!(sampler.clock().elapsed(), Duration::from_millis(300));
    assert!(!queue.is_pending());
}

#[test]
fn spawned_demo_stops_on_adc_failure() {
    let queue = CommandQueue::new(QueueMode::Blocking);
    let pin = SharedPin::new();
    let executor: LocalExecutor<'_, 8> = LocalExecutor::new();
    let relay = ActuatorRelay::new(pin.clone(), RecordingSink::new());

    let err = future::block_on(executor.run(demos::pot_relay(
        &executor,
        sampler(&[0x1000, 0x9000, 0x2000], -7),
        relay,
        &queue,
    )))
    .unwrap_err();

    assert_eq!(err, Error::Sensor(SensorError::AdcReadFailed(-7)));
    // Three decisions were sent; at most the last is still in the slot.
    let writes = pin.writes();
    assert!([false, true, false].starts_with(&writes), "writes: {writes:?}");
    assert_eq!(writes.len() + usize::from(queue.is_pending()), 3);
}

#[test]
fn spawned_demo_returns_first_read_failure() {
    let queue = CommandQueue::new(QueueMode::Overwrite);
    let pin = SharedPin::new();
    let executor: LocalExecutor<'_, 8> = LocalExecutor::new();
    let relay = ActuatorRelay::new(pin.clone(), RecordingSink::new());

    let err = future::block_on(executor.run(demos::pot_relay(&executor, sampler(&[], -5), relay, &queue)))
        .unwrap_err();

    assert_eq!(err, Error::Sensor(SensorError::AdcReadFailed(-5)));
    assert!(pin.writes().is_empty());
}

#[test]
fn blocking_send_waits_for_the_relay() {
    let queue = CommandQueue::new(QueueMode::Blocking);
    let mut sampler = sampler(&[0x9000, 0x0100], -1);

    assert_eq!(future::block_on(sampler.step(&queue)), Ok(true));
    // Slot still full: the second send cannot complete.
    assert!(future::block_on(future::poll_once(sampler.step(&queue))).is_none());

    assert_eq!(queue.try_receive(), Some(true));
    assert!(!queue.is_pending());
}

#[test]
fn repeated_decision_behind_idle_relay_keeps_state() {
    let queue = CommandQueue::new(QueueMode::Blocking);
    let mut sampler = sampler(&[0x9000, 0x9000], -1);
    let mut relay = ActuatorRelay::new(SharedPin::new(), RecordingSink::new());

    assert_eq!(future::block_on(sampler.step(&queue)), Ok(true));
    // Same decision again while the relay is idle: the send stays pending.
    assert!(future::block_on(future::poll_once(sampler.step(&queue))).is_none());

    while let Some(on) = queue.try_receive() {
        relay.apply(on).unwrap();
    }
    assert!(relay.state());
    assert_eq!(relay.applied(), 1);
}

#[test]
fn overwrite_queue_keeps_latest_decision() {
    let queue = CommandQueue::new(QueueMode::Overwrite);
    let mut sampler = sampler(&[0x9000, 0x0100], -1);

    future::block_on(async {
        sampler.step(&queue).await.unwrap();
        sampler.step(&queue).await.unwrap();
    });

    assert_eq!(queue.try_receive(), Some(false));
    assert_eq!(queue.try_receive(), None);
}

#[test]
fn hysteresis_band_holds_output_on() {
    let queue = CommandQueue::new(QueueMode::Blocking);
    let pin = SharedPin::new();
    let mut sampler = Sampler::new(
        MockAdc::then_fail(&[0x8000, 0x7800, 0x6FFF], -1),
        VirtualClock::new(),
        RecordingSink::new(),
        ThresholdRule::new(0x8000, 0x1000),
        PERIOD,
    );
    let mut relay = ActuatorRelay::new(pin.clone(), RecordingSink::new());

    let (s, r) = future::block_on(future::zip(
        sampler.run_ticks(&queue, 3),
        relay.run_for(&queue, 3),
    ));
    s.unwrap();
    r.unwrap();

    assert_eq!(pin.writes(), vec![true, true, false]);
}

// ── Direct drive ──────────────────────────────────────────────

#[test]
fn direct_loop_writes_every_sample() {
    let pin = SharedPin::new();
    let mut sampler = sampler(&[0x9000, 0x0100], -3);
    let mut sink = RecordingSink::new();
    let mut relay = ActuatorRelay::new(pin.clone(), &mut sink);

    let err = future::block_on(demos::pot_direct(&mut sampler, &mut relay)).unwrap_err();

    assert_eq!(err, Error::Sensor(SensorError::AdcReadFailed(-3)));
    assert_eq!(pin.writes(), vec![true, false]);
    assert_eq!(sampler.clock().sleeps(), 2);
    drop(relay);
    assert_eq!(sink.outputs(), vec![true, false]);
}

// ── Pot-controlled blink ──────────────────────────────────────

#[test]
fn blink_demo_returns_first_read_failure() {
    let period = PeriodRegister::new(500);
    let pin = SharedPin::new();
    let mut rate = RateSampler::new(sampler(&[], -4), 500, 250);
    let mut blinker = Blinker::new(pin.clone(), VirtualClock::new());

    let err = future::block_on(demos::pot_blink(&mut rate, &mut blinker, &period)).unwrap_err();

    assert_eq!(err, Error::Sensor(SensorError::AdcReadFailed(-4)));
    assert_eq!(period.get(), 500);
    assert!(pin.writes().is_empty());
}

#[test]
fn pot_selects_blink_rate() {
    let period = PeriodRegister::new(500);
    let pin = SharedPin::new();
    let mut sink = RecordingSink::new();

    let mut rate = RateSampler::new(
        Sampler::new(
            MockAdc::then_fail(&[0x9000, 0x0100], -2),
            VirtualClock::new(),
            &mut sink,
            ThresholdRule::default(),
            PERIOD,
        ),
        500,
        250,
    );
    let mut blinker = Blinker::new(pin.clone(), VirtualClock::new());
    let err = future::block_on(demos::pot_blink(&mut rate, &mut blinker, &period)).unwrap_err();
    drop(rate);

    assert_eq!(err, Error::Sensor(SensorError::AdcReadFailed(-2)));
    assert_eq!(period.get(), 250);

    let changes: Vec<u32> = sink
        .events
        .iter()
        .filter_map(|e| match e {
            DemoEvent::BlinkPeriodChanged { period_ms } => Some(*period_ms),
            _ => None,
        })
        .collect();
    assert_eq!(changes, vec![500, 250]);

    // Blinker starts low and alternates.
    let writes = pin.writes();
    for (i, level) in writes.iter().enumerate() {
        assert_eq!(*level, i % 2 == 1);
    }
}
