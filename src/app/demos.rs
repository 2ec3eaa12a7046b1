//! Demo wiring: turns components into the futures `main` runs.
//!
//! `pot_relay` spawns the relay onto the caller's [`LocalExecutor`]; the
//! relay suspends on the queue, so the executor always gets back to the
//! sampler.  The blinker only ever suspends on its clock, so `pot_blink`
//! races both loops inside one future instead of spawning.  Either way
//! the returned future completes as soon as one loop fails, and it does
//! not borrow the executor, so it can be handed straight to
//! `executor.run`.  Nothing here returns `Ok`: every demo runs for the
//! lifetime of the process.
//!
//! ```text
//!  PotRelay   Sampler ──CommandQueue──▶ ActuatorRelay ──▶ indicator
//!  PotDirect  Sampler ─────────────────▶ ActuatorRelay ──▶ indicator
//!  PotBlink   RateSampler ──PeriodRegister──▶ Blinker ──▶ indicator
//!  Blinky     Blinker (fixed period) ──▶ indicator
//!  ButtonPoll ButtonFollower ──▶ indicator
//!  ButtonInt  ISR ──▶ EdgeToggle ──▶ indicator
//! ```

use core::convert::Infallible;
use core::future::Future;

use edge_executor::LocalExecutor;
use embedded_hal::digital::{InputPin, OutputPin};
use futures_lite::future;
use log::{error, info};

use super::blink::{Blinker, PeriodRegister, RateSampler};
use super::events::DemoEvent;
use super::follower::ButtonFollower;
use super::ports::{AnalogInput, Clock, Edge, EdgeSource, EventSink};
use super::queue::CommandQueue;
use super::relay::ActuatorRelay;
use super::sampler::Sampler;
use super::toggle::{self, EdgeToggle};
use crate::error::{PeripheralError, Result};

/// Sampler and relay as two tasks joined by the single-slot queue.
pub fn pot_relay<'a, A, C, S1, P, S2, const N: usize>(
    executor: &LocalExecutor<'a, N>,
    mut sampler: Sampler<A, C, S1>,
    mut relay: ActuatorRelay<P, S2>,
    queue: &'a CommandQueue,
) -> impl Future<Output = Result<Infallible>> + use<'a, A, C, S1, P, S2, N>
where
    A: AnalogInput + 'a,
    C: Clock + 'a,
    S1: EventSink + 'a,
    P: OutputPin + 'a,
    S2: EventSink + 'a,
{
    let relay_task = executor.spawn(async move { relay.run(queue).await });
    future::or(async move { sampler.run(queue).await }, relay_task)
}

/// Sampler writes the indicator itself; no queue, no second task.
pub async fn pot_direct<A, C, S1, P, S2>(
    sampler: &mut Sampler<A, C, S1>,
    relay: &mut ActuatorRelay<P, S2>,
) -> Result<Infallible>
where
    A: AnalogInput,
    C: Clock,
    S1: EventSink,
    P: OutputPin,
    S2: EventSink,
{
    loop {
        let on = sampler.sample()?;
        relay.apply(on)?;
        sampler.sleep().await;
    }
}

/// Blinker and rate sampler as two loops sharing `period`.
pub async fn pot_blink<A, C1, S, P, C2>(
    rate: &mut RateSampler<A, C1, S>,
    blinker: &mut Blinker<P, C2>,
    period: &PeriodRegister,
) -> Result<Infallible>
where
    A: AnalogInput,
    C1: Clock,
    S: EventSink,
    P: OutputPin,
    C2: Clock,
{
    // Sampler first: it is the loop that can fail.
    future::or(rate.run(period), blinker.run(period)).await
}

/// Fixed-rate blink.
pub async fn blinky<P: OutputPin, C: Clock>(
    blinker: &mut Blinker<P, C>,
    period: &PeriodRegister,
) -> Result<Infallible> {
    blinker.run(period).await
}

/// Poll the button forever.
pub async fn button_poll<I, P, C, S>(follower: &mut ButtonFollower<I, P, C, S>) -> Result<Infallible>
where
    I: InputPin,
    P: OutputPin,
    C: Clock,
    S: EventSink,
{
    follower.run().await
}

/// Hook the toggle onto the button interrupt.
///
/// A registration failure is reported and returned, but the caller is
/// expected to keep running: the indicator simply never changes.
pub fn button_interrupt<E, P>(
    source: &mut E,
    edge: Edge,
    toggle: EdgeToggle<P>,
    sink: &mut impl EventSink,
) -> core::result::Result<(), PeripheralError>
where
    E: EdgeSource,
    P: OutputPin + Send + 'static,
{
    match toggle::arm(source, edge, toggle) {
        Ok(()) => {
            info!("button interrupt armed on {:?} edge", edge);
            Ok(())
        }
        Err(e) => {
            error!("pin interrupt error: {}", e);
            sink.emit(&DemoEvent::Degraded(e));
            Err(e)
        }
    }
}
