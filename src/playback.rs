//! Paced replay.
//!
//! The replay engine has no clock of its own; this loop applies one recorded
//! move per tick of a tokio interval. Dropping the future stops playback.

use std::time::Duration;

use tokio::time::{interval, MissedTickBehavior};

use crate::engine::{ReplayEngine, ReplayError};
use crate::types::Outcome;

/// Apply the remaining moves one per `tick`, calling `on_step` after each.
///
/// A zero `tick` applies everything without waiting.
pub async fn play_paced<F>(
    replay: &mut ReplayEngine,
    tick: Duration,
    mut on_step: F,
) -> Result<Outcome, ReplayError>
where
    F: FnMut(&ReplayEngine, Outcome),
{
    if tick.is_zero() {
        while let Some(outcome) = replay.step()? {
            on_step(replay, outcome);
        }
        return Ok(replay.engine().outcome());
    }

    let mut ticker = interval(tick);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately.
    ticker.tick().await;

    while !replay.is_done() {
        ticker.tick().await;
        if let Some(outcome) = replay.step()? {
            on_step(replay, outcome);
        }
    }
    Ok(replay.engine().outcome())
}
