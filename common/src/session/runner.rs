use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

use crate::storage::KeyValueStore;
use crate::{debug, log};

use super::broadcaster::SessionBroadcaster;
use super::clock::GameClock;
use super::command::SessionCommand;
use super::controller::{SessionController, TickReport};
use super::snapshot::GameSnapshot;

/// Drives one controller until `Shutdown` arrives or every sender is dropped.
///
/// Commands and clock ticks are handled inside a single `select!`, so each event
/// (including the broadcast that follows it) completes before the next one is
/// looked at. Returns the last state.
pub async fn run_session<S, B>(
    mut controller: SessionController<S>,
    mut command_rx: mpsc::UnboundedReceiver<SessionCommand>,
    broadcaster: B,
) -> GameSnapshot
where
    S: KeyValueStore,
    B: SessionBroadcaster,
{
    let mut ticker = Ticker::default();
    broadcaster.broadcast_state(controller.snapshot()).await;

    loop {
        ticker.sync(controller.clock());

        tokio::select! {
            biased;

            command = command_rx.recv() => {
                match command {
                    Some(SessionCommand::Shutdown) | None => break,
                    Some(command) => {
                        debug!("Session command: {:?}", command);
                        controller.handle_command(command);
                    }
                }
            }
            _ = ticker.tick() => {
                if let TickReport::GameOver { reason, score, .. } = controller.on_tick() {
                    debug!("Session reached game over: {:?}, score {}", reason, score);
                }
            }
        }

        broadcaster.broadcast_state(controller.snapshot()).await;
    }

    controller.shutdown();
    let snapshot = controller.snapshot();
    broadcaster.broadcast_state(snapshot.clone()).await;
    log!("Session closed. High score: {}", snapshot.high_score);
    snapshot
}

/// Tokio timer mirroring a `GameClock`.
#[derive(Default)]
struct Ticker {
    interval: Option<Interval>,
    armed_epoch: Option<u64>,
}

impl Ticker {
    fn sync(&mut self, clock: &GameClock) {
        match clock.active_period() {
            Some(period) if self.armed_epoch != Some(clock.epoch()) => {
                self.interval = Some(Self::arm(period));
                self.armed_epoch = Some(clock.epoch());
            }
            Some(_) => {}
            None => {
                self.interval = None;
                self.armed_epoch = None;
            }
        }
    }

    // First tick one full period after arming, not immediately.
    fn arm(period: Duration) -> Interval {
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        interval
    }

    async fn tick(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }
}
