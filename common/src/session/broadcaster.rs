use std::future::Future;

use super::snapshot::GameSnapshot;

/// Receives the session state after every processed event.
pub trait SessionBroadcaster {
    fn broadcast_state(&self, snapshot: GameSnapshot) -> impl Future<Output = ()> + Send;
}
