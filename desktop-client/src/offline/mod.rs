mod broadcaster;
mod local_game;

pub use broadcaster::LocalBroadcaster;
pub use local_game::{build_controller, LocalGame};
