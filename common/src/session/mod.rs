mod broadcaster;
mod clock;
mod command;
mod controller;
mod input;
mod runner;
mod snapshot;

pub use broadcaster::SessionBroadcaster;
pub use clock::{ClockState, GameClock};
pub use command::SessionCommand;
pub use controller::{SessionController, TickReport};
pub use input::{InputAction, Key};
pub use runner::run_session;
pub use snapshot::{GameOverReason, GameSnapshot, SessionState};
