use crate::games::snake::{Difficulty, Direction};

use super::input::Key;

/// Messages accepted by the session actor, processed strictly in arrival order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    Start(Difficulty),
    Key(Key),
    Turn(Direction),
    TogglePause,
    Reset,
    ReturnToMenu,
    Shutdown,
}
