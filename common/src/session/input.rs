use crate::games::snake::Direction;

/// Keys the game reacts to; everything else is `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Char(char),
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputAction {
    Turn(Direction),
    TogglePause,
}

impl Key {
    pub fn action(&self) -> Option<InputAction> {
        match self {
            Key::ArrowUp => Some(InputAction::Turn(Direction::Up)),
            Key::ArrowDown => Some(InputAction::Turn(Direction::Down)),
            Key::ArrowLeft => Some(InputAction::Turn(Direction::Left)),
            Key::ArrowRight => Some(InputAction::Turn(Direction::Right)),
            Key::Char('p') | Key::Char('P') => Some(InputAction::TogglePause),
            Key::Char(_) | Key::Other => None,
        }
    }
}
