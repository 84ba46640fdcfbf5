use crate::games::snake::{Difficulty, FieldSize, Point, TerminationReason};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    Playing,
    Paused,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOverReason {
    Collision(TerminationReason),
    BoardFilled,
}

/// Everything the presentation layer needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSnapshot {
    pub field_size: FieldSize,
    pub snake: Vec<Point>,
    pub food: Point,
    pub score: u32,
    pub high_score: u32,
    pub state: SessionState,
    pub difficulty: Difficulty,
    pub tick: u64,
    pub game_over_reason: Option<GameOverReason>,
}

impl GameSnapshot {
    pub fn head(&self) -> Option<Point> {
        self.snake.first().copied()
    }

    pub fn is_in_game(&self) -> bool {
        matches!(self.state, SessionState::Playing | SessionState::Paused)
    }
}
