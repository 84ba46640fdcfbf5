use crate::config::{ConfigError, Validate};
use crate::games::SessionRng;
use crate::games::snake::{
    advance, place_food, place_food_with, Difficulty, Direction, FieldSize, Outcome, Point, Snake,
    SnakeSessionSettings,
};
use crate::storage::{HighScore, KeyValueStore};
use crate::{debug, log};

use super::clock::GameClock;
use super::command::SessionCommand;
use super::input::{InputAction, Key};
use super::snapshot::{GameOverReason, GameSnapshot, SessionState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickReport {
    /// No session in progress or the clock is not running.
    Ignored,
    Moved,
    Grew { score: u32 },
    GameOver {
        reason: GameOverReason,
        score: u32,
        new_high_score: bool,
    },
}

/// Owns one player's game: the snake, food, score, flags and the clock
/// schedule. All mutation goes through these methods; the session actor calls
/// them one event at a time.
pub struct SessionController<S: KeyValueStore> {
    settings: SnakeSessionSettings,
    difficulty: Difficulty,
    state: SessionState,
    snake: Snake,
    travel_direction: Direction,
    pending_direction: Option<Direction>,
    food: Point,
    score: u32,
    high_score: HighScore<S>,
    clock: GameClock,
    rng: SessionRng,
    tick: u64,
    game_over_reason: Option<GameOverReason>,
}

impl<S: KeyValueStore> SessionController<S> {
    pub fn new(
        settings: SnakeSessionSettings,
        high_score: HighScore<S>,
        rng: SessionRng,
    ) -> Result<Self, ConfigError> {
        settings.validate().map_err(ConfigError::Validation)?;

        let start = settings.field_size.center();
        let mut controller = Self {
            travel_direction: settings.start_direction,
            settings,
            difficulty: Difficulty::default(),
            state: SessionState::NotStarted,
            snake: Snake::new(start),
            pending_direction: None,
            food: start,
            score: 0,
            high_score,
            clock: GameClock::new(),
            rng,
            tick: 0,
            game_over_reason: None,
        };
        controller.reset_round();
        Ok(controller)
    }

    pub fn start_game(&mut self, difficulty: Difficulty) {
        self.abandon_round();
        self.difficulty = difficulty;
        self.begin_round();
        log!(
            "Game started on {} ({}ms per tick, seed {})",
            difficulty,
            difficulty.tick_interval().as_millis(),
            self.rng.seed()
        );
    }

    /// Play Again: a fresh round at the current difficulty.
    pub fn reset_game(&mut self) {
        self.abandon_round();
        self.begin_round();
        debug!("Game reset on {}", self.difficulty);
    }

    pub fn return_to_menu(&mut self) {
        self.abandon_round();
        self.clock.stop();
        self.state = SessionState::NotStarted;
        self.game_over_reason = None;
    }

    /// Commits a round in progress and leaves the session idle with the clock stopped.
    pub fn shutdown(&mut self) {
        self.return_to_menu();
        debug!("Session shut down at tick {}", self.tick);
    }

    /// Switches between Playing and Paused. Returns whether anything changed.
    pub fn toggle_pause(&mut self) -> bool {
        match self.state {
            SessionState::Playing => {
                self.clock.pause();
                self.state = SessionState::Paused;
                true
            }
            SessionState::Paused => {
                self.clock.resume();
                self.state = SessionState::Playing;
                true
            }
            SessionState::NotStarted | SessionState::GameOver => false,
        }
    }

    /// Queues a turn for the next tick. Only turns perpendicular to the
    /// direction the snake last moved in are accepted, and only while playing.
    pub fn on_direction_input(&mut self, direction: Direction) -> bool {
        if self.state != SessionState::Playing {
            return false;
        }
        if !direction.is_perpendicular(&self.travel_direction) {
            return false;
        }
        self.pending_direction = Some(direction);
        true
    }

    pub fn on_key(&mut self, key: Key) -> bool {
        match key.action() {
            Some(InputAction::Turn(direction)) => self.on_direction_input(direction),
            Some(InputAction::TogglePause) => self.toggle_pause(),
            None => false,
        }
    }

    pub fn on_tick(&mut self) -> TickReport {
        if self.state != SessionState::Playing || !self.clock.is_running() {
            return TickReport::Ignored;
        }

        self.tick += 1;
        if let Some(direction) = self.pending_direction.take() {
            self.travel_direction = direction;
        }

        match advance(&self.snake, self.travel_direction, self.food, &self.settings.field_size) {
            Outcome::Moved(snake) => {
                self.snake = snake;
                TickReport::Moved
            }
            Outcome::Grew { snake, score_delta } => {
                self.snake = snake;
                self.score += score_delta;
                debug!("Ate food at ({}, {}). Score: {}", self.food.row, self.food.col, self.score);

                match self.next_food() {
                    Some(food) => {
                        self.food = food;
                        TickReport::Grew { score: self.score }
                    }
                    None => self.finish(GameOverReason::BoardFilled),
                }
            }
            Outcome::Terminated(reason) => self.finish(GameOverReason::Collision(reason)),
        }
    }

    pub fn handle_command(&mut self, command: SessionCommand) {
        match command {
            SessionCommand::Start(difficulty) => self.start_game(difficulty),
            SessionCommand::Key(key) => {
                self.on_key(key);
            }
            SessionCommand::Turn(direction) => {
                self.on_direction_input(direction);
            }
            SessionCommand::TogglePause => {
                self.toggle_pause();
            }
            SessionCommand::Reset => self.reset_game(),
            SessionCommand::ReturnToMenu => self.return_to_menu(),
            SessionCommand::Shutdown => self.shutdown(),
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            field_size: self.settings.field_size,
            snake: self.snake.to_vec(),
            food: self.food,
            score: self.score,
            high_score: self.high_score.best(),
            state: self.state,
            difficulty: self.difficulty,
            tick: self.tick,
            game_over_reason: self.game_over_reason,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score.best()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// The direction the snake will move in on the next tick.
    pub fn direction(&self) -> Direction {
        self.pending_direction.unwrap_or(self.travel_direction)
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Point {
        self.food
    }

    pub fn field_size(&self) -> FieldSize {
        self.settings.field_size
    }

    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    fn begin_round(&mut self) {
        self.reset_round();
        self.state = SessionState::Playing;
        self.game_over_reason = None;
        self.clock.start(self.difficulty);
    }

    fn reset_round(&mut self) {
        self.snake = Snake::new(self.settings.field_size.center());
        self.travel_direction = self.settings.start_direction;
        self.pending_direction = None;
        self.score = 0;
        self.tick = 0;
        self.food = self
            .next_food()
            .unwrap_or_else(|| place_food(&self.settings.field_size, &mut self.rng));
    }

    fn next_food(&mut self) -> Option<Point> {
        place_food_with(
            self.settings.food_placement,
            &self.settings.field_size,
            &self.snake,
            &mut self.rng,
        )
    }

    // A round left mid-game still counts towards the high score.
    fn abandon_round(&mut self) {
        if matches!(self.state, SessionState::Playing | SessionState::Paused) {
            self.high_score.record(self.score);
        }
    }

    fn finish(&mut self, reason: GameOverReason) -> TickReport {
        let new_high_score = self.high_score.record(self.score);
        self.state = SessionState::GameOver;
        self.game_over_reason = Some(reason);
        self.clock.stop();
        self.pending_direction = None;

        log!("Game over ({:?}) after {} ticks. Score: {}", reason, self.tick, self.score);

        TickReport::GameOver {
            reason,
            score: self.score,
            new_high_score,
        }
    }

    #[cfg(test)]
    fn set_food(&mut self, food: Point) {
        self.food = food;
    }

    #[cfg(test)]
    fn set_snake(&mut self, snake: Snake, direction: Direction) {
        self.snake = snake;
        self.travel_direction = direction;
        self.pending_direction = None;
    }
}
