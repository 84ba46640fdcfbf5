mod engine;
mod food;
mod grid;
mod settings;
mod snake;
mod types;

pub use engine::{advance, Outcome};
pub use food::{place_food, place_food_avoiding, place_food_with};
pub use settings::SnakeSessionSettings;
pub use snake::Snake;
pub use types::{Difficulty, Direction, FieldSize, FoodPlacement, Point, TerminationReason};
