mod app;
mod board;
mod colors;
mod game_over;
mod input;
mod menu;
mod particles;

pub use app::SnakeApp;
