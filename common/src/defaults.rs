/// Key under which the best score is kept in the key-value store.
pub const HIGH_SCORE_KEY: &str = "snakeHighScore";

pub const CELL_SIZE_PX: f32 = 30.0;
pub const MAX_BOARD_WIDTH_PX: f32 = 800.0;
pub const HORIZONTAL_MARGIN_PX: f32 = 40.0;
pub const VERTICAL_MARGIN_PX: f32 = 200.0;
pub const MIN_FIELD_DIMENSION: usize = 5;
pub const MAX_FIELD_DIMENSION: usize = 100;
