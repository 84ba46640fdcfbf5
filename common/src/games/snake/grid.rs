use crate::defaults::{
    CELL_SIZE_PX, HORIZONTAL_MARGIN_PX, MAX_BOARD_WIDTH_PX, MAX_FIELD_DIMENSION, MIN_FIELD_DIMENSION,
    VERTICAL_MARGIN_PX,
};

use super::types::FieldSize;

impl FieldSize {
    /// Number of whole cells that fit the viewport once the header and side
    /// margins are taken off. Each axis stays within `MIN_FIELD_DIMENSION..=MAX_FIELD_DIMENSION`.
    pub fn from_viewport(width_px: f32, height_px: f32) -> FieldSize {
        let usable_width = (width_px - HORIZONTAL_MARGIN_PX).min(MAX_BOARD_WIDTH_PX);
        let usable_height = height_px - VERTICAL_MARGIN_PX;

        FieldSize::new(
            cells_along(usable_height),
            cells_along(usable_width),
        )
    }
}

fn cells_along(length_px: f32) -> usize {
    let cells = (length_px / CELL_SIZE_PX).floor();
    if cells.is_finite() && cells > 0.0 {
        (cells as usize).clamp(MIN_FIELD_DIMENSION, MAX_FIELD_DIMENSION)
    } else {
        MIN_FIELD_DIMENSION
    }
}
