use eframe::egui;
use snake_common::defaults::CELL_SIZE_PX;
use snake_common::games::snake::{FieldSize, Point};
use snake_common::session::{GameSnapshot, SessionState};

use super::colors;

/// Where the board landed on screen for the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardLayout {
    pub origin: egui::Pos2,
    pub cell_size: f32,
}

impl BoardLayout {
    pub fn fit(field_size: FieldSize, available: egui::Vec2) -> egui::Vec2 {
        let cell_size = Self::cell_size_for(field_size, available);
        egui::vec2(field_size.cols as f32 * cell_size, field_size.rows as f32 * cell_size)
    }

    fn cell_size_for(field_size: FieldSize, available: egui::Vec2) -> f32 {
        let by_width = available.x / field_size.cols.max(1) as f32;
        let by_height = available.y / field_size.rows.max(1) as f32;
        CELL_SIZE_PX.min(by_width).min(by_height).max(4.0)
    }

    pub fn cell_rect(&self, point: Point) -> egui::Rect {
        let min = self.origin
            + egui::vec2(point.col as f32 * self.cell_size, point.row as f32 * self.cell_size);
        egui::Rect::from_min_size(min, egui::vec2(self.cell_size, self.cell_size))
    }

    /// Cell centre relative to the board origin.
    pub fn local_center(&self, point: Point) -> egui::Pos2 {
        egui::pos2(
            (point.col as f32 + 0.5) * self.cell_size,
            (point.row as f32 + 0.5) * self.cell_size,
        )
    }
}

pub fn render_status_bar(ui: &mut egui::Ui, snapshot: &GameSnapshot) {
    ui.horizontal(|ui| {
        ui.heading(format!("Score: {}", snapshot.score));
        ui.add_space(20.0);
        ui.label(format!("High Score: {}", snapshot.high_score));
        ui.add_space(20.0);
        ui.label(format!("Difficulty: {}", snapshot.difficulty));
    });
}

pub fn render_board(ui: &mut egui::Ui, snapshot: &GameSnapshot) -> BoardLayout {
    let field_size = snapshot.field_size;
    let available = ui.available_size();
    let cell_size = BoardLayout::cell_size_for(field_size, available);
    let size = BoardLayout::fit(field_size, available);

    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    let layout = BoardLayout {
        origin: rect.min,
        cell_size,
    };
    let painter = ui.painter_at(rect);

    painter.rect_filled(rect, 0.0, colors::BACKGROUND);
    for col in 1..field_size.cols {
        let x = rect.min.x + col as f32 * cell_size;
        painter.line_segment(
            [egui::pos2(x, rect.min.y), egui::pos2(x, rect.max.y)],
            egui::Stroke::new(1.0, colors::GRID_LINE),
        );
    }
    for row in 1..field_size.rows {
        let y = rect.min.y + row as f32 * cell_size;
        painter.line_segment(
            [egui::pos2(rect.min.x, y), egui::pos2(rect.max.x, y)],
            egui::Stroke::new(1.0, colors::GRID_LINE),
        );
    }

    painter.circle_filled(
        layout.cell_rect(snapshot.food).center(),
        cell_size * 0.35,
        colors::FOOD,
    );

    let len = snapshot.snake.len();
    for (index, segment) in snapshot.snake.iter().enumerate().rev() {
        let color = if index == 0 {
            colors::SNAKE_HEAD
        } else {
            colors::body_color(index, len)
        };
        painter.rect_filled(layout.cell_rect(*segment).shrink(1.0), cell_size * 0.2, color);
    }

    painter.rect_stroke(
        rect,
        0.0,
        egui::Stroke::new(2.0, colors::BORDER),
        egui::StrokeKind::Outside,
    );

    if snapshot.state == SessionState::Paused {
        painter.rect_filled(rect, 0.0, egui::Color32::from_black_alpha(140));
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "PAUSED",
            egui::FontId::proportional(40.0),
            egui::Color32::WHITE,
        );
    }

    layout
}
