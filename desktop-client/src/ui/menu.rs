use eframe::egui;
use snake_common::games::snake::Difficulty;

fn difficulty_label(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "Easy",
        Difficulty::Medium => "Medium",
        Difficulty::Hard => "Hard",
    }
}

/// Returns the difficulty the player picked this frame, if any.
pub fn render_menu(ui: &mut egui::Ui, high_score: u32, last_difficulty: Difficulty) -> Option<Difficulty> {
    let mut chosen = None;

    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.heading(egui::RichText::new("Snake").size(48.0));
        ui.add_space(10.0);
        ui.label(format!("High Score: {}", high_score));
        ui.add_space(30.0);

        ui.label("Choose a difficulty:");
        ui.add_space(10.0);
        for difficulty in Difficulty::ALL {
            let text = format!(
                "{} ({} ms)",
                difficulty_label(difficulty),
                difficulty.tick_interval().as_millis()
            );
            let button = egui::Button::new(egui::RichText::new(text).size(20.0))
                .min_size(egui::vec2(220.0, 40.0))
                .selected(difficulty == last_difficulty);
            if ui.add(button).clicked() {
                chosen = Some(difficulty);
            }
            ui.add_space(6.0);
        }

        ui.add_space(30.0);
        ui.label("Arrow keys steer the snake");
        ui.label("P pauses and resumes");
    });

    chosen
}
