use eframe::egui;
use snake_common::session::{GameOverReason, GameSnapshot, SessionCommand};

use crate::state::CommandSender;

fn reason_text(reason: Option<GameOverReason>) -> String {
    match reason {
        Some(GameOverReason::Collision(termination)) => format!("The snake {}", termination),
        Some(GameOverReason::BoardFilled) => "The board is full!".to_string(),
        None => String::new(),
    }
}

pub fn render_game_over(ui: &mut egui::Ui, snapshot: &GameSnapshot, command_sender: &CommandSender) {
    ui.vertical_centered(|ui| {
        ui.heading(
            egui::RichText::new("Game Over")
                .color(egui::Color32::RED)
                .size(32.0),
        );
        let reason = reason_text(snapshot.game_over_reason);
        if !reason.is_empty() {
            ui.label(reason);
        }

        ui.add_space(10.0);
        ui.label(format!("Final Score: {}", snapshot.score));
        if snapshot.score > 0 && snapshot.score == snapshot.high_score {
            ui.label(
                egui::RichText::new("New High Score!")
                    .color(egui::Color32::GOLD)
                    .size(20.0),
            );
        } else {
            ui.label(format!("High Score: {}", snapshot.high_score));
        }

        ui.add_space(20.0);
        ui.horizontal(|ui| {
            if ui.button("Play Again").clicked() {
                command_sender.send(SessionCommand::Reset);
            }
            if ui.button("Main Menu").clicked() {
                command_sender.send(SessionCommand::ReturnToMenu);
            }
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use snake_common::games::snake::TerminationReason;

    #[test]
    fn test_reason_text() {
        assert_eq!(reason_text(None), "");
        assert_eq!(reason_text(Some(GameOverReason::BoardFilled)), "The board is full!");
        assert_eq!(
            reason_text(Some(GameOverReason::Collision(TerminationReason::Wall))),
            "The snake hit the wall"
        );
    }
}
