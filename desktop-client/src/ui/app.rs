use std::time::{Duration, Instant};

use eframe::egui;
use snake_common::games::snake::Difficulty;
use snake_common::session::{GameSnapshot, SessionCommand, SessionState};
use snake_common::{debug, warn};

use crate::config::ClientConfigManager;
use crate::state::{CommandSender, SharedState};

use super::board::{render_board, render_status_bar};
use super::game_over::render_game_over;
use super::input::pressed_keys;
use super::menu::render_menu;
use super::particles::ParticleSystem;

const PARTICLE_FRAME: Duration = Duration::from_millis(16);

pub struct SnakeApp {
    shared_state: SharedState,
    command_sender: CommandSender,
    config_manager: ClientConfigManager,
    last_difficulty: Difficulty,
    last_score: u32,
    particles: ParticleSystem,
}

impl SnakeApp {
    pub fn new(
        shared_state: SharedState,
        command_sender: CommandSender,
        config_manager: ClientConfigManager,
        last_difficulty: Difficulty,
    ) -> Self {
        Self {
            shared_state,
            command_sender,
            config_manager,
            last_difficulty,
            last_score: 0,
            particles: ParticleSystem::new(),
        }
    }

    fn start(&mut self, difficulty: Difficulty) {
        self.command_sender.send(SessionCommand::Start(difficulty));
        if difficulty == self.last_difficulty {
            return;
        }
        self.last_difficulty = difficulty;
        self.remember_difficulty(difficulty);
    }

    fn remember_difficulty(&self, difficulty: Difficulty) {
        let mut config = match self.config_manager.get_config() {
            Ok(config) => config,
            Err(e) => {
                warn!("Could not load config to save difficulty: {}", e);
                return;
            }
        };
        config.last_difficulty = difficulty;
        match self.config_manager.set_config(&config) {
            Ok(()) => debug!("Saved last difficulty {}", difficulty),
            Err(e) => warn!("Could not save last difficulty: {}", e),
        }
    }

    fn forward_keys(&self, ctx: &egui::Context) {
        for key in pressed_keys(ctx) {
            self.command_sender.send(SessionCommand::Key(key));
        }
    }

    fn render_game(&mut self, ui: &mut egui::Ui, snapshot: &GameSnapshot, now: Instant) {
        let eaten = snapshot.score > self.last_score;
        self.last_score = snapshot.score;

        ui.vertical_centered(|ui| {
            render_status_bar(ui, snapshot);
            ui.add_space(10.0);
            let layout = render_board(ui, snapshot);

            if eaten && let Some(head) = snapshot.head() {
                self.particles.burst(layout.local_center(head), now);
            }
            self.particles.prune(now);
            self.particles
                .paint(ui.painter(), layout.origin, layout.cell_size * 0.12, now);

            if snapshot.state == SessionState::GameOver {
                ui.add_space(20.0);
                render_game_over(ui, snapshot, &self.command_sender);
            } else {
                ui.add_space(10.0);
                ui.label("Arrow keys to steer, P to pause");
            }
        });
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.shared_state.has_context() {
            self.shared_state.set_context(ctx.clone());
        }

        let snapshot = self.shared_state.get_snapshot();
        let now = Instant::now();

        if snapshot.is_in_game() {
            self.forward_keys(ctx);
        }

        egui::CentralPanel::default().show(ctx, |ui| match snapshot.state {
            SessionState::NotStarted => {
                self.last_score = 0;
                if let Some(difficulty) = render_menu(ui, snapshot.high_score, self.last_difficulty) {
                    self.start(difficulty);
                }
            }
            SessionState::Playing | SessionState::Paused | SessionState::GameOver => {
                self.render_game(ui, &snapshot, now);
            }
        });

        if !self.particles.is_empty() {
            ctx.request_repaint_after(PARTICLE_FRAME);
        }
    }
}
