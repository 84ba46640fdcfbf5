use std::thread::JoinHandle;

use snake_common::config::{ConfigError, FileContentConfigProvider};
use snake_common::games::SessionRng;
use snake_common::games::snake::{FieldSize, SnakeSessionSettings};
use snake_common::session::{run_session, SessionCommand, SessionController};
use snake_common::storage::{HighScore, YamlKeyValueStore};
use snake_common::{log, warn};
use tokio::sync::mpsc;

use crate::config::{high_score_path, Config};
use crate::state::{CommandSender, SharedState};

use super::LocalBroadcaster;

pub type LocalController = SessionController<YamlKeyValueStore<FileContentConfigProvider>>;

pub fn build_controller(config: &Config, seed: Option<u64>) -> Result<LocalController, ConfigError> {
    let field_size = FieldSize::from_viewport(config.window.width, config.window.height);
    let settings = SnakeSessionSettings::new(field_size).with_food_placement(config.food_placement);

    let rng = match seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!(
        "Field {}x{}, food placement {:?}, seed {}",
        field_size.rows,
        field_size.cols,
        config.food_placement,
        rng.seed()
    );

    let store = YamlKeyValueStore::from_yaml_file(&high_score_path(config));
    SessionController::new(settings, HighScore::load(store), rng)
}

/// Session actor running on its own thread with a current-thread runtime.
pub struct LocalGame {
    command_sender: CommandSender,
    handle: Option<JoinHandle<()>>,
}

impl LocalGame {
    pub fn spawn(controller: LocalController, shared_state: SharedState) -> std::io::Result<Self> {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()?;

        let broadcaster = LocalBroadcaster::new(shared_state);
        let handle = std::thread::Builder::new()
            .name("snake-session".to_string())
            .spawn(move || {
                runtime.block_on(run_session(controller, command_rx, broadcaster));
            })?;

        Ok(Self {
            command_sender: CommandSender::new(command_tx),
            handle: Some(handle),
        })
    }

    pub fn command_sender(&self) -> CommandSender {
        self.command_sender.clone()
    }

    /// Stops the session and waits for it to persist the high score.
    pub fn shutdown(mut self) {
        self.command_sender.send(SessionCommand::Shutdown);
        if let Some(handle) = self.handle.take()
            && handle.join().is_err()
        {
            warn!("Session thread panicked");
        }
    }
}
