mod config;
mod offline;
mod state;
mod ui;

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use snake_common::{log, logger, warn};

use crate::config::{get_config_manager, Config};
use crate::offline::{build_controller, LocalGame};
use crate::state::SharedState;
use crate::ui::SnakeApp;

#[derive(Parser, Debug)]
#[command(name = "snake_desktop", version, about = "Classic single-player Snake")]
struct Args {
    /// Path to the client config file
    #[arg(long)]
    config: Option<String>,

    /// Seed for food placement, random when omitted
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = false)]
    use_log_prefix: bool,

    #[arg(long, short, default_value_t = false)]
    verbose: bool,
}

fn load_config(args: &Args) -> (Config, config::ClientConfigManager) {
    let config_manager = get_config_manager(args.config.as_deref());
    let config = match config_manager.get_config() {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load config, using defaults: {}", e);
            Config::default()
        }
    };
    (config, config_manager)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let prefix = args.use_log_prefix.then(|| "snake".to_string());
    logger::init_logger(prefix, args.verbose);

    let (config, config_manager) = load_config(&args);

    let controller = build_controller(&config, args.seed).context("Failed to set up the game session")?;
    let shared_state = SharedState::new(controller.snapshot());
    let game = LocalGame::spawn(controller, shared_state.clone()).context("Failed to start the game session")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title("Snake"),
        ..Default::default()
    };

    let app = SnakeApp::new(
        shared_state,
        game.command_sender(),
        config_manager,
        config.last_difficulty,
    );
    let result = eframe::run_native("Snake", options, Box::new(|_cc| Ok(Box::new(app))));

    game.shutdown();
    log!("Window closed");

    result.map_err(|e| anyhow::anyhow!("UI error: {}", e))
}
