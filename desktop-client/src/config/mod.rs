mod client_config;
mod window_config;

pub(crate) use snake_common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};

pub use client_config::{get_config_manager, high_score_path, ClientConfigManager, Config};
pub use window_config::WindowConfig;
