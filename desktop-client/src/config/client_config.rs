use serde::{Deserialize, Serialize};
use snake_common::config::Validate;
use snake_common::games::snake::{Difficulty, FoodPlacement};

use super::{ConfigManager, FileContentConfigProvider, WindowConfig, YamlConfigSerializer};

const CONFIG_FILE_NAME: &str = "snake_client_config.yaml";
const HIGH_SCORE_FILE_NAME: &str = "snake_high_score.yaml";

pub type ClientConfigManager = ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>;

fn path_next_to_executable(file_name: &str) -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(file_name).to_string_lossy().into_owned();
    }
    file_name.to_string()
}

pub fn get_config_manager(path: Option<&str>) -> ClientConfigManager {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(&path_next_to_executable(CONFIG_FILE_NAME)),
    }
}

pub fn high_score_path(config: &Config) -> String {
    config
        .high_score_file
        .clone()
        .unwrap_or_else(|| path_next_to_executable(HIGH_SCORE_FILE_NAME))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub window: WindowConfig,
    #[serde(default)]
    pub last_difficulty: Difficulty,
    #[serde(default)]
    pub food_placement: FoodPlacement,
    #[serde(default)]
    pub high_score_file: Option<String>,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.window.validate()?;
        if let Some(path) = &self.high_score_file
            && path.trim().is_empty()
        {
            return Err("high_score_file must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            last_difficulty: Difficulty::Easy,
            food_placement: FoodPlacement::AvoidSnake,
            high_score_file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snake_common::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        let file_name = format!("temp_snake_client_config_{}.yaml", random_number);
        path.push(file_name);
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized_string = serializer.serialize(&default_config).unwrap();
        let deserialized_config: Config = serializer.deserialize(&serialized_string).unwrap();
        assert_eq!(default_config, deserialized_config);
    }

    #[test]
    fn test_config_saved_through_manager_is_reloaded() {
        let config = Config {
            last_difficulty: Difficulty::Hard,
            food_placement: FoodPlacement::Uniform,
            high_score_file: Some("scores.yaml".to_string()),
            ..Config::default()
        };
        let file_path = get_temp_file_path();
        let manager = get_config_manager(Some(&file_path));

        assert!(manager.set_config(&config).is_ok());

        let reloaded = get_config_manager(Some(&file_path)).get_config().unwrap();
        assert_eq!(config, reloaded);
        assert_eq!(high_score_path(&reloaded), "scores.yaml");

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_optional_fields_fall_back_to_defaults() {
        let file_path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(file_path.clone());
        provider
            .set_config_content("window:\n  width: 500.0\n  height: 600.0\n")
            .unwrap();

        let loaded = get_config_manager(Some(&file_path)).get_config().unwrap();
        assert_eq!(loaded.last_difficulty, Difficulty::Easy);
        assert_eq!(loaded.food_placement, FoodPlacement::AvoidSnake);
        assert_eq!(loaded.high_score_file, None);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_tiny_window_is_rejected() {
        let config = Config {
            window: WindowConfig { width: 100.0, height: 100.0 },
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
