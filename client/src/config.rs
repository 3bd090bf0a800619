use common::MAX_PLAYER_NAME_LEN;
use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::tictactoe::{BoardSize, FirstPlayerMode};
use common::logger::LogLevel;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "totito_client_config.yaml";

fn default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(default_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub player_x_name: String,
    pub player_o_name: String,
    pub board_size: BoardSize,
    #[serde(default)]
    pub first_player: FirstPlayerMode,
    #[serde(default)]
    pub log_level: LogLevel,
}

fn validate_name(field: &str, name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err(format!("{} must not be empty", field));
    }
    if name.chars().count() > MAX_PLAYER_NAME_LEN {
        return Err(format!(
            "{} must not exceed {} characters",
            field, MAX_PLAYER_NAME_LEN
        ));
    }
    Ok(())
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        validate_name("player_x_name", &self.player_x_name)?;
        validate_name("player_o_name", &self.player_o_name)?;
        // board_size is range-checked while deserializing
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            player_x_name: "Player 1".to_string(),
            player_o_name: "Player 2".to_string(),
            board_size: BoardSize::default(),
            first_player: FirstPlayerMode::Random,
            log_level: LogLevel::Info,
        }
    }
}
