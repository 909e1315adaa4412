use std::path::PathBuf;

use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::tictactoe::BotKind;
use serde::{Deserialize, Serialize};

use super::SeatConfig;

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";

pub fn get_config_path() -> PathBuf {
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
    ConfigManager::from_yaml_file(path.unwrap_or_else(get_config_path))
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub player_x: SeatConfig,
    #[serde(default)]
    pub player_o: SeatConfig,
    #[serde(default)]
    pub bot_kind: BotKind,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.player_x.validate()?;
        self.player_o.validate()?;
        Ok(())
    }
}
