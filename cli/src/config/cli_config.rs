use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";
pub const MAX_THINK_DELAY_MS: u64 = 5000;

fn get_default_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager(
    path: Option<&str>,
) -> ConfigManager<FileContentConfigProvider, CliConfig, YamlConfigSerializer> {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(&get_default_config_path()),
    }
}

/// Who places the first mark (X).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayerMode {
    Human,
    Engine,
    Random,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct CliConfig {
    pub first_player: FirstPlayerMode,
    pub think_delay_ms: u64,
    #[serde(default)]
    pub log_prefix: Option<String>,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<(), String> {
        if self.think_delay_ms > MAX_THINK_DELAY_MS {
            return Err(format!(
                "Think delay ({} ms) cannot exceed {} ms",
                self.think_delay_ms, MAX_THINK_DELAY_MS
            ));
        }
        if let Some(prefix) = &self.log_prefix
            && prefix.trim().is_empty()
        {
            return Err("Log prefix must not be blank".to_string());
        }
        Ok(())
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            first_player: FirstPlayerMode::Human,
            think_delay_ms: 400,
            log_prefix: None,
        }
    }
}
