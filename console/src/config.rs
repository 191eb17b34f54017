use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tictactoe_engine::config::{
    ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};
use tictactoe_engine::logger::LogLevel;

const CONFIG_FILE_NAME: &str = "tictactoe_console.yaml";

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager()
-> ConfigManager<FileContentConfigProvider, GameConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(get_config_path())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayerMode {
    #[default]
    Human,
    Computer,
    Random,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub use_prefix: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SymbolsConfig {
    pub computer: char,
    pub human: char,
}

impl Default for SymbolsConfig {
    fn default() -> Self {
        Self {
            computer: 'X',
            human: 'O',
        }
    }
}

impl Validate for SymbolsConfig {
    fn validate(&self) -> Result<(), String> {
        if self.computer == self.human {
            return Err(format!(
                "Computer and human symbols must differ, both are '{}'",
                self.computer
            ));
        }
        for symbol in [self.computer, self.human] {
            if symbol.is_whitespace() || symbol == '.' {
                return Err(format!("Symbol '{}' cannot be used for a player", symbol));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GameConfig {
    pub first_player: FirstPlayerMode,
    pub show_hints: bool,
    pub logging: LoggingConfig,
    pub symbols: SymbolsConfig,
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        self.symbols.validate()
    }
}

pub fn parse_log_level(value: &str) -> Result<LogLevel, String> {
    match value.to_ascii_lowercase().as_str() {
        "debug" => Ok(LogLevel::Debug),
        "info" => Ok(LogLevel::Info),
        "warn" => Ok(LogLevel::Warn),
        other => Err(format!(
            "Unknown log level '{}', expected debug, info or warn",
            other
        )),
    }
}
