use blackjack_tree::{BetMode, SimulationConfig};
use serde::{Deserialize, Serialize};
use serde_enum_str::{Deserialize_enum_str, Serialize_enum_str};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE_NAME: &str = ".blackjack_tree.yml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed config file: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid config value: {0}")]
    InvalidValue(#[from] serde::de::value::Error),
    #[error("cannot find home directory")]
    MissingHome,
    #[error("config path {0:?} is not a file")]
    NotAFile(PathBuf),
}

/// How the driver plays each round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_enum_str, Deserialize_enum_str)]
pub enum Mode {
    /// Every stand/hit/double sequence is explored.
    #[serde(rename = "tree")]
    Tree,
    /// One path per round, decided by a named strategy.
    #[serde(rename = "strategy")]
    Strategy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub simulation: ConfigSimulation,
    pub driver: ConfigDriver,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigSimulation {
    pub number_of_decks: u8,
    pub rounds: u32,
    pub base_bet: f64,
    pub bet_mode: String,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_reshuffle_threshold")]
    pub reshuffle_threshold: f64,
    #[serde(default = "default_max_bet_multiplier")]
    pub max_bet_multiplier: u32,
    #[serde(default = "default_max_leaves_per_round")]
    pub max_leaves_per_round: usize,
}

impl TryInto<SimulationConfig> for ConfigSimulation {
    type Error = serde::de::value::Error;

    fn try_into(self) -> Result<SimulationConfig, Self::Error> {
        let bet_mode: BetMode = self.bet_mode.parse()?;
        let simulation_config = SimulationConfig {
            number_of_decks: self.number_of_decks,
            rounds: self.rounds,
            base_bet: self.base_bet,
            bet_mode,
            seed: self.seed,
            reshuffle_threshold: self.reshuffle_threshold,
            max_bet_multiplier: self.max_bet_multiplier,
            max_leaves_per_round: self.max_leaves_per_round,
        };

        Ok(simulation_config)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigDriver {
    pub mode: String,
    #[serde(default = "default_strategy")]
    pub strategy: String,
    #[serde(default = "default_payout_blackjack")]
    pub payout_blackjack: f64,
}

impl ConfigDriver {
    pub fn mode(&self) -> Result<Mode, serde::de::value::Error> {
        self.mode.parse()
    }
}

fn default_reshuffle_threshold() -> f64 {
    0.25
}

fn default_max_bet_multiplier() -> u32 {
    5
}

fn default_max_leaves_per_round() -> usize {
    100_000
}

fn default_strategy() -> String {
    String::from("basic")
}

fn default_payout_blackjack() -> f64 {
    1.5
}

/// Resolves the config path given on the command line. `default_marker` stands for
/// the default file in the home directory.
pub fn resolve_config_path(given: &str, default_marker: &str) -> Result<PathBuf, ConfigError> {
    let path = if given == default_marker {
        home::home_dir()
            .ok_or(ConfigError::MissingHome)?
            .join(DEFAULT_CONFIG_FILE_NAME)
    } else {
        PathBuf::from(given)
    };
    if path.is_dir() {
        return Err(ConfigError::NotAFile(path));
    }
    Ok(path)
}

pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    Ok(serde_yaml::from_str(content)?)
}

/// Reads the content of a given config file and parses it to a Config.
pub fn parse_config_from_file(filename: &PathBuf) -> Result<Config, ConfigError> {
    let file_content = fs::read_to_string(filename)?;
    parse_config(&file_content)
}
