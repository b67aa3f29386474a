mod simulation;

use blackjack_tree::SimulationConfig;
use blackjack_tree_drivers::{parse_config_from_file, resolve_config_path, Config, ConfigError};
use clap::Parser;
use std::process;

const DEFAULT_CONFIG_PATH: &str = "~/.blackjack_tree.yml";

#[derive(Debug, Parser)]
#[command(author, about, long_about = None)]
struct CommandLineArgs {
    /// The path of the config file
    #[arg(short, long, default_value_t = String::from(DEFAULT_CONFIG_PATH))]
    config: String,

    /// Overrides the number of rounds
    #[arg(short, long)]
    rounds: Option<u32>,

    /// Overrides the seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Overrides the strategy used in strategy mode
    #[arg(long)]
    strategy: Option<String>,

    /// Overrides the mode: tree or strategy
    #[arg(short, long)]
    mode: Option<String>,
}

fn load_config(args: &CommandLineArgs) -> Result<Config, ConfigError> {
    let path = resolve_config_path(&args.config, DEFAULT_CONFIG_PATH)?;
    let mut config = parse_config_from_file(&path)?;
    if let Some(rounds) = args.rounds {
        config.simulation.rounds = rounds;
    }
    if args.seed.is_some() {
        config.simulation.seed = args.seed;
    }
    if let Some(strategy) = &args.strategy {
        config.driver.strategy = strategy.clone();
    }
    if let Some(mode) = &args.mode {
        config.driver.mode = mode.clone();
    }
    Ok(config)
}

fn main() {
    env_logger::init();
    let args = CommandLineArgs::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(err) => {
            log::error!("{}", err);
            process::exit(2);
        }
    };
    let driver = config.driver.clone();
    let simulation_config: SimulationConfig = match config.simulation.try_into() {
        Ok(simulation_config) => simulation_config,
        Err(err) => {
            log::error!("invalid config value: {}", err);
            process::exit(2);
        }
    };

    if let Err(err) = simulation::simulate(&simulation_config, &driver) {
        log::error!("{}", err);
        process::exit(1);
    }
}
