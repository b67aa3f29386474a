use std::io::{self, Write};

use self::private::Statistics;
use blackjack_tree::simulation::{hand::HandState, RoundResult, Simulator, SimulatorEventHandler};
use blackjack_tree::strategy::{strategy_by_name, STRATEGY_NAMES};
use blackjack_tree::{Outcome, SimulationConfig, SimulationError};
use blackjack_tree_drivers::{ConfigDriver, ConfigError, Mode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Simulation(#[from] SimulationError),
    #[error("cannot write record: {0}")]
    Json(#[from] serde_json::Error),
    #[error("cannot write record: {0}")]
    Io(#[from] io::Error),
    #[error("unknown strategy {0:?}, expected one of {1:?}")]
    UnknownStrategy(String, [&'static str; 4]),
}

mod private {
    #[derive(Debug, Clone, Copy, Default)]
    pub struct Statistics {
        current_money: f64,
        total_bet: f64,

        min_money: f64,
    }

    impl Statistics {
        pub fn bet_money(&mut self, money: f64) {
            self.total_bet += money;
            self.current_money -= money;
            if self.min_money > self.current_money {
                self.min_money = self.current_money;
            }
        }

        pub fn receive_money(&mut self, money: f64) {
            self.current_money += money;
        }

        pub fn get_current_money(&self) -> f64 {
            self.current_money
        }

        pub fn get_total_bet(&self) -> f64 {
            self.total_bet
        }

        pub fn get_rate(&self) -> f64 {
            if self.total_bet == 0.0 {
                return 0.0;
            }
            self.current_money / self.total_bet
        }

        pub fn get_min_money(&self) -> f64 {
            self.min_money
        }
    }
}

/// Tallies outcomes and money over the whole run.
#[derive(Debug, Clone, Default)]
struct Handler {
    payout_blackjack: f64,
    rounds: u32,
    reshuffles: u32,
    hands: u64,
    wins: u64,
    losses: u64,
    pushes: u64,
    naturals: u64,
    stat: Statistics,
}

impl SimulatorEventHandler for Handler {
    fn on_reshuffle(&mut self, round_id: u32) {
        log::debug!("reshuffled before round {}", round_id);
        self.reshuffles += 1;
    }

    fn on_deal_cards(&mut self, _: u32, _: &HandState, _: &HandState) {
        self.rounds += 1;
    }

    fn on_record(&mut self, record: &RoundResult) {
        self.hands += 1;
        match record.final_result {
            Outcome::Win => self.wins += 1,
            Outcome::Lose => self.losses += 1,
            Outcome::Push => self.pushes += 1,
        }
        if record.is_natural() {
            self.naturals += 1;
        }

        // Money comes back as stake plus profit, or nothing on a loss.
        self.stat.bet_money(record.bet_amount);
        let profit = record.profit(self.payout_blackjack);
        self.stat.receive_money(record.bet_amount + profit);
    }

    fn on_summary_round(&mut self, round_id: u32, records: &[RoundResult]) {
        log::trace!("round {} produced {} records", round_id, records.len());
    }
}

impl Handler {
    fn print_summary(&self) {
        eprintln!("Rounds: {}. Reshuffles: {}.", self.rounds, self.reshuffles);
        eprintln!(
            "Hands: {}. Wins: {}. Losses: {}. Pushes: {}. Naturals: {}.",
            self.hands, self.wins, self.losses, self.pushes, self.naturals
        );
        eprintln!(
            "Money: {:.2}. Total bet: {:.2}. Rate: {:.2}%. Min money: {:.2}.",
            self.stat.get_current_money(),
            self.stat.get_total_bet(),
            self.stat.get_rate() * 100.0,
            self.stat.get_min_money(),
        );
    }
}

/// Runs the configured simulation and writes one JSON line per record to stdout.
pub fn simulate(config: &SimulationConfig, driver: &ConfigDriver) -> Result<(), RunError> {
    let mode = driver.mode().map_err(ConfigError::from)?;
    let mut simulator = Simulator::new(config)?;
    let mut handler = Handler {
        payout_blackjack: driver.payout_blackjack,
        ..Default::default()
    };

    let results = match mode {
        Mode::Tree => simulator.simulate_rounds(&mut handler)?,
        Mode::Strategy => {
            let mut strategy = strategy_by_name(&driver.strategy, simulator.seed())
                .ok_or_else(|| RunError::UnknownStrategy(driver.strategy.clone(), STRATEGY_NAMES))?;
            simulator.simulate_with_strategy(strategy.as_mut(), &mut handler)?
        }
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for record in &results {
        serde_json::to_writer(&mut out, record)?;
        writeln!(out)?;
    }
    out.flush()?;

    handler.print_summary();
    Ok(())
}
