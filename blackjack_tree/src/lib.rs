pub mod counting;
mod error;
pub mod simulation;
pub mod strategy;

use serde_enum_str::{Deserialize_enum_str, Serialize_enum_str};
use strum_macros::EnumIter;

pub use error::SimulationError;

static RANK_TO_BLACKJACK_VALUE: [u8; 13] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 10, 10, 10];

/// A card rank. Suits are not modeled: each deck holds four copies of every rank.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize_enum_str, Deserialize_enum_str,
)]
pub enum Rank {
    #[serde(rename = "A")]
    Ace,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "J")]
    Jack,
    #[serde(rename = "Q")]
    Queen,
    #[serde(rename = "K")]
    King,
}

impl Rank {
    /// Note that this treats Ace as 1.
    pub fn blackjack_value(self) -> u8 {
        RANK_TO_BLACKJACK_VALUE[self as usize]
    }

    pub fn is_ace(self) -> bool {
        self == Rank::Ace
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_enum_str, Deserialize_enum_str)]
pub enum Action {
    #[serde(rename = "hit")]
    Hit,
    #[serde(rename = "stand")]
    Stand,
    #[serde(rename = "double")]
    Double,
    #[serde(rename = "split")]
    Split,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_enum_str, Deserialize_enum_str)]
pub enum Outcome {
    #[serde(rename = "win")]
    Win,
    #[serde(rename = "lose")]
    Lose,
    #[serde(rename = "push")]
    Push,
}

impl Outcome {
    /// Maps a settlement sign (+1, 0, -1) to an outcome.
    pub fn from_sign(sign: i8) -> Outcome {
        match sign.signum() {
            1 => Outcome::Win,
            0 => Outcome::Push,
            _ => Outcome::Lose,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_enum_str, Deserialize_enum_str)]
pub enum BetMode {
    #[serde(rename = "fixed")]
    Fixed,
    #[serde(rename = "count-scaled")]
    CountScaled,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    pub number_of_decks: u8,
    pub rounds: u32,
    pub base_bet: f64,
    pub bet_mode: BetMode,
    pub seed: Option<u64>,
    /// The shoe is reshuffled before a round once the remaining cards fall to
    /// this proportion of the last full load.
    pub reshuffle_threshold: f64,
    pub max_bet_multiplier: u32,
    /// Guard against runaway exploration. Exceeding it aborts the run.
    pub max_leaves_per_round: usize,
}

impl SimulationConfig {
    pub fn new(number_of_decks: u8, rounds: u32, base_bet: f64, bet_mode: BetMode) -> Self {
        SimulationConfig {
            number_of_decks,
            rounds,
            base_bet,
            bet_mode,
            seed: None,
            reshuffle_threshold: 0.25,
            max_bet_multiplier: 5,
            max_leaves_per_round: 100_000,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.number_of_decks == 0 {
            return Err(SimulationError::InvalidNumberOfDecks(self.number_of_decks));
        }
        if self.rounds == 0 {
            return Err(SimulationError::InvalidRounds(self.rounds));
        }
        if !(self.base_bet > 0.0 && self.base_bet.is_finite()) {
            return Err(SimulationError::InvalidBaseBet(self.base_bet));
        }
        if !(self.reshuffle_threshold > 0.0 && self.reshuffle_threshold < 1.0) {
            return Err(SimulationError::InvalidReshuffleThreshold(
                self.reshuffle_threshold,
            ));
        }
        if self.max_bet_multiplier == 0 {
            return Err(SimulationError::InvalidMaxBetMultiplier);
        }
        Ok(())
    }
}
