use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SimulationError {
    #[error("number_of_decks must be positive, got {0}")]
    InvalidNumberOfDecks(u8),
    #[error("rounds must be positive, got {0}")]
    InvalidRounds(u32),
    #[error("base_bet must be a positive amount, got {0}")]
    InvalidBaseBet(f64),
    #[error("reshuffle_threshold must be in (0, 1), got {0}")]
    InvalidReshuffleThreshold(f64),
    #[error("max_bet_multiplier must be at least 1")]
    InvalidMaxBetMultiplier,
    #[error("Shoe exhausted after dealing {dealt} cards")]
    ExhaustedShoe { dealt: usize },
    #[error("Exploration exceeded the limit of {limit} leaves in one round")]
    LeafLimitExceeded { limit: usize },
}
