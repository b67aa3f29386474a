//! Hi-Lo card counting.

use crate::Rank;

/// Floor for the remaining-decks estimate so an almost empty shoe never
/// divides by zero.
pub const MIN_DECKS_REMAINING: f64 = 0.0001;

/// Hi-Lo weight: +1 for 2-6, 0 for 7-9, -1 for tens and Aces.
pub fn rank_weight(rank: Rank) -> i8 {
    match rank {
        Rank::Two | Rank::Three | Rank::Four | Rank::Five | Rank::Six => 1,
        Rank::Seven | Rank::Eight | Rank::Nine => 0,
        Rank::Ten | Rank::Jack | Rank::Queen | Rank::King | Rank::Ace => -1,
    }
}

pub fn update<'a, I>(running_count: f64, revealed: I) -> f64
where
    I: IntoIterator<Item = &'a Rank>,
{
    running_count
        + revealed
            .into_iter()
            .map(|rank| rank_weight(*rank) as f64)
            .sum::<f64>()
}

pub fn true_count(running_count: f64, decks_remaining: f64) -> f64 {
    running_count / decks_remaining.max(MIN_DECKS_REMAINING)
}

/// Bet ramp: base for a non-positive true count, otherwise
/// `base * min(max_mult, 1 + floor(tc))`.
pub fn bet_from_true_count(true_count: f64, base: f64, max_mult: u32) -> f64 {
    if true_count <= 0.0 {
        return base;
    }
    let mult = (1.0 + true_count.floor()).min(max_mult as f64);
    base * mult
}

/// Rounds to 3 decimals, the precision records are reported with.
pub fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

/// Cross-round counting state of one simulation run. Reset on every reshuffle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CountingState {
    running_count: f64,
    true_count: f64,
}

impl CountingState {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn reset(&mut self) {
        self.running_count = 0.0;
        self.true_count = 0.0;
    }

    /// Folds the revealed ranks into the running count and recomputes the
    /// true count against the given remaining-decks estimate.
    pub fn advance<'a, I>(&mut self, revealed: I, decks_remaining: f64)
    where
        I: IntoIterator<Item = &'a Rank>,
    {
        self.running_count = update(self.running_count, revealed);
        self.true_count = true_count(self.running_count, decks_remaining);
    }

    pub fn running_count(&self) -> f64 {
        self.running_count
    }

    pub fn true_count(&self) -> f64 {
        self.true_count
    }
}
