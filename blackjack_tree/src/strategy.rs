use crate::{simulation::hand::HandState, Action, Rank};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A decision policy for the single-path simulation.
pub trait Strategy {
    fn name(&self) -> &str;
    fn make_decision(&mut self, hand: &HandState, dealer_up_card: Rank) -> Action;
}

/// Resolves a policy by its label.
pub fn strategy_by_name(name: &str, seed: u64) -> Option<Box<dyn Strategy>> {
    match name {
        "simplest" => Some(Box::new(SimplestStrategy)),
        "random" => Some(Box::new(RandomStrategy::new(seed))),
        "basic" => Some(Box::new(BasicStrategy::new())),
        "basic_no_split" => Some(Box::new(BasicStrategy::without_split())),
        _ => None,
    }
}

pub const STRATEGY_NAMES: [&str; 4] = ["simplest", "random", "basic", "basic_no_split"];

/// Hits below 17, otherwise stands.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimplestStrategy;

impl Strategy for SimplestStrategy {
    fn name(&self) -> &str {
        "simplest"
    }

    fn make_decision(&mut self, hand: &HandState, _: Rank) -> Action {
        if hand.value() < 17 {
            Action::Hit
        } else {
            Action::Stand
        }
    }
}

/// Hits or stands with equal probability.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: ChaCha8Rng,
}

impl RandomStrategy {
    pub fn new(seed: u64) -> Self {
        RandomStrategy {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> &str {
        "random"
    }

    fn make_decision(&mut self, _: &HandState, _: Rank) -> Action {
        if self.rng.gen_bool(0.5) {
            Action::Hit
        } else {
            Action::Stand
        }
    }
}

/// (preferred, fallback when doubling is not allowed)
type Cell = (Action, Action);

pub struct BasicStrategy {
    allow_split: bool,
    hard_charts: [[Cell; 10]; 14],
    soft_charts: [[Cell; 10]; 9],
    pair_charts: [[Cell; 10]; 10],
}

impl Default for BasicStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl BasicStrategy {
    pub fn new() -> BasicStrategy {
        const H: Cell = (Action::Hit, Action::Hit);
        const S: Cell = (Action::Stand, Action::Stand);
        const P: Cell = (Action::Split, Action::Split);
        const DH: Cell = (Action::Double, Action::Hit);
        const DS: Cell = (Action::Double, Action::Stand);

        // Columns are the dealer up card: A, 2, 3, ..., 10.
        BasicStrategy {
            allow_split: true,
            hard_charts: [
                [H, H, H, H, H, H, H, H, H, H], // 5
                [H, H, H, H, H, H, H, H, H, H],
                [H, H, H, H, H, H, H, H, H, H],
                [H, H, H, H, H, H, H, H, H, H],
                [H, H, DH, DH, DH, DH, H, H, H, H],
                [H, DH, DH, DH, DH, DH, DH, DH, DH, H],
                [DH, DH, DH, DH, DH, DH, DH, DH, DH, DH],
                [H, H, H, S, S, S, H, H, H, H],
                [H, S, S, S, S, S, H, H, H, H],
                [H, S, S, S, S, S, H, H, H, H],
                [H, S, S, S, S, S, H, H, H, H],
                [H, S, S, S, S, S, H, H, H, H],
                [S, S, S, S, S, S, S, S, S, S], // 17
                [S, S, S, S, S, S, S, S, S, S], // 18, 18+
            ],
            soft_charts: [
                [H, H, H, H, DH, DH, H, H, H, H], // Ace + 2
                [H, H, H, H, DH, DH, H, H, H, H],
                [H, H, H, DH, DH, DH, H, H, H, H],
                [H, H, H, DH, DH, DH, H, H, H, H],
                [H, H, DH, DH, DH, DH, H, H, H, H],
                [H, DS, DS, DS, DS, DS, S, S, H, H],
                [S, S, S, S, S, DS, S, S, S, S],
                [S, S, S, S, S, S, S, S, S, S], // Ace + 9
                [S, S, S, S, S, S, S, S, S, S], // Ace + 10
            ],
            pair_charts: [
                [P, P, P, P, P, P, P, P, P, P], // Double Ace
                [H, P, P, P, P, P, P, H, H, H], // Double 2
                [H, P, P, P, P, P, P, H, H, H],
                [H, H, H, H, P, P, H, H, H, H],
                [H, DH, DH, DH, DH, DH, DH, DH, DH, H],
                [H, P, P, P, P, P, H, H, H, H],
                [H, P, P, P, P, P, P, H, H, H],
                [P, P, P, P, P, P, P, P, P, P],
                [S, P, P, P, P, P, S, P, P, S],
                [S, S, S, S, S, S, S, S, S, S], // Double 10
            ],
        }
    }

    /// Same charts, but pairs are played as ordinary totals.
    pub fn without_split() -> BasicStrategy {
        BasicStrategy {
            allow_split: false,
            ..Self::new()
        }
    }

    fn lookup(&self, hand: &HandState, col: usize) -> Cell {
        if self.allow_split && hand.can_split() {
            let row = (hand.cards[0].blackjack_value() - 1) as usize;
            return self.pair_charts[row][col];
        }

        if hand.is_soft() {
            let hard_sum: u16 = hand.cards.iter().map(|r| r.blackjack_value() as u16).sum();
            // The other cards besides the Ace counted as 11.
            let rest = hard_sum - 1;
            let row = (rest.saturating_sub(2) as usize).min(8);
            self.soft_charts[row][col]
        } else {
            let row = (hand.value().clamp(5, 18) - 5) as usize;
            self.hard_charts[row][col]
        }
    }
}

impl Strategy for BasicStrategy {
    fn name(&self) -> &str {
        if self.allow_split {
            "basic"
        } else {
            "basic_no_split"
        }
    }

    fn make_decision(&mut self, hand: &HandState, dealer_up_card: Rank) -> Action {
        let col = (dealer_up_card.blackjack_value() - 1) as usize;
        let decision = self.lookup(hand, col);
        match decision.0 {
            Action::Double if !hand.can_double() => decision.1,
            _ => decision.0,
        }
    }
}
