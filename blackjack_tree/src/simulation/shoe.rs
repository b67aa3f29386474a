use crate::{Rank, SimulationError};

use strum::IntoEnumIterator;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Anything cards can be drawn from during a round. The explorer forks one per branch.
pub trait CardSource: Sized {
    fn draw(&mut self) -> Result<Rank, SimulationError>;
    fn remaining_count(&self) -> usize;

    /// Produces an independent copy with the same undealt cards in the same
    /// order, using a fresh random source seeded by `seed`.
    fn fork(&self, seed: u64) -> Self;

    fn decks_remaining(&self) -> f64 {
        self.remaining_count() as f64 / 52.0
    }
}

/// Represents a shoe in the real world, holding ranks only.
#[derive(Debug, Clone)]
pub struct Shoe {
    number_of_decks: u8,
    cards: Vec<Rank>,
    current_index: usize,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates a new shoe and shuffles it.
    pub fn new(number_of_decks: u8, seed: u64) -> Shoe {
        let mut shoe = Shoe {
            number_of_decks,
            cards: full_load(number_of_decks),
            current_index: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        shoe.reshuffle();
        shoe
    }

    /// Returns every card into the shoe and shuffles with the shoe's own random source.
    pub fn reshuffle(&mut self) {
        self.cards = full_load(self.number_of_decks);
        self.cards.shuffle(&mut self.rng);
        self.current_index = 0;
    }

    /// Returns every card into the shoe and shuffles. This method makes sure the given first
    /// few ranks will be at the frontmost positions of the shoe. Panics if the requirement
    /// cannot be met.
    pub fn shuffle_with_firsts(&mut self, firsts: &[Rank]) {
        let mut counts = [self.number_of_decks as usize * 4; 13];
        for rank in firsts {
            let count = &mut counts[*rank as usize];
            if *count == 0 {
                panic!("The given first cards are invalid");
            }
            *count -= 1;
        }

        self.cards.clear();
        self.cards.extend_from_slice(firsts);
        for rank in Rank::iter() {
            for _ in 0..counts[rank as usize] {
                self.cards.push(rank);
            }
        }
        self.cards[firsts.len()..].shuffle(&mut self.rng);
        self.current_index = 0;
    }

    pub fn number_of_decks(&self) -> u8 {
        self.number_of_decks
    }

    /// Size of a full load, which is the baseline for the reshuffle policy.
    pub fn full_load(&self) -> usize {
        self.cards.len()
    }

    pub fn dealt(&self) -> usize {
        self.current_index
    }

    /// Checks if the remaining cards fell to the given proportion of a full load.
    pub fn needs_reshuffle(&self, threshold: f64) -> bool {
        self.remaining_count() as f64 <= threshold * self.full_load() as f64
    }

    pub fn preview_next_few_cards(&self, number: usize) -> &[Rank] {
        let end = (self.current_index + number).min(self.cards.len());
        &self.cards[self.current_index..end]
    }
}

impl CardSource for Shoe {
    fn draw(&mut self) -> Result<Rank, SimulationError> {
        match self.cards.get(self.current_index) {
            Some(rank) => {
                self.current_index += 1;
                Ok(*rank)
            }
            None => Err(SimulationError::ExhaustedShoe {
                dealt: self.current_index,
            }),
        }
    }

    fn remaining_count(&self) -> usize {
        self.cards.len() - self.current_index
    }

    fn fork(&self, seed: u64) -> Self {
        Shoe {
            number_of_decks: self.number_of_decks,
            cards: self.cards.clone(),
            current_index: self.current_index,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

fn full_load(number_of_decks: u8) -> Vec<Rank> {
    let mut cards = Vec::with_capacity(number_of_decks as usize * 52);
    for _ in 0..number_of_decks {
        for rank in Rank::iter() {
            for _ in 0..4 {
                cards.push(rank);
            }
        }
    }
    cards
}
