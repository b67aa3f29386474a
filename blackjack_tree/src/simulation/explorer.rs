use crate::{counting, Action, Outcome, SimulationError};

use super::{
    hand::HandState,
    settlement::{dealer_play, settle},
    shoe::CardSource,
};

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The moves the explorer branches on. Splitting is not explored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    Stand,
    Hit,
    Double,
}

impl From<Branch> for Action {
    fn from(branch: Branch) -> Self {
        match branch {
            Branch::Stand => Action::Stand,
            Branch::Hit => Action::Hit,
            Branch::Double => Action::Double,
        }
    }
}

/// Stand and hit are always legal. Double only on the first two cards.
pub fn legal_branches(hand: &HandState) -> Vec<Branch> {
    let mut branches = vec![Branch::Stand, Branch::Hit];
    if hand.can_double() {
        branches.push(Branch::Double);
    }
    branches
}

/// Hi-Lo running and true count over one hand and the dealer's cards, against the
/// given shoe's remaining decks.
pub fn branch_count<S: CardSource>(player: &HandState, dealer: &HandState, shoe: &S) -> (f64, f64) {
    let running_count = counting::update(0.0, player.cards.iter().chain(dealer.cards.iter()));
    (
        running_count,
        counting::true_count(running_count, shoe.decks_remaining()),
    )
}

/// A finished branch: the player's turn is over, the dealer has played and the hand is settled.
#[derive(Debug, Clone)]
pub struct Leaf {
    pub player: HandState,
    pub dealer: HandState,
    pub outcome: Outcome,
    /// Hi-Lo count over the cards revealed in this branch only.
    pub running_count: f64,
    pub true_count: f64,
}

/// A decision point still waiting to be expanded.
#[derive(Debug, Clone)]
pub struct Node<S> {
    hand: HandState,
    shoe: S,
}

impl<S: CardSource> Node<S> {
    pub fn hand(&self) -> &HandState {
        &self.hand
    }

    pub fn shoe(&self) -> &S {
        &self.shoe
    }
}

/// Enumerates every stand/hit/double sequence from a dealt hand.
pub struct Explorer {
    rng: ChaCha8Rng,
    max_leaves: usize,
}

impl Explorer {
    pub fn new(seed: u64, max_leaves: usize) -> Self {
        Explorer {
            rng: ChaCha8Rng::seed_from_u64(seed),
            max_leaves,
        }
    }

    /// Sets up an exploration that can be stepped node by node. The given hands and shoe are
    /// never mutated.
    pub fn begin<S: CardSource>(
        &mut self,
        player: &HandState,
        dealer: &HandState,
        shoe: &S,
    ) -> Result<Exploration<'_, S>, SimulationError> {
        let root = Node {
            hand: player.clone(),
            shoe: shoe.fork(self.rng.gen()),
        };
        let mut exploration = Exploration {
            dealer: dealer.clone(),
            pending: Vec::new(),
            leaves: Vec::new(),
            rng: &mut self.rng,
            max_leaves: self.max_leaves,
        };
        if root.hand.is_bust() {
            exploration.finish(root.hand, root.shoe)?;
        } else {
            exploration.pending.push(root);
        }
        Ok(exploration)
    }

    pub fn explore<S: CardSource>(
        &mut self,
        player: &HandState,
        dealer: &HandState,
        shoe: &S,
    ) -> Result<Vec<Leaf>, SimulationError> {
        let mut exploration = self.begin(player, dealer, shoe)?;
        while exploration.step()? {}
        Ok(exploration.into_leaves())
    }
}

/// Work-stack state of one exploration. Each pending node owns its hand and shoe outright.
pub struct Exploration<'a, S> {
    dealer: HandState,
    pending: Vec<Node<S>>,
    leaves: Vec<Leaf>,
    rng: &'a mut ChaCha8Rng,
    max_leaves: usize,
}

impl<'a, S: CardSource> Exploration<'a, S> {
    pub fn pending(&self) -> &[Node<S>] {
        &self.pending
    }

    pub fn leaves(&self) -> &[Leaf] {
        &self.leaves
    }

    pub fn is_done(&self) -> bool {
        self.pending.is_empty()
    }

    /// Expands one pending node. Returns false once there is nothing left to expand.
    pub fn step(&mut self) -> Result<bool, SimulationError> {
        let node = match self.pending.pop() {
            Some(node) => node,
            None => return Ok(false),
        };

        let mut branches = legal_branches(&node.hand);
        branches.shuffle(&mut *self.rng);
        for branch in branches {
            let mut hand = node.hand.clone();
            let mut shoe = node.shoe.fork(self.rng.gen());
            let turn_over = match branch {
                Branch::Stand => {
                    hand.actions.push(branch.into());
                    true
                }
                Branch::Hit => {
                    hand.receive_card(shoe.draw()?);
                    hand.actions.push(branch.into());
                    hand.is_bust()
                }
                Branch::Double => {
                    hand.double_down(shoe.draw()?);
                    true
                }
            };

            if turn_over {
                self.finish(hand, shoe)?;
            } else {
                self.pending.push(Node { hand, shoe });
            }
        }
        Ok(true)
    }

    pub fn into_leaves(self) -> Vec<Leaf> {
        self.leaves
    }

    fn finish(&mut self, player: HandState, mut shoe: S) -> Result<(), SimulationError> {
        if self.leaves.len() >= self.max_leaves {
            return Err(SimulationError::LeafLimitExceeded {
                limit: self.max_leaves,
            });
        }

        let mut dealer = self.dealer.clone();
        dealer_play(&mut dealer, &mut shoe)?;
        let outcome = settle(player.value(), dealer.value());
        let (running_count, true_count) = branch_count(&player, &dealer, &shoe);

        log::trace!(
            "leaf {:?} player {} dealer {} -> {:?}",
            player.actions,
            player.value(),
            dealer.value(),
            outcome
        );
        self.leaves.push(Leaf {
            player,
            dealer,
            outcome,
            running_count,
            true_count,
        });
        Ok(())
    }
}
