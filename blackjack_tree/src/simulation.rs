pub mod explorer;
pub mod hand;
pub mod settlement;
pub mod shoe;

use crate::{
    counting::{self, round3, CountingState},
    strategy::Strategy,
    Action, BetMode, Outcome, Rank, SimulationConfig, SimulationError,
};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use self::{
    explorer::{branch_count, Explorer},
    hand::HandState,
    settlement::{dealer_play, settle, settle_naturals},
    shoe::{CardSource, Shoe},
};

/// Policy label carried by records produced by the exhaustive explorer.
pub const EXPLORER_LABEL: &str = "exhaustive";

/// One settled player hand. In tree mode there is one per explored leaf.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundResult {
    pub round_id: u32,
    pub hand_number: u32,
    pub player_cards: Vec<Rank>,
    pub dealer_cards: Vec<Rank>,
    pub actions: Vec<Action>,
    /// Includes doubling.
    pub bet_amount: f64,
    pub final_result: Outcome,
    pub blackjack: bool,
    pub busted: bool,
    pub strategy_used: String,
    pub bet_mode: BetMode,
    pub true_count_prev_round: f64,
    /// Cross-round count after this round, as used for the next bet.
    pub running_count_end: f64,
    pub true_count_end: f64,
    /// Count over this hand's and the dealer's cards only.
    pub branch_running_count: f64,
    pub branch_true_count: f64,
    /// State of the dealing shoe after the round.
    pub cards_remaining: usize,
    pub decks_remaining: f64,
}

impl RoundResult {
    /// A natural is a blackjack that did not come from a split.
    pub fn is_natural(&self) -> bool {
        self.blackjack && !self.actions.contains(&Action::Split)
    }

    /// Net money won on this hand.
    pub fn profit(&self, payout_blackjack: f64) -> f64 {
        match self.final_result {
            Outcome::Win if self.is_natural() => self.bet_amount * payout_blackjack,
            Outcome::Win => self.bet_amount,
            Outcome::Push => 0.0,
            Outcome::Lose => -self.bet_amount,
        }
    }
}

pub trait SimulatorEventHandler {
    fn on_reshuffle(&mut self, round_id: u32);
    fn on_deal_cards(&mut self, round_id: u32, player: &HandState, dealer: &HandState);
    fn on_record(&mut self, record: &RoundResult);
    fn on_summary_round(&mut self, round_id: u32, records: &[RoundResult]);
}

impl SimulatorEventHandler for () {
    fn on_reshuffle(&mut self, _: u32) {}
    fn on_deal_cards(&mut self, _: u32, _: &HandState, _: &HandState) {}
    fn on_record(&mut self, _: &RoundResult) {}
    fn on_summary_round(&mut self, _: u32, _: &[RoundResult]) {}
}

/// Per-round values stamped on every record of the round.
struct RoundContext<'a> {
    round_id: u32,
    strategy_used: &'a str,
    bet_mode: BetMode,
    true_count_prev: f64,
}

impl<'a> RoundContext<'a> {
    fn record(
        &self,
        hand_number: u32,
        player: &HandState,
        dealer: &HandState,
        outcome: Outcome,
        (branch_running_count, branch_true_count): (f64, f64),
    ) -> RoundResult {
        RoundResult {
            round_id: self.round_id,
            hand_number,
            player_cards: player.cards.clone(),
            dealer_cards: dealer.cards.clone(),
            actions: player.actions.clone(),
            bet_amount: player.bet,
            final_result: outcome,
            blackjack: player.is_blackjack(),
            busted: player.is_bust(),
            strategy_used: String::from(self.strategy_used),
            bet_mode: self.bet_mode,
            true_count_prev_round: round3(self.true_count_prev),
            running_count_end: 0.0,
            true_count_end: 0.0,
            branch_running_count: round3(branch_running_count),
            branch_true_count: round3(branch_true_count),
            cards_remaining: 0,
            decks_remaining: 0.0,
        }
    }
}

/// Runs rounds against one shared dealing shoe, carrying the Hi-Lo count between rounds.
pub struct Simulator {
    config: SimulationConfig,
    seed: u64,
    shoe: Shoe,
    explorer: Explorer,
    counting: CountingState,
}

impl Simulator {
    /// Validates the config before any simulation state is created.
    pub fn new(config: &SimulationConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
        let mut seeder = ChaCha8Rng::seed_from_u64(seed);
        let shoe = Shoe::new(config.number_of_decks, seeder.gen());
        let explorer = Explorer::new(seeder.gen(), config.max_leaves_per_round);
        Ok(Self {
            config: *config,
            seed,
            shoe,
            explorer,
            counting: CountingState::new(),
        })
    }

    /// Replaces the dealing shoe, e.g. with one prepared by `Shoe::shuffle_with_firsts`.
    pub fn with_shoe(mut self, shoe: Shoe) -> Self {
        self.shoe = shoe;
        self
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    pub fn counting(&self) -> &CountingState {
        &self.counting
    }

    /// Plays every round by exhaustively exploring stand/hit/double from the dealt hand.
    /// Only the four dealt cards of each round advance the cross-round count.
    pub fn simulate_rounds<U: SimulatorEventHandler>(
        &mut self,
        handler: &mut U,
    ) -> Result<Vec<RoundResult>, SimulationError> {
        self.log_start(EXPLORER_LABEL);
        let mut results = Vec::new();
        for round_id in 1..=self.config.rounds {
            let bet = self.begin_round(round_id, handler);
            let (player, dealer) = self.deal(bet)?;
            handler.on_deal_cards(round_id, &player, &dealer);
            let ctx = self.round_context(round_id, EXPLORER_LABEL);

            let mut records = match self.natural_record(&ctx, &player, &dealer) {
                Some(record) => vec![record],
                None => self
                    .explorer
                    .explore(&player, &dealer, &self.shoe)?
                    .iter()
                    .enumerate()
                    .map(|(i, leaf)| {
                        ctx.record(
                            i as u32 + 1,
                            &leaf.player,
                            &leaf.dealer,
                            leaf.outcome,
                            (leaf.running_count, leaf.true_count),
                        )
                    })
                    .collect(),
            };

            let initial: Vec<Rank> =
                player.cards.iter().chain(dealer.cards.iter()).copied().collect();
            self.end_round(round_id, &initial, &mut records, handler);
            results.append(&mut records);
        }
        self.log_finish(results.len());
        Ok(results)
    }

    /// Plays a single path per round, asking the strategy for every decision. Splits are
    /// supported. An ineligible double or split is treated as a stand. Every revealed card
    /// advances the cross-round count.
    pub fn simulate_with_strategy<T, U>(
        &mut self,
        strategy: &mut T,
        handler: &mut U,
    ) -> Result<Vec<RoundResult>, SimulationError>
    where
        T: Strategy + ?Sized,
        U: SimulatorEventHandler,
    {
        let name = String::from(strategy.name());
        self.log_start(&name);
        let mut results = Vec::new();
        for round_id in 1..=self.config.rounds {
            let bet = self.begin_round(round_id, handler);
            let (player, mut dealer) = self.deal(bet)?;
            handler.on_deal_cards(round_id, &player, &dealer);
            let ctx = self.round_context(round_id, &name);
            let mut revealed: Vec<Rank> =
                player.cards.iter().chain(dealer.cards.iter()).copied().collect();

            let mut records = match self.natural_record(&ctx, &player, &dealer) {
                Some(record) => vec![record],
                None => {
                    let up_card = dealer.cards[0];
                    let hands = self.play_hands(player, up_card, strategy, &mut revealed)?;
                    dealer_play(&mut dealer, &mut self.shoe)?;
                    revealed.extend_from_slice(&dealer.cards[2..]);
                    hands
                        .iter()
                        .enumerate()
                        .map(|(i, hand)| {
                            let outcome = settle(hand.value(), dealer.value());
                            let count = branch_count(hand, &dealer, &self.shoe);
                            ctx.record(i as u32 + 1, hand, &dealer, outcome, count)
                        })
                        .collect()
                }
            };

            self.end_round(round_id, &revealed, &mut records, handler);
            results.append(&mut records);
        }
        self.log_finish(results.len());
        Ok(results)
    }

    fn play_hands<T: Strategy + ?Sized>(
        &mut self,
        player: HandState,
        up_card: Rank,
        strategy: &mut T,
        revealed: &mut Vec<Rank>,
    ) -> Result<Vec<HandState>, SimulationError> {
        let mut hands = vec![player];
        let mut hand_index = 0;
        while hand_index < hands.len() {
            loop {
                let current = &mut hands[hand_index];
                match strategy.make_decision(current, up_card) {
                    Action::Hit => {
                        let card = self.shoe.draw()?;
                        revealed.push(card);
                        current.receive_card(card);
                        current.actions.push(Action::Hit);
                        if current.is_bust() {
                            break;
                        }
                    }
                    Action::Stand => {
                        current.actions.push(Action::Stand);
                        break;
                    }
                    Action::Double if current.can_double() => {
                        let card = self.shoe.draw()?;
                        revealed.push(card);
                        current.double_down(card);
                        break;
                    }
                    Action::Split if current.can_split() => {
                        let bet = current.bet;
                        let (left_card, right_card) = (current.cards[0], current.cards[1]);
                        let mut left = HandState::with_cards(&[left_card], bet);
                        let mut right = HandState::with_cards(&[right_card], bet);
                        for hand in [&mut left, &mut right] {
                            let card = self.shoe.draw()?;
                            revealed.push(card);
                            hand.actions.push(Action::Split);
                            hand.receive_card(card);
                        }
                        hands.remove(hand_index);
                        hands.insert(hand_index, right);
                        hands.insert(hand_index, left);
                        // The left hand now sits at hand_index and is played next.
                    }
                    Action::Double | Action::Split => {
                        current.actions.push(Action::Stand);
                        break;
                    }
                }
            }
            hand_index += 1;
        }
        Ok(hands)
    }

    /// Reshuffles when needed and returns this round's bet.
    fn begin_round<U: SimulatorEventHandler>(&mut self, round_id: u32, handler: &mut U) -> f64 {
        if self.shoe.needs_reshuffle(self.config.reshuffle_threshold) {
            log::debug!(
                "round {}: reshuffling with {} cards left",
                round_id,
                self.shoe.remaining_count()
            );
            self.shoe.reshuffle();
            self.counting.reset();
            handler.on_reshuffle(round_id);
        }

        match self.config.bet_mode {
            BetMode::Fixed => self.config.base_bet,
            BetMode::CountScaled => counting::bet_from_true_count(
                self.counting.true_count(),
                self.config.base_bet,
                self.config.max_bet_multiplier,
            ),
        }
    }

    fn deal(&mut self, bet: f64) -> Result<(HandState, HandState), SimulationError> {
        let mut player = HandState::new(bet);
        let mut dealer = HandState::new(0.0);
        player.receive_card(self.shoe.draw()?);
        player.receive_card(self.shoe.draw()?);
        dealer.receive_card(self.shoe.draw()?);
        dealer.receive_card(self.shoe.draw()?);
        Ok((player, dealer))
    }

    fn round_context<'a>(&self, round_id: u32, strategy_used: &'a str) -> RoundContext<'a> {
        RoundContext {
            round_id,
            strategy_used,
            bet_mode: self.config.bet_mode,
            true_count_prev: self.counting.true_count(),
        }
    }

    /// A dealer natural ends the round with an empty action log. A player natural wins
    /// with a single stand.
    fn natural_record(
        &self,
        ctx: &RoundContext,
        player: &HandState,
        dealer: &HandState,
    ) -> Option<RoundResult> {
        let outcome = settle_naturals(player, dealer)?;
        let mut player = player.clone();
        if !dealer.is_blackjack() {
            player.actions.push(Action::Stand);
        }
        let count = branch_count(&player, dealer, &self.shoe);
        Some(ctx.record(1, &player, dealer, outcome, count))
    }

    /// Advances the cross-round count and backfills it into the round's records.
    fn end_round<U: SimulatorEventHandler>(
        &mut self,
        round_id: u32,
        revealed: &[Rank],
        records: &mut [RoundResult],
        handler: &mut U,
    ) {
        self.counting.advance(revealed, self.shoe.decks_remaining());
        for record in records.iter_mut() {
            record.running_count_end = round3(self.counting.running_count());
            record.true_count_end = round3(self.counting.true_count());
            record.cards_remaining = self.shoe.remaining_count();
            record.decks_remaining = round3(self.shoe.decks_remaining());
            handler.on_record(record);
        }
        log::debug!(
            "round {}: {} records, running count {:.3}, true count {:.3}",
            round_id,
            records.len(),
            self.counting.running_count(),
            self.counting.true_count()
        );
        handler.on_summary_round(round_id, records);
    }

    fn log_start(&self, strategy_used: &str) {
        log::info!(
            "simulating {} rounds with {} decks, {:?} betting, policy {} (seed {})",
            self.config.rounds,
            self.config.number_of_decks,
            self.config.bet_mode,
            strategy_used,
            self.seed
        );
    }

    fn log_finish(&self, records: usize) {
        log::info!(
            "finished {} rounds, {} records, {} cards left in shoe",
            self.config.rounds,
            records,
            self.shoe.remaining_count()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{BasicStrategy, SimplestStrategy};
    use crate::Rank::*;

    fn config(number_of_decks: u8, rounds: u32, bet_mode: BetMode) -> SimulationConfig {
        SimulationConfig::new(number_of_decks, rounds, 10.0, bet_mode).with_seed(42)
    }

    fn stacked_simulator(config: &SimulationConfig, firsts: &[Rank]) -> Simulator {
        let mut shoe = Shoe::new(config.number_of_decks, 42);
        shoe.shuffle_with_firsts(firsts);
        Simulator::new(config).unwrap().with_shoe(shoe)
    }

    #[derive(Default)]
    struct Recorder {
        reshuffles: Vec<u32>,
        dealt: u32,
        records: usize,
        rounds: Vec<(u32, usize)>,
    }

    impl SimulatorEventHandler for Recorder {
        fn on_reshuffle(&mut self, round_id: u32) {
            self.reshuffles.push(round_id);
        }

        fn on_deal_cards(&mut self, _: u32, player: &HandState, dealer: &HandState) {
            assert_eq!(player.cards.len(), 2);
            assert_eq!(dealer.cards.len(), 2);
            self.dealt += 1;
        }

        fn on_record(&mut self, _: &RoundResult) {
            self.records += 1;
        }

        fn on_summary_round(&mut self, round_id: u32, records: &[RoundResult]) {
            self.rounds.push((round_id, records.len()));
        }
    }

    /// Replays a fixed list of decisions, then stands.
    struct Scripted {
        decisions: Vec<Action>,
    }

    impl Strategy for Scripted {
        fn name(&self) -> &str {
            "scripted"
        }

        fn make_decision(&mut self, _: &HandState, _: Rank) -> Action {
            if self.decisions.is_empty() {
                Action::Stand
            } else {
                self.decisions.remove(0)
            }
        }
    }

    #[test]
    fn rejects_invalid_config_before_dealing() {
        let mut bad = config(0, 1, BetMode::Fixed);
        assert!(matches!(
            Simulator::new(&bad),
            Err(SimulationError::InvalidNumberOfDecks(0))
        ));
        bad = config(6, 0, BetMode::Fixed);
        assert!(Simulator::new(&bad).is_err());
        bad = config(6, 1, BetMode::Fixed);
        bad.base_bet = 0.0;
        assert!(Simulator::new(&bad).is_err());
    }

    #[test]
    fn dealer_natural_loses_without_actions() {
        let config = config(6, 1, BetMode::Fixed);
        let mut simulator = stacked_simulator(&config, &[Nine, Seven, Ace, King]);
        let results = simulator.simulate_rounds(&mut ()).unwrap();

        assert_eq!(results.len(), 1);
        let record = &results[0];
        assert_eq!(record.final_result, Outcome::Lose);
        assert_eq!(record.bet_amount, 10.0);
        assert!(record.actions.is_empty());
        assert!(!record.blackjack);
        assert!(!record.busted);
        assert_eq!(record.dealer_cards, vec![Ace, King]);
        assert_eq!(record.cards_remaining, 6 * 52 - 4);
    }

    #[test]
    fn both_naturals_push() {
        let config = config(6, 1, BetMode::Fixed);
        let mut simulator = stacked_simulator(&config, &[Ace, Queen, King, Ace]);
        let results = simulator.simulate_rounds(&mut ()).unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].final_result, Outcome::Push);
        assert!(results[0].blackjack);
        assert!(results[0].actions.is_empty());
    }

    #[test]
    fn player_natural_wins_with_single_stand() {
        let config = config(6, 1, BetMode::Fixed);
        let mut simulator = stacked_simulator(&config, &[Ace, Jack, Ten, Seven]);
        let results = simulator.simulate_rounds(&mut ()).unwrap();

        assert_eq!(results.len(), 1);
        let record = &results[0];
        assert_eq!(record.final_result, Outcome::Win);
        assert_eq!(record.actions, vec![Action::Stand]);
        assert!(record.blackjack);
        assert_eq!(record.profit(1.5), 15.0);
    }

    #[test]
    fn pair_of_eights_against_ten_bets_base_or_double() {
        let config = config(6, 1, BetMode::Fixed);
        let mut simulator = stacked_simulator(&config, &[Eight, Eight, Ten, Seven]);
        let results = simulator.simulate_rounds(&mut ()).unwrap();

        assert!(results.len() >= 3);
        assert!(results.iter().any(|r| r.actions == vec![Action::Stand]));
        assert!(results.iter().any(|r| r.actions == vec![Action::Double]));
        for (i, record) in results.iter().enumerate() {
            assert_eq!(record.round_id, 1);
            assert_eq!(record.hand_number, i as u32 + 1);
            assert_eq!(&record.player_cards[..2], &[Eight, Eight]);
            assert_eq!(&record.dealer_cards[..2], &[Ten, Seven]);
            assert!(!record.actions.contains(&Action::Split));
            if record.actions.contains(&Action::Double) {
                assert_eq!(record.bet_amount, 20.0);
                assert_eq!(record.player_cards.len(), 3);
            } else {
                assert_eq!(record.bet_amount, 10.0);
            }
            assert_eq!(record.strategy_used, EXPLORER_LABEL);
        }
    }

    #[test]
    fn cross_round_count_uses_dealt_cards_only() {
        let config = config(6, 1, BetMode::Fixed);
        let mut simulator = stacked_simulator(&config, &[Eight, Eight, Ten, Seven]);
        let results = simulator.simulate_rounds(&mut ()).unwrap();

        // 8, 8, 7 are neutral and the 10 counts -1, whatever the branches drew.
        for record in &results {
            assert_eq!(record.running_count_end, -1.0);
            assert_eq!(record.true_count_end, round3(-1.0 / (308.0 / 52.0)));
            assert_eq!(record.cards_remaining, 308);
            assert_eq!(record.true_count_prev_round, 0.0);
        }
        assert_eq!(simulator.shoe().remaining_count(), 308);
    }

    #[test]
    fn cross_round_count_accumulates_over_rounds() {
        let config = config(6, 8, BetMode::Fixed);
        let mut simulator = Simulator::new(&config).unwrap();
        let results = simulator.simulate_rounds(&mut ()).unwrap();

        let mut expected = 0.0;
        let mut last_round = 0;
        for record in &results {
            if record.round_id != last_round {
                last_round = record.round_id;
                let dealt = record.player_cards[..2]
                    .iter()
                    .chain(record.dealer_cards[..2].iter());
                expected = counting::update(expected, dealt);
            }
            assert_eq!(record.running_count_end, expected);
        }
        assert_eq!(last_round, 8);
        assert_eq!(simulator.shoe().remaining_count(), 6 * 52 - 8 * 4);
    }

    #[test]
    fn reshuffles_at_a_quarter_of_the_load() {
        let config = config(2, 22, BetMode::Fixed);
        let mut simulator = Simulator::new(&config).unwrap();
        let mut recorder = Recorder::default();
        let results = simulator.simulate_rounds(&mut recorder).unwrap();

        // 104 cards, 4 dealt per round: 24 left after round 20.
        assert_eq!(recorder.reshuffles, vec![21]);
        assert_eq!(recorder.dealt, 22);
        assert_eq!(recorder.records, results.len());
        assert_eq!(recorder.rounds.len(), 22);
        for record in results.iter().filter(|r| r.round_id == 21) {
            assert_eq!(record.true_count_prev_round, 0.0);
            assert_eq!(record.cards_remaining, 100);
        }
    }

    #[test]
    fn count_scaled_bets_follow_previous_true_count() {
        let config = config(2, 12, BetMode::CountScaled);
        let mut simulator = Simulator::new(&config).unwrap();
        let results = simulator.simulate_rounds(&mut ()).unwrap();

        let mut previous_end: Option<f64> = None;
        let mut last_round = 0;
        for record in &results {
            assert_eq!(record.bet_mode, BetMode::CountScaled);
            let base = if record.actions.contains(&Action::Double) {
                record.bet_amount / 2.0
            } else {
                record.bet_amount
            };
            assert!([10.0, 20.0, 30.0, 40.0, 50.0].contains(&base));
            if record.round_id == 1 {
                assert_eq!(base, 10.0);
            }
            if record.round_id != last_round {
                if let Some(end) = previous_end {
                    assert_eq!(record.true_count_prev_round, end);
                }
                last_round = record.round_id;
            }
            previous_end = Some(record.true_count_end);
        }
        assert_eq!(last_round, 12);
    }

    #[test]
    fn same_seed_same_results() {
        let config = config(4, 5, BetMode::CountScaled);
        let a = Simulator::new(&config)
            .unwrap()
            .simulate_rounds(&mut ())
            .unwrap();
        let b = Simulator::new(&config)
            .unwrap()
            .simulate_rounds(&mut ())
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn single_path_counts_every_revealed_card() {
        let config = config(6, 1, BetMode::Fixed);
        let mut simulator = stacked_simulator(&config, &[Ten, Two, Ten, Six, Three, Four, Five]);
        let results = simulator
            .simulate_with_strategy(&mut SimplestStrategy, &mut ())
            .unwrap();

        assert_eq!(results.len(), 1);
        let record = &results[0];
        // 12 -> 15 -> 19, stand. Dealer 16 -> 21.
        assert_eq!(record.player_cards, vec![Ten, Two, Three, Four]);
        assert_eq!(record.actions, vec![Action::Hit, Action::Hit, Action::Stand]);
        assert_eq!(record.dealer_cards, vec![Ten, Six, Five]);
        assert_eq!(record.final_result, Outcome::Lose);
        assert_eq!(record.strategy_used, "simplest");
        // -1 +1 -1 +1 +1 +1 +1
        assert_eq!(record.running_count_end, 3.0);
        assert_eq!(record.cards_remaining, 6 * 52 - 7);
    }

    #[test]
    fn single_path_splits_into_two_hands() {
        let config = config(6, 1, BetMode::Fixed);
        let firsts = [Eight, Eight, Ten, Seven, Three, Two, Nine, Nine];
        let mut simulator = stacked_simulator(&config, &firsts);
        let results = simulator
            .simulate_with_strategy(&mut BasicStrategy::new(), &mut ())
            .unwrap();

        assert_eq!(results.len(), 2);
        let (left, right) = (&results[0], &results[1]);
        assert_eq!(left.hand_number, 1);
        assert_eq!(right.hand_number, 2);

        assert_eq!(left.player_cards, vec![Eight, Three, Nine]);
        assert_eq!(left.actions, vec![Action::Split, Action::Double]);
        assert_eq!(left.bet_amount, 20.0);
        assert_eq!(left.final_result, Outcome::Win);

        assert_eq!(right.player_cards, vec![Eight, Two, Nine]);
        assert_eq!(
            right.actions,
            vec![Action::Split, Action::Hit, Action::Stand]
        );
        assert_eq!(right.bet_amount, 10.0);
        assert_eq!(right.final_result, Outcome::Win);
        assert_eq!(right.dealer_cards, vec![Ten, Seven]);
    }

    #[test]
    fn ineligible_decisions_stand() {
        let config = config(6, 1, BetMode::Fixed);
        let mut simulator = stacked_simulator(&config, &[Ten, Nine, Ten, Seven]);
        let mut strategy = Scripted {
            decisions: vec![Action::Split],
        };
        let results = simulator.simulate_with_strategy(&mut strategy, &mut ()).unwrap();
        assert_eq!(results[0].actions, vec![Action::Stand]);
        assert_eq!(results[0].player_cards, vec![Ten, Nine]);
        assert_eq!(results[0].final_result, Outcome::Win);

        let mut simulator = stacked_simulator(&config, &[Two, Three, Ten, Seven, Four]);
        let mut strategy = Scripted {
            decisions: vec![Action::Hit, Action::Double],
        };
        let results = simulator.simulate_with_strategy(&mut strategy, &mut ()).unwrap();
        assert_eq!(results[0].actions, vec![Action::Hit, Action::Stand]);
        assert_eq!(results[0].player_cards, vec![Two, Three, Four]);
        assert_eq!(results[0].bet_amount, 10.0);
    }

    #[test]
    fn profit_accounts_for_doubling_and_naturals() {
        let config = config(6, 1, BetMode::Fixed);
        let mut simulator = stacked_simulator(&config, &[Eight, Eight, Ten, Seven]);
        let results = simulator.simulate_rounds(&mut ()).unwrap();
        for record in &results {
            let expected = match record.final_result {
                Outcome::Win => record.bet_amount,
                Outcome::Push => 0.0,
                Outcome::Lose => -record.bet_amount,
            };
            assert_eq!(record.profit(1.5), expected);
        }
    }
}
