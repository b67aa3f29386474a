use crate::{Action, Outcome, SimulationError};

use super::{hand::HandState, shoe::CardSource};

/// Dealer hits while under 17, then stands. Soft 17 stands.
pub fn dealer_play<S: CardSource>(dealer: &mut HandState, shoe: &mut S) -> Result<(), SimulationError> {
    while dealer.value() < 17 {
        dealer.receive_card(shoe.draw()?);
        dealer.actions.push(Action::Hit);
    }
    dealer.actions.push(Action::Stand);
    Ok(())
}

/// Compares final totals. A busted player loses even when the dealer busts too.
pub fn settle(player_value: u16, dealer_value: u16) -> Outcome {
    if player_value > 21 {
        Outcome::Lose
    } else if dealer_value > 21 || player_value > dealer_value {
        Outcome::Win
    } else if player_value < dealer_value {
        Outcome::Lose
    } else {
        Outcome::Push
    }
}

/// Outcome of the natural check made before any decision, if one applies.
pub fn settle_naturals(player: &HandState, dealer: &HandState) -> Option<Outcome> {
    if dealer.is_blackjack() {
        if player.is_blackjack() {
            Some(Outcome::Push)
        } else {
            Some(Outcome::Lose)
        }
    } else if player.is_blackjack() {
        Some(Outcome::Win)
    } else {
        None
    }
}
