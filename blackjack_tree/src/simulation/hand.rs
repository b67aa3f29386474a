use crate::{Action, Rank};

/// One hand, either the player's or the dealer's. Each exploration branch owns its own copy.
#[derive(Debug, Clone, PartialEq)]
pub struct HandState {
    pub cards: Vec<Rank>,
    pub bet: f64,
    pub actions: Vec<Action>,
    pub doubled: bool,
}

impl HandState {
    pub fn new(bet: f64) -> HandState {
        HandState {
            cards: Vec::with_capacity(4),
            bet,
            actions: Vec::new(),
            doubled: false,
        }
    }

    pub fn with_cards(cards: &[Rank], bet: f64) -> HandState {
        let mut hand = HandState::new(bet);
        hand.cards.extend_from_slice(cards);
        hand
    }

    pub fn receive_card(&mut self, rank: Rank) {
        self.cards.push(rank);
    }

    /// Doubles the bet and takes exactly one card. The player's turn is over afterwards.
    pub fn double_down(&mut self, rank: Rank) {
        self.bet *= 2.0;
        self.doubled = true;
        self.actions.push(Action::Double);
        self.receive_card(rank);
    }

    /// Counts every Ace as 11 first, then demotes Aces to 1 one at a time
    /// while the total is over 21.
    pub fn value(&self) -> u16 {
        let (total, _) = self.value_and_soft_aces();
        total
    }

    /// A soft hand counts at least one Ace as 11 without busting.
    pub fn is_soft(&self) -> bool {
        let (_, soft_aces) = self.value_and_soft_aces();
        soft_aces > 0
    }

    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == 21
    }

    pub fn can_split(&self) -> bool {
        self.cards.len() == 2 && self.cards[0] == self.cards[1]
    }

    pub fn can_double(&self) -> bool {
        self.cards.len() == 2
    }

    pub fn up_card(&self) -> Option<Rank> {
        self.cards.first().copied()
    }

    fn value_and_soft_aces(&self) -> (u16, u8) {
        let mut total: u16 = 0;
        let mut aces: u8 = 0;
        for rank in &self.cards {
            if rank.is_ace() {
                total += 11;
                aces += 1;
            } else {
                total += rank.blackjack_value() as u16;
            }
        }
        while total > 21 && aces > 0 {
            total -= 10;
            aces -= 1;
        }
        (total, aces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Rank::*;

    fn hand(cards: &[Rank]) -> HandState {
        HandState::with_cards(cards, 10.0)
    }

    #[test]
    fn aces_are_demoted_only_when_needed() {
        assert_eq!(hand(&[Ace, Six]).value(), 17);
        assert!(hand(&[Ace, Six]).is_soft());
        assert_eq!(hand(&[Ace, Six, Ten]).value(), 17);
        assert!(!hand(&[Ace, Six, Ten]).is_soft());
        assert_eq!(hand(&[Ace, Ace]).value(), 12);
        assert_eq!(hand(&[Ace, Ace, Ace, Ace]).value(), 14);
        assert_eq!(hand(&[Ace, Ace, Nine]).value(), 21);
        assert_eq!(hand(&[King, Queen, Ace]).value(), 21);
        assert_eq!(hand(&[King, Queen, Two]).value(), 22);
        assert_eq!(hand(&[]).value(), 0);
    }

    #[test]
    fn value_never_exceeds_21_when_an_ace_can_be_demoted() {
        for extra in [Two, Five, Nine, Ten] {
            let h = hand(&[Ace, Nine, extra]);
            let hard_total: u16 = h.cards.iter().map(|r| r.blackjack_value() as u16).sum();
            if hard_total <= 21 {
                assert!(h.value() <= 21);
            }
        }
    }

    #[test]
    fn only_two_card_21_is_blackjack() {
        assert!(hand(&[Ace, King]).is_blackjack());
        assert!(hand(&[Ten, Ace]).is_blackjack());
        assert!(!hand(&[Seven, Seven, Seven]).is_blackjack());
        assert!(!hand(&[Ace, Five, Five]).is_blackjack());
        assert!(!hand(&[Ten, Nine]).is_blackjack());
    }

    #[test]
    fn split_needs_equal_ranks() {
        assert!(hand(&[Eight, Eight]).can_split());
        assert!(!hand(&[King, Queen]).can_split());
        assert!(!hand(&[Eight, Eight, Two]).can_split());
        assert!(hand(&[King, Queen]).can_double());
        assert!(!hand(&[Two, Three, Four]).can_double());
    }

    #[test]
    fn double_down_doubles_bet_and_takes_one_card() {
        let mut h = hand(&[Five, Six]);
        h.double_down(Ten);
        assert_eq!(h.bet, 20.0);
        assert!(h.doubled);
        assert_eq!(h.cards, vec![Five, Six, Ten]);
        assert_eq!(h.actions, vec![Action::Double]);
        assert_eq!(h.value(), 21);
        assert!(!h.is_blackjack());
    }
}
