//! Card game logic: effective suits, following suit, comparing card strength.
//!
//! Trump order, highest first: Q♣, A♦, 10♦, K♦, Q♦, J♦. Plain suits rank by
//! card value (A, 10, K, Q, J). Between two identical cards the earlier one
//! stands, which `card_beats` expresses by requiring strict superiority.

use super::cards_types::{Card, Rank, Suit};

/// The suit a card counts as when following: trump, or its plain suit.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TrickSuit {
    Trump,
    Plain(Suit),
}

pub fn trick_suit(card: Card) -> TrickSuit {
    if card.is_trump() {
        TrickSuit::Trump
    } else {
        TrickSuit::Plain(card.suit)
    }
}

/// Position within the trump order (higher is stronger); `None` for non-trumps.
pub fn trump_strength(card: Card) -> Option<u8> {
    match (card.suit, card.rank) {
        (Suit::Clubs, Rank::Queen) => Some(6),
        (Suit::Diamonds, Rank::Ace) => Some(5),
        (Suit::Diamonds, Rank::Ten) => Some(4),
        (Suit::Diamonds, Rank::King) => Some(3),
        (Suit::Diamonds, Rank::Queen) => Some(2),
        (Suit::Diamonds, Rank::Jack) => Some(1),
        _ => None,
    }
}

pub fn follows(card: Card, lead: TrickSuit) -> bool {
    trick_suit(card) == lead
}

pub fn hand_has_trick_suit(hand: &[Card], lead: TrickSuit) -> bool {
    hand.iter().any(|&c| follows(c, lead))
}

/// True if `a` (played later) takes the trick from `b` given the led suit.
pub fn card_beats(a: Card, b: Card, lead: TrickSuit) -> bool {
    match (trump_strength(a), trump_strength(b)) {
        (Some(sa), Some(sb)) => sa > sb,
        (Some(_), None) => true,
        (None, Some(_)) => false,
        (None, None) => {
            let a_follows = follows(a, lead);
            let b_follows = follows(b, lead);
            match (a_follows, b_follows) {
                (true, false) => true,
                (false, true) => false,
                (true, true) => a.value() > b.value(),
                (false, false) => false,
            }
        }
    }
}

/// Number of trumps in a hand.
pub fn trump_count(hand: &[Card]) -> usize {
    hand.iter().filter(|c| c.is_trump()).count()
}
