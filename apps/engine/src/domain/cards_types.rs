//! Core card-related types: Card, Rank, Suit

use std::fmt;

/// Suits in deck-construction order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Hearts,
    Spades,
    Diamonds,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Spades, Suit::Diamonds, Suit::Clubs];
}

/// Ranks in deck-construction order (highest card value first). There is no nine.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Ace,
    Ten,
    King,
    Queen,
    Jack,
}

impl Rank {
    pub const ALL: [Rank; 5] = [Rank::Ace, Rank::Ten, Rank::King, Rank::Queen, Rank::Jack];

    /// Card points carried by this rank.
    pub const fn value(self) -> u8 {
        match self {
            Rank::Ace => 11,
            Rank::Ten => 10,
            Rank::King => 4,
            Rank::Queen => 3,
            Rank::Jack => 2,
        }
    }
}

/// An immutable playing card.
///
/// `value` and `is_trump` are derived from suit and rank and are exposed as
/// methods only, so they can never drift from the card's identity.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    pub const fn value(&self) -> u8 {
        self.rank.value()
    }

    /// Diamonds and the queen of clubs are trump.
    pub const fn is_trump(&self) -> bool {
        matches!(self.suit, Suit::Diamonds)
            || matches!((self.suit, self.rank), (Suit::Clubs, Rank::Queen))
    }
}

// Note: Ord on Card is only for stable sorting (suit, then rank in deck order).
// Trick resolution uses cards_logic::card_beats instead.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.suit.cmp(&other.suit) {
            std::cmp::Ordering::Equal => self.rank.cmp(&other.rank),
            ord => ord,
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Suit {
    pub(crate) const fn token(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
        }
    }

    pub(crate) const fn name(self) -> &'static str {
        match self {
            Suit::Hearts => "hearts",
            Suit::Spades => "spades",
            Suit::Diamonds => "diamonds",
            Suit::Clubs => "clubs",
        }
    }
}

impl Rank {
    pub(crate) const fn token(self) -> char {
        match self {
            Rank::Ace => 'A',
            Rank::Ten => 'T',
            Rank::King => 'K',
            Rank::Queen => 'Q',
            Rank::Jack => 'J',
        }
    }

    pub(crate) const fn name(self) -> &'static str {
        match self {
            Rank::Ace => "ace",
            Rank::Ten => "ten",
            Rank::King => "king",
            Rank::Queen => "queen",
            Rank::Jack => "jack",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Compact token form, e.g. `QC` for the queen of clubs.
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.token(), self.suit.token())
    }
}
