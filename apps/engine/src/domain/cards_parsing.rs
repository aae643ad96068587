//! Card parsing from string representations (e.g., "QC", "TD")

use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::domain::DomainError;

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(rank_ch), Some(suit_ch), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(DomainError::ParseCard(s.to_string()));
        };
        let rank = match rank_ch {
            'A' => Rank::Ace,
            'T' => Rank::Ten,
            'K' => Rank::King,
            'Q' => Rank::Queen,
            'J' => Rank::Jack,
            _ => return Err(DomainError::ParseCard(s.to_string())),
        };
        let suit = match suit_ch {
            'H' => Suit::Hearts,
            'S' => Suit::Spades,
            'D' => Suit::Diamonds,
            'C' => Suit::Clubs,
            _ => return Err(DomainError::ParseCard(s.to_string())),
        };
        Ok(Card { suit, rank })
    }
}

impl FromStr for Suit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Suit::ALL
            .into_iter()
            .find(|suit| suit.name() == s)
            .ok_or_else(|| DomainError::ParseCard(format!("invalid suit: {s}")))
    }
}

impl FromStr for Rank {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rank::ALL
            .into_iter()
            .find(|rank| rank.name() == s)
            .ok_or_else(|| DomainError::ParseCard(format!("invalid rank: {s}")))
    }
}

/// Non-panicking helper to parse card tokens (e.g., "QC", "AH") into cards.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
