//! Deck construction, shuffling and dealing.
//!
//! All randomness comes from the caller's RNG so rounds are reproducible
//! from a seed.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::rules::DECK_SIZE;
use crate::domain::{Card, Rank, Suit};
use crate::errors::domain::DomainError;

/// The 40-card deck in its canonical order: suit-major, ranks by value,
/// each card immediately followed by its twin.
pub fn build_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            let card = Card { suit, rank };
            deck.push(card);
            deck.push(card);
        }
    }
    deck
}

/// Fisher-Yates shuffle driven by the supplied RNG.
pub fn shuffle<R: Rng + ?Sized>(mut deck: Vec<Card>, rng: &mut R) -> Vec<Card> {
    deck.shuffle(rng);
    deck
}

/// Split `deck` into `seats` equal contiguous shares in seat order.
///
/// Unlike a table-side deal, hands keep the deck order so that
/// concatenating them restores the input exactly.
pub fn deal(deck: &[Card], seats: usize) -> Result<Vec<Vec<Card>>, DomainError> {
    if deck.is_empty() || seats == 0 {
        return Err(DomainError::InvalidDeal {
            detail: format!("cannot deal {} cards to {seats} players", deck.len()),
        });
    }
    if deck.len() % seats != 0 {
        return Err(DomainError::InvalidDeal {
            detail: format!("{} cards do not split evenly among {seats} players", deck.len()),
        });
    }
    let share = deck.len() / seats;
    Ok(deck.chunks(share).map(<[Card]>::to_vec).collect())
}
