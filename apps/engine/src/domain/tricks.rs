use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::cards_logic::{card_beats, hand_has_trick_suit, trick_suit, TrickSuit};
use crate::domain::rules::PLAYERS;
use crate::domain::{Card, PlayerId};
use crate::errors::domain::DomainError;

/// One card put into a trick.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Play {
    pub player: PlayerId,
    pub card: Card,
}

/// A resolved trick: four plays in play order and who took them.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Trick {
    pub plays: Vec<Play>,
    pub winner: PlayerId,
}

impl Trick {
    pub fn leader(&self) -> Option<PlayerId> {
        self.plays.first().map(|p| p.player)
    }

    pub fn points(&self) -> u16 {
        self.plays.iter().map(|p| p.card.value() as u16).sum()
    }
}

/// Suit led in the trick so far, if any card has been played.
pub fn lead_suit(plays: &[Play]) -> Option<TrickSuit> {
    plays.first().map(|p| trick_suit(p.card))
}

/// Cards from `hand` that may legally be added to `plays`.
///
/// The leader may play anything. Followers must match the led suit
/// (trump counts as one suit) when they can. Hand order is preserved.
pub fn eligible_cards(hand: &[Card], plays: &[Play]) -> Vec<Card> {
    match lead_suit(plays) {
        Some(lead) if hand_has_trick_suit(hand, lead) => hand
            .iter()
            .copied()
            .filter(|&c| trick_suit(c) == lead)
            .collect(),
        _ => hand.to_vec(),
    }
}

/// Move `card` from `player`'s hand into the trick.
///
/// Validates before mutating: on error neither the hands nor the trick change.
pub fn play_card(
    hands: &mut BTreeMap<PlayerId, Vec<Card>>,
    player: PlayerId,
    card: Card,
    trick: &mut Vec<Play>,
    trick_no: u8,
) -> Result<(), DomainError> {
    if trick.len() >= PLAYERS {
        return Err(DomainError::InvariantViolation(format!(
            "trick {trick_no} already holds {} cards",
            trick.len()
        )));
    }
    let hand = hands.get_mut(&player).ok_or_else(|| {
        DomainError::InvariantViolation(format!("player {player} has no hand in this round"))
    })?;
    let Some(pos) = hand.iter().position(|&c| c == card) else {
        return Err(DomainError::CardNotInHand { player, card });
    };
    if !eligible_cards(hand, trick).contains(&card) {
        return Err(DomainError::IneligibleCard {
            player,
            card,
            trick_no,
        });
    }
    let removed = hand.remove(pos);
    trick.push(Play {
        player,
        card: removed,
    });
    Ok(())
}

/// Determine the winning play of a trick.
///
/// Later plays must strictly beat the current best, so the first of two
/// identical cards stands.
pub fn resolve_trick(plays: &[Play]) -> Result<Play, DomainError> {
    let lead = lead_suit(plays)
        .ok_or_else(|| DomainError::InvariantViolation("cannot resolve an empty trick".into()))?;
    let mut best = plays[0];
    for play in &plays[1..] {
        if card_beats(play.card, best.card, lead) {
            best = *play;
        }
    }
    Ok(best)
}

/// Every player in `order` must still hold a card before a trick starts.
pub fn ensure_hands_ready(
    hands: &BTreeMap<PlayerId, Vec<Card>>,
    order: &[PlayerId],
    trick_no: u8,
) -> Result<(), DomainError> {
    for &player in order {
        if hands.get(&player).map_or(true, |h| h.is_empty()) {
            return Err(DomainError::HandExhausted { player, trick_no });
        }
    }
    Ok(())
}
