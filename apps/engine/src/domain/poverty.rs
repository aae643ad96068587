//! Armut card exchange.
//!
//! The poor player hands exactly three cards, including every trump they
//! hold, to the table. Starting left of the poor player each other player
//! accepts or declines. The first to accept takes the cards, returns three
//! of their choice and partners the poor player as Re. If everyone
//! declines the cards go back and the round continues as a normal game.

use serde::{Deserialize, Serialize};

use crate::domain::cards_logic::trump_count;
use crate::domain::rules::POVERTY_EXCHANGE_CARDS;
use crate::domain::{Card, PlayerId};
use crate::errors::domain::DomainError;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PovertyStage {
    /// Poor player still has to hand over cards.
    AwaitingCards,
    /// Cards are on offer; players answer in seat order.
    Offering,
    /// A partner accepted and owes the poor player three cards.
    AwaitingReturn,
    Accepted,
    Declined,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PovertyExchange {
    pub poor: PlayerId,
    pub stage: PovertyStage,
    /// Cards currently on offer; empty once taken or handed back.
    pub offered: Vec<Card>,
    pub declined_by: Vec<PlayerId>,
    pub partner: Option<PlayerId>,
    pub returned: Vec<Card>,
}

impl PovertyExchange {
    pub fn new(poor: PlayerId) -> Self {
        Self {
            poor,
            stage: PovertyStage::AwaitingCards,
            offered: Vec::new(),
            declined_by: Vec::new(),
            partner: None,
            returned: Vec::new(),
        }
    }

    pub fn is_settled(&self) -> bool {
        matches!(self.stage, PovertyStage::Accepted | PovertyStage::Declined)
    }

    /// Cards out of every hand while the offer is open.
    pub fn cards_in_transit(&self) -> usize {
        self.offered.len()
    }
}

/// True if `hand` holds every card of `cards`, counting duplicates.
pub fn holds_all(hand: &[Card], cards: &[Card]) -> bool {
    let mut rest = hand.to_vec();
    cards.iter().all(|card| match rest.iter().position(|c| c == card) {
        Some(pos) => {
            rest.swap_remove(pos);
            true
        }
        None => false,
    })
}

/// Remove `cards` from `hand` one copy each. Callers validate with [`holds_all`] first.
pub(crate) fn take_cards(hand: &mut Vec<Card>, cards: &[Card]) {
    for card in cards {
        if let Some(pos) = hand.iter().position(|c| c == card) {
            hand.remove(pos);
        }
    }
}

fn check_count(player: PlayerId, cards: &[Card]) -> Result<(), DomainError> {
    if cards.len() != POVERTY_EXCHANGE_CARDS {
        return Err(DomainError::InvalidExchange {
            player,
            reason: format!(
                "exactly {POVERTY_EXCHANGE_CARDS} cards must change hands, got {}",
                cards.len()
            ),
        });
    }
    Ok(())
}

/// Validate the poor player's hand-over.
pub fn check_hand_over(player: PlayerId, hand: &[Card], cards: &[Card]) -> Result<(), DomainError> {
    check_count(player, cards)?;
    if !holds_all(hand, cards) {
        return Err(DomainError::InvalidExchange {
            player,
            reason: "cards not held".into(),
        });
    }
    if trump_count(cards) != trump_count(hand) {
        return Err(DomainError::InvalidExchange {
            player,
            reason: "every trump must be handed over".into(),
        });
    }
    Ok(())
}

/// Validate the partner's returned cards.
pub fn check_return(player: PlayerId, hand: &[Card], cards: &[Card]) -> Result<(), DomainError> {
    check_count(player, cards)?;
    if !holds_all(hand, cards) {
        return Err(DomainError::InvalidExchange {
            player,
            reason: "cards not held".into(),
        });
    }
    Ok(())
}

/// All trumps plus the cheapest plain cards, three in total.
pub fn default_hand_over(hand: &[Card]) -> Vec<Card> {
    let mut cards: Vec<Card> = hand.iter().copied().filter(|c| c.is_trump()).collect();
    let mut plain: Vec<Card> = hand.iter().copied().filter(|c| !c.is_trump()).collect();
    plain.sort_by_key(|c| (c.value(), *c));
    let missing = POVERTY_EXCHANGE_CARDS.saturating_sub(cards.len());
    cards.extend(plain.into_iter().take(missing));
    cards
}
