//! Game variant nomination and mode resolution.
//!
//! Each player nominates once, in seat order from the round's first player.
//! Solo beats armut beats normal; a pass counts as normal. Ties go to the
//! earliest nomination.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::cards_logic::trump_count;
use crate::domain::rules::POVERTY_MAX_TRUMPS;
use crate::domain::{Card, PlayerId};
use crate::errors::domain::DomainError;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantBid {
    Normal,
    Solo,
    Armut,
    Pass,
}

impl VariantBid {
    pub const ALL: [VariantBid; 4] = [
        VariantBid::Normal,
        VariantBid::Solo,
        VariantBid::Armut,
        VariantBid::Pass,
    ];

    fn precedence(self) -> u8 {
        match self {
            VariantBid::Solo => 2,
            VariantBid::Armut => 1,
            VariantBid::Normal | VariantBid::Pass => 0,
        }
    }
}

impl fmt::Display for VariantBid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            VariantBid::Normal => "normal",
            VariantBid::Solo => "solo",
            VariantBid::Armut => "armut",
            VariantBid::Pass => "pass",
        })
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct VariantNomination {
    pub player: PlayerId,
    pub bid: VariantBid,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    #[default]
    Normal,
    Solo,
    Armut,
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GameMode::Normal => "normal",
            GameMode::Solo => "solo",
            GameMode::Armut => "armut",
        })
    }
}

/// Outcome of the variant phase.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ModeDecision {
    pub mode: GameMode,
    /// Soloist or poor player; `None` for a normal game.
    pub declarer: Option<PlayerId>,
}

/// Check whether `hand` allows `bid`.
pub fn check_nomination(player: PlayerId, hand: &[Card], bid: VariantBid) -> Result<(), DomainError> {
    if bid == VariantBid::Armut && trump_count(hand) > POVERTY_MAX_TRUMPS {
        return Err(DomainError::IneligibleVariant {
            player,
            bid,
            reason: "armut requires at most three trumps",
        });
    }
    Ok(())
}

/// Bids `hand` may nominate.
pub fn legal_bids(hand: &[Card]) -> Vec<VariantBid> {
    VariantBid::ALL
        .into_iter()
        .filter(|&bid| bid != VariantBid::Armut || trump_count(hand) <= POVERTY_MAX_TRUMPS)
        .collect()
}

/// Resolve the game mode from nominations given in play order.
pub fn resolve_mode(nominations: &[VariantNomination]) -> ModeDecision {
    let best = nominations
        .iter()
        .fold(None::<&VariantNomination>, |best, nom| match best {
            Some(b) if b.bid.precedence() >= nom.bid.precedence() => Some(b),
            _ => Some(nom),
        });
    match best.map(|n| (n.bid, n.player)) {
        Some((VariantBid::Solo, player)) => ModeDecision {
            mode: GameMode::Solo,
            declarer: Some(player),
        },
        Some((VariantBid::Armut, player)) => ModeDecision {
            mode: GameMode::Armut,
            declarer: Some(player),
        },
        _ => ModeDecision {
            mode: GameMode::Normal,
            declarer: None,
        },
    }
}
