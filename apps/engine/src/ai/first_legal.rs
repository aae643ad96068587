//! Deterministic strategy: always the first legal option.

use super::trait_def::{AiError, PlayerStrategy};
use crate::domain::announcements::AnnouncementKind;
use crate::domain::poverty::default_hand_over;
use crate::domain::rules::POVERTY_EXCHANGE_CARDS;
use crate::domain::state::Round;
use crate::domain::variants::VariantBid;
use crate::domain::{Card, PlayerId};

/// Passes, declines, never announces and plays the first eligible card.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstLegalPlayer;

impl FirstLegalPlayer {
    pub const NAME: &'static str = "first-legal";
    pub const VERSION: &'static str = "1.0.0";
}

impl PlayerStrategy for FirstLegalPlayer {
    fn choose_variant(&self, _round: &Round, _player: PlayerId) -> Result<VariantBid, AiError> {
        Ok(VariantBid::Pass)
    }

    fn choose_poverty_cards(&self, round: &Round, player: PlayerId) -> Result<Vec<Card>, AiError> {
        Ok(default_hand_over(round.hand(player)))
    }

    fn accept_poverty(&self, _round: &Round, _player: PlayerId) -> Result<bool, AiError> {
        Ok(false)
    }

    fn choose_return_cards(&self, round: &Round, player: PlayerId) -> Result<Vec<Card>, AiError> {
        let hand = round.hand(player);
        if hand.len() < POVERTY_EXCHANGE_CARDS {
            return Err(AiError::InvalidMove("hand too small to return cards".into()));
        }
        Ok(hand[..POVERTY_EXCHANGE_CARDS].to_vec())
    }

    fn choose_announcement(
        &self,
        _round: &Round,
        _player: PlayerId,
    ) -> Result<Option<AnnouncementKind>, AiError> {
        Ok(None)
    }

    fn choose_play(&self, round: &Round, _player: PlayerId) -> Result<Card, AiError> {
        round
            .eligible_cards()
            .first()
            .copied()
            .ok_or_else(|| AiError::InvalidMove("no eligible cards".into()))
    }
}
