//! Player strategy trait definition.

use thiserror::Error;

use crate::domain::announcements::AnnouncementKind;
use crate::domain::state::Round;
use crate::domain::variants::VariantBid;
use crate::domain::{Card, PlayerId};

/// Errors a strategy can report instead of a decision.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AiError {
    /// The strategy found nothing legal to do.
    #[error("no legal move: {0}")]
    InvalidMove(String),
    #[error("strategy internal error: {0}")]
    Internal(String),
}

/// Decision maker for one seat.
///
/// Every method receives the round and the deciding player. The engine
/// only asks when it is that player's turn for that decision, and it
/// validates whatever comes back.
pub trait PlayerStrategy: Send + Sync {
    fn choose_variant(&self, round: &Round, player: PlayerId) -> Result<VariantBid, AiError>;

    /// Three cards to put on offer, all trumps included.
    fn choose_poverty_cards(&self, round: &Round, player: PlayerId) -> Result<Vec<Card>, AiError>;

    fn accept_poverty(&self, round: &Round, player: PlayerId) -> Result<bool, AiError>;

    /// Three cards to give back after accepting.
    fn choose_return_cards(&self, round: &Round, player: PlayerId) -> Result<Vec<Card>, AiError>;

    /// Optional announcement before playing a card.
    fn choose_announcement(
        &self,
        round: &Round,
        player: PlayerId,
    ) -> Result<Option<AnnouncementKind>, AiError>;

    fn choose_play(&self, round: &Round, player: PlayerId) -> Result<Card, AiError>;
}
