//! Random strategy: uniform choice among legal options.

use std::sync::{Mutex, MutexGuard};

use rand::prelude::*;

use super::trait_def::{AiError, PlayerStrategy};
use crate::domain::announcements::AnnouncementKind;
use crate::domain::rules::POVERTY_EXCHANGE_CARDS;
use crate::domain::state::Round;
use crate::domain::variants::VariantBid;
use crate::domain::{Card, PlayerId};

/// Chance of making an eligible announcement on a given turn.
const ANNOUNCE_PROBABILITY: f64 = 0.2;

/// Makes random legal decisions. Seedable for reproducible runs.
///
/// The RNG sits behind a `Mutex` because strategy methods take `&self`.
pub struct RandomPlayer {
    rng: Mutex<StdRng>,
}

impl RandomPlayer {
    pub const NAME: &'static str = "random";
    pub const VERSION: &'static str = "1.0.0";

    /// `Some(seed)` for reproducible play, `None` to seed from the OS.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }

    fn rng(&self) -> Result<MutexGuard<'_, StdRng>, AiError> {
        self.rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))
    }
}

impl PlayerStrategy for RandomPlayer {
    fn choose_variant(&self, round: &Round, player: PlayerId) -> Result<VariantBid, AiError> {
        let bids = round.legal_variant_bids(player);
        let mut rng = self.rng()?;
        bids.choose(&mut *rng)
            .copied()
            .ok_or_else(|| AiError::InvalidMove("no legal variant bids".into()))
    }

    fn choose_poverty_cards(&self, round: &Round, player: PlayerId) -> Result<Vec<Card>, AiError> {
        let hand = round.hand(player);
        let mut cards: Vec<Card> = hand.iter().copied().filter(|c| c.is_trump()).collect();
        let plain: Vec<Card> = hand.iter().copied().filter(|c| !c.is_trump()).collect();
        let missing = POVERTY_EXCHANGE_CARDS.saturating_sub(cards.len());
        if plain.len() < missing {
            return Err(AiError::InvalidMove("not enough cards to hand over".into()));
        }
        let mut rng = self.rng()?;
        cards.extend(plain.choose_multiple(&mut *rng, missing).copied());
        Ok(cards)
    }

    fn accept_poverty(&self, _round: &Round, _player: PlayerId) -> Result<bool, AiError> {
        Ok(self.rng()?.random_bool(0.5))
    }

    fn choose_return_cards(&self, round: &Round, player: PlayerId) -> Result<Vec<Card>, AiError> {
        let hand = round.hand(player);
        if hand.len() < POVERTY_EXCHANGE_CARDS {
            return Err(AiError::InvalidMove("hand too small to return cards".into()));
        }
        let mut rng = self.rng()?;
        Ok(hand
            .choose_multiple(&mut *rng, POVERTY_EXCHANGE_CARDS)
            .copied()
            .collect())
    }

    fn choose_announcement(
        &self,
        round: &Round,
        player: PlayerId,
    ) -> Result<Option<AnnouncementKind>, AiError> {
        let options = round.eligible_announcements(player);
        let mut rng = self.rng()?;
        if options.is_empty() || !rng.random_bool(ANNOUNCE_PROBABILITY) {
            return Ok(None);
        }
        Ok(options.choose(&mut *rng).copied())
    }

    fn choose_play(&self, round: &Round, _player: PlayerId) -> Result<Card, AiError> {
        let mut rng = self.rng()?;
        round
            .eligible_cards()
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| AiError::InvalidMove("no eligible cards".into()))
    }
}
