//! Which strategy decides for which player.

use std::collections::HashMap;

use super::{FirstLegalPlayer, PlayerStrategy};
use crate::domain::PlayerId;

/// Per-player strategies with a fallback for everyone else.
pub struct SeatStrategies {
    by_player: HashMap<PlayerId, Box<dyn PlayerStrategy>>,
    fallback: Box<dyn PlayerStrategy>,
}

impl SeatStrategies {
    /// Everybody plays `strategy`.
    pub fn uniform(strategy: Box<dyn PlayerStrategy>) -> Self {
        Self {
            by_player: HashMap::new(),
            fallback: strategy,
        }
    }

    pub fn with_player(mut self, player: PlayerId, strategy: Box<dyn PlayerStrategy>) -> Self {
        self.by_player.insert(player, strategy);
        self
    }

    pub fn for_player(&self, player: PlayerId) -> &dyn PlayerStrategy {
        self.by_player
            .get(&player)
            .map_or(self.fallback.as_ref(), |s| s.as_ref())
    }
}

impl Default for SeatStrategies {
    fn default() -> Self {
        Self::uniform(Box::new(FirstLegalPlayer))
    }
}
