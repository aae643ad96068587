//! Domain layer: pure game rules, no I/O.

pub mod announcements;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod player;
pub mod poverty;
pub mod rules;
pub mod scoring;
pub mod seed_derivation;
pub mod state;
pub mod table;
pub mod teams;
pub mod tricks;
pub mod variants;

#[cfg(test)]
mod tests_announcements;
#[cfg(test)]
mod tests_poverty;
#[cfg(test)]
mod tests_props_trick_winner;
#[cfg(test)]
mod tests_round;
#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use cards_logic::{card_beats, trick_suit, TrickSuit};
pub use cards_parsing::try_parse_cards;
pub use cards_types::{Card, Rank, Suit};
pub use dealing::{build_deck, deal, shuffle};
pub use player::{Player, PlayerId, PlayerKind};
pub use seed_derivation::{derive_round_seed, derive_strategy_seed, derive_table_seed};
pub use teams::{assign_teams, Team, TeamAssignment};
