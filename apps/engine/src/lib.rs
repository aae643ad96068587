#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Doppelkopf round engine.
//!
//! `domain` holds the pure rules (cards, teams, tricks, the round state
//! machine, tables). `services` drives rounds and tables with the player
//! strategies from `ai`.

pub mod ai;
pub mod domain;
pub mod error;
pub mod errors;
pub mod services;

pub use ai::{create_strategy, AiError, FirstLegalPlayer, PlayerStrategy, RandomPlayer, SeatStrategies};
pub use domain::state::{Phase, PlayOutcome, Round};
pub use domain::table::{Table, TableStatus};
pub use domain::{Card, Player, PlayerId, PlayerKind, Rank, Suit};
pub use error::EngineError;
pub use errors::{DomainError, ErrorCategory, ErrorCode};
pub use services::{advance_table, advance_table_with, play_all_rounds, play_all_rounds_with};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    engine_test_support::logging::init();
}
