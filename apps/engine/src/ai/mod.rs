//! Automated players.
//!
//! - [`PlayerStrategy`]: the decision interface the round driver calls
//! - [`FirstLegalPlayer`]: deterministic autoplay
//! - [`RandomPlayer`]: random legal moves, seedable
//! - a small name → factory registry for the simulator

mod first_legal;
mod random;
pub mod registry;
mod seating;
mod trait_def;

pub use first_legal::FirstLegalPlayer;
pub use random::RandomPlayer;
pub use registry::create_strategy;
pub use seating::SeatStrategies;
pub use trait_def::{AiError, PlayerStrategy};
