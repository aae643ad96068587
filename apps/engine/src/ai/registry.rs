//! Registered strategies, looked up by name.
//!
//! Keep the list ordering stable; the simulator prints it in `--help`.
//! Same name and seed ⇒ same behavior.

use super::{FirstLegalPlayer, PlayerStrategy, RandomPlayer};

pub struct StrategyFactory {
    pub name: &'static str,
    pub version: &'static str,
    pub make: fn(seed: Option<u64>) -> Box<dyn PlayerStrategy>,
}

static STRATEGY_FACTORIES: &[StrategyFactory] = &[
    StrategyFactory {
        name: FirstLegalPlayer::NAME,
        version: FirstLegalPlayer::VERSION,
        make: make_first_legal,
    },
    StrategyFactory {
        name: RandomPlayer::NAME,
        version: RandomPlayer::VERSION,
        make: make_random_player,
    },
];

pub fn registered_strategies() -> &'static [StrategyFactory] {
    STRATEGY_FACTORIES
}

pub fn by_name(name: &str) -> Option<&'static StrategyFactory> {
    registered_strategies().iter().find(|f| f.name == name)
}

/// Build the strategy registered as `name`, if any.
pub fn create_strategy(name: &str, seed: Option<u64>) -> Option<Box<dyn PlayerStrategy>> {
    by_name(name).map(|factory| (factory.make)(seed))
}

fn make_first_legal(_seed: Option<u64>) -> Box<dyn PlayerStrategy> {
    Box::new(FirstLegalPlayer)
}

fn make_random_player(seed: Option<u64>) -> Box<dyn PlayerStrategy> {
    Box::new(RandomPlayer::new(seed))
}
