//! Shared types for the simulator.

use clap::ValueEnum;

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// One JSON record per closed table.
    Jsonl,
    /// A single JSON array written on finish.
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StrategyKind {
    FirstLegal,
    Random,
}

impl StrategyKind {
    /// Name in the engine's strategy registry.
    pub fn registry_name(self) -> &'static str {
        match self {
            StrategyKind::FirstLegal => engine::FirstLegalPlayer::NAME,
            StrategyKind::Random => engine::RandomPlayer::NAME,
        }
    }
}
