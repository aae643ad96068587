//! In-memory table simulator.
//!
//! Every table gets its own seed derived from the base seed; every round and
//! every seat strategy derives from that, so a base seed replays the whole run.

use engine::domain::{derive_round_seed, derive_strategy_seed, derive_table_seed};
use engine::{
    advance_table_with, create_strategy, Player, PlayerKind, PlayerStrategy, SeatStrategies, Table,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;
use uuid::Uuid;

use crate::types::StrategyKind;

const SEATS: usize = 4;

/// A closed table together with the seed that produced it.
#[derive(Debug)]
pub struct TableResult {
    pub table_no: u32,
    pub table_seed: u64,
    pub table: Table,
}

pub struct Simulator {
    base_seed: u64,
    rounds: u16,
    strategy: StrategyKind,
}

impl Simulator {
    pub fn new(base_seed: u64, rounds: u16, strategy: StrategyKind) -> Self {
        Self {
            base_seed,
            rounds,
            strategy,
        }
    }

    /// Seat four computer players at a fresh table and play it until closed.
    pub fn simulate_table(&self, table_no: u32) -> Result<TableResult, Box<dyn std::error::Error>> {
        let table_seed = derive_table_seed(self.base_seed, table_no);
        let players = seat_players(table_no, table_seed);
        let strategies = self.seat_strategies(table_seed, &players)?;

        let mut table = Table::with_players(format!("table-{table_no}"), self.rounds, players)?;
        while !table.is_closed() {
            let round_no = table.rounds().len() as u16 + 1;
            let round_seed = derive_round_seed(table_seed, round_no);
            debug!(table_no, round_no, round_seed, "Simulating round");
            let mut rng = ChaCha8Rng::seed_from_u64(round_seed);
            table = advance_table_with(table, &mut rng, &strategies)?;
        }

        Ok(TableResult {
            table_no,
            table_seed,
            table,
        })
    }

    fn seat_strategies(
        &self,
        table_seed: u64,
        players: &[Player],
    ) -> Result<SeatStrategies, Box<dyn std::error::Error>> {
        let mut strategies = SeatStrategies::default();
        for (seat, player) in players.iter().enumerate() {
            let seed = derive_strategy_seed(table_seed, seat);
            strategies = strategies.with_player(player.uuid, self.make_strategy(seed)?);
        }
        Ok(strategies)
    }

    fn make_strategy(&self, seed: u64) -> Result<Box<dyn PlayerStrategy>, Box<dyn std::error::Error>> {
        let name = self.strategy.registry_name();
        create_strategy(name, Some(seed)).ok_or_else(|| format!("Unknown strategy: {name}").into())
    }
}

/// Player identities are derived from the table seed so reruns line up.
fn seat_players(table_no: u32, table_seed: u64) -> Vec<Player> {
    (0..SEATS)
        .map(|seat| {
            Player::new(
                format!("sim-{table_no}-{seat}"),
                format!("Bot {}", seat + 1),
                PlayerKind::Computer,
            )
            .with_uuid(Uuid::from_u64_pair(table_seed, seat as u64 + 1))
        })
        .collect()
}
