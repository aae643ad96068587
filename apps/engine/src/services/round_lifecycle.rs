//! Table-level round lifecycle: deal, play and record rounds until closed.

use rand::Rng;
use tracing::{debug, info};

use crate::ai::SeatStrategies;
use crate::domain::state::Round;
use crate::domain::table::Table;
use crate::error::EngineError;
use crate::services::round_driver::drive_round;

/// Play one round at `table` with first-legal autoplay for every seat.
pub fn advance_table<R: Rng + ?Sized>(table: Table, rng: &mut R) -> Result<Table, EngineError> {
    advance_table_with(table, rng, &SeatStrategies::default())
}

/// Play one round at `table` and record it.
///
/// A closed table comes back unchanged. After the round the table is
/// closed if it has played its configured number of rounds, otherwise
/// waiting for the next one.
pub fn advance_table_with<R: Rng + ?Sized>(
    mut table: Table,
    rng: &mut R,
    strategies: &SeatStrategies,
) -> Result<Table, EngineError> {
    if table.is_closed() {
        debug!(table = %table.name(), "Table closed, nothing to advance");
        return Ok(table);
    }

    let round_no = table.rounds().len() + 1;
    info!(table = %table.name(), round_no, "Dealing new round");
    table.mark_playing();

    let round = Round::start(table.players(), rng)?;
    let round = drive_round(round, strategies)?;

    info!(
        table = %table.name(),
        round_no,
        mode = %round.mode(),
        re = round.score().re,
        kontra = round.score().kontra,
        winner = ?round.winner(),
        "Round complete"
    );
    table.record_round(round);
    debug!(table = %table.name(), status = %table.status(), "Transition: table status");
    if table.is_closed() {
        info!(table = %table.name(), rounds = table.rounds().len(), "Table closed");
    }
    Ok(table)
}

/// Advance `table` until it is closed.
pub fn play_all_rounds<R: Rng + ?Sized>(table: Table, rng: &mut R) -> Result<Table, EngineError> {
    play_all_rounds_with(table, rng, &SeatStrategies::default())
}

pub fn play_all_rounds_with<R: Rng + ?Sized>(
    mut table: Table,
    rng: &mut R,
    strategies: &SeatStrategies,
) -> Result<Table, EngineError> {
    while !table.is_closed() {
        table = advance_table_with(table, rng, strategies)?;
    }
    Ok(table)
}
