//! Per-table records and the run-wide summary.

use std::collections::BTreeMap;

use engine::domain::Team;
use engine::{Round, Table};
use serde::Serialize;

use crate::simulator::TableResult;

/// One output record per closed table.
#[derive(Debug, Clone, Serialize)]
pub struct TableRecord {
    pub table_no: u32,
    pub seed: u64,
    pub timestamp: String,
    pub strategy: String,
    pub duration_ms: f64,
    pub rounds: Vec<RoundMetrics>,
    /// Full table state, rounds included.
    pub table: Table,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoundMetrics {
    pub round_no: u16,
    pub mode: String,
    pub winner: Option<Team>,
    pub re_card_points: u16,
    pub kontra_card_points: u16,
    pub re_game_points: u16,
    pub kontra_game_points: u16,
    pub announcements: Vec<String>,
}

pub fn build_table_record(result: TableResult, strategy: &str, duration_ms: f64) -> TableRecord {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("unknown"));

    let rounds = result
        .table
        .rounds()
        .iter()
        .enumerate()
        .map(|(idx, round)| build_round_metrics(idx as u16 + 1, round))
        .collect();

    TableRecord {
        table_no: result.table_no,
        seed: result.table_seed,
        timestamp,
        strategy: strategy.to_string(),
        duration_ms,
        rounds,
        table: result.table,
    }
}

fn build_round_metrics(round_no: u16, round: &Round) -> RoundMetrics {
    let card_points = round.score();
    let game_points = round.final_score();
    RoundMetrics {
        round_no,
        mode: round.mode().to_string(),
        winner: round.winner(),
        re_card_points: card_points.re,
        kontra_card_points: card_points.kontra,
        re_game_points: game_points.re,
        kontra_game_points: game_points.kontra,
        announcements: round
            .announcements()
            .iter()
            .map(|a| a.kind.to_string())
            .collect(),
    }
}

/// Totals across every simulated table.
#[derive(Debug, Default)]
pub struct Summary {
    pub tables: u32,
    pub rounds: u32,
    pub re_wins: u32,
    pub kontra_wins: u32,
    pub undecided: u32,
    re_card_points: u64,
    kontra_card_points: u64,
    pub modes: BTreeMap<String, u32>,
    pub announcements: BTreeMap<String, u32>,
}

impl Summary {
    pub fn record(&mut self, record: &TableRecord) {
        self.tables += 1;
        for round in &record.rounds {
            self.rounds += 1;
            match round.winner {
                Some(Team::Re) => self.re_wins += 1,
                Some(Team::Kontra) => self.kontra_wins += 1,
                _ => self.undecided += 1,
            }
            self.re_card_points += u64::from(round.re_card_points);
            self.kontra_card_points += u64::from(round.kontra_card_points);
            *self.modes.entry(round.mode.clone()).or_default() += 1;
            for kind in &round.announcements {
                *self.announcements.entry(kind.clone()).or_default() += 1;
            }
        }
    }

    pub fn avg_re_card_points(&self) -> f64 {
        average(self.re_card_points, self.rounds)
    }

    pub fn avg_kontra_card_points(&self) -> f64 {
        average(self.kontra_card_points, self.rounds)
    }
}

fn average(total: u64, count: u32) -> f64 {
    if count == 0 {
        0.0
    } else {
        total as f64 / f64::from(count)
    }
}
