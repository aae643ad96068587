//! A table: four seats, a configured number of rounds and the rounds played.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::rules::PLAYERS;
use crate::domain::state::Round;
use crate::domain::teams::ensure_distinct;
use crate::domain::Player;
use crate::errors::domain::DomainError;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableStatus {
    /// Seating players, or between rounds.
    Waiting,
    Playing,
    /// All configured rounds played. Terminal.
    Closed,
}

impl fmt::Display for TableStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TableStatus::Waiting => "waiting",
            TableStatus::Playing => "playing",
            TableStatus::Closed => "closed",
        })
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TableFields")]
pub struct Table {
    name: String,
    players: Vec<Player>,
    status: TableStatus,
    num_rounds: u16,
    rounds: Vec<Round>,
}

impl Table {
    pub fn new(name: impl Into<String>, num_rounds: u16) -> Result<Self, DomainError> {
        if num_rounds == 0 {
            return Err(DomainError::InvalidRoundCount);
        }
        Ok(Self {
            name: name.into(),
            players: Vec::with_capacity(PLAYERS),
            status: TableStatus::Waiting,
            num_rounds,
            rounds: Vec::new(),
        })
    }

    /// Create a table, seat `players` and start it.
    pub fn with_players(
        name: impl Into<String>,
        num_rounds: u16,
        players: impl IntoIterator<Item = Player>,
    ) -> Result<Self, DomainError> {
        let mut table = Self::new(name, num_rounds)?;
        for player in players {
            table.seat_player(player)?;
        }
        table.start()?;
        Ok(table)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn status(&self) -> TableStatus {
        self.status
    }

    pub fn num_rounds(&self) -> u16 {
        self.num_rounds
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// Closed once the configured number of rounds has been played.
    pub fn is_closed(&self) -> bool {
        self.status == TableStatus::Closed || self.rounds.len() >= usize::from(self.num_rounds)
    }

    pub fn rounds_remaining(&self) -> u16 {
        self.num_rounds.saturating_sub(self.rounds.len() as u16)
    }

    pub fn seat_player(&mut self, player: Player) -> Result<(), DomainError> {
        if self.is_closed() {
            return Err(DomainError::TableClosed {
                table: self.name.clone(),
            });
        }
        if self.players.iter().any(|p| p.uuid == player.uuid) {
            return Err(DomainError::AlreadySeated {
                table: self.name.clone(),
                player: player.uuid,
            });
        }
        if self.players.len() >= PLAYERS {
            return Err(DomainError::TableFull {
                table: self.name.clone(),
            });
        }
        debug!(table = %self.name, player = %player.uuid, seat = self.players.len(), "Player seated");
        self.players.push(player);
        Ok(())
    }

    /// Waiting → playing once all four seats are taken.
    pub fn start(&mut self) -> Result<(), DomainError> {
        if self.is_closed() {
            return Err(DomainError::TableClosed {
                table: self.name.clone(),
            });
        }
        if self.players.len() != PLAYERS {
            return Err(DomainError::InvalidPlayerCount {
                expected: PLAYERS,
                actual: self.players.len(),
            });
        }
        self.status = TableStatus::Playing;
        Ok(())
    }

    /// Append a finished round and settle the status.
    pub(crate) fn record_round(&mut self, round: Round) {
        self.rounds.push(round);
        self.status = if self.rounds.len() >= usize::from(self.num_rounds) {
            TableStatus::Closed
        } else {
            TableStatus::Waiting
        };
    }

    pub(crate) fn mark_playing(&mut self) {
        if !self.is_closed() {
            self.status = TableStatus::Playing;
        }
    }
}

/// Wire form of [`Table`]; checked before it becomes one.
#[derive(Deserialize)]
struct TableFields {
    name: String,
    players: Vec<Player>,
    status: TableStatus,
    num_rounds: u16,
    rounds: Vec<Round>,
}

impl TryFrom<TableFields> for Table {
    type Error = DomainError;

    fn try_from(fields: TableFields) -> Result<Self, Self::Error> {
        if fields.num_rounds == 0 {
            return Err(DomainError::InvalidRoundCount);
        }
        if fields.players.len() > PLAYERS {
            return Err(DomainError::InvalidPlayerCount {
                expected: PLAYERS,
                actual: fields.players.len(),
            });
        }
        let ids: Vec<_> = fields.players.iter().map(|p| p.uuid).collect();
        ensure_distinct(&ids)?;

        let played = fields.rounds.len();
        let configured = usize::from(fields.num_rounds);
        if played > configured {
            return Err(DomainError::InvariantViolation(format!(
                "table {} has {played} rounds, configured for {configured}",
                fields.name
            )));
        }
        if (fields.status == TableStatus::Closed) != (played == configured) {
            return Err(DomainError::InvariantViolation(format!(
                "table {} is {} after {played} of {configured} rounds",
                fields.name, fields.status
            )));
        }
        if fields.status == TableStatus::Playing && fields.players.len() != PLAYERS {
            return Err(DomainError::InvalidPlayerCount {
                expected: PLAYERS,
                actual: fields.players.len(),
            });
        }
        if !played_rounds_complete(&fields.rounds) {
            return Err(DomainError::InvariantViolation(format!(
                "table {} records an unfinished round",
                fields.name
            )));
        }

        Ok(Self {
            name: fields.name,
            players: fields.players,
            status: fields.status,
            num_rounds: fields.num_rounds,
            rounds: fields.rounds,
        })
    }
}

fn played_rounds_complete(rounds: &[Round]) -> bool {
    rounds.iter().all(Round::is_complete)
}
