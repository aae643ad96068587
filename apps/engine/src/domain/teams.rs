//! Team assignment: which two players form "re" and which two "kontra".

use std::collections::BTreeMap;
use std::fmt;

use rand::seq::index;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::rules::PLAYERS;
use crate::domain::PlayerId;
use crate::errors::domain::DomainError;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Re,
    Kontra,
    /// Between the deal and team assignment, and for players not seated.
    Unknown,
}

impl Team {
    pub fn opponent(self) -> Team {
        match self {
            Team::Re => Team::Kontra,
            Team::Kontra => Team::Re,
            Team::Unknown => Team::Unknown,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Team::Re => "re",
            Team::Kontra => "kontra",
            Team::Unknown => "unknown",
        })
    }
}

/// Player → team mapping for one round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamAssignment(BTreeMap<PlayerId, Team>);

impl TeamAssignment {
    /// Every player starts out as `Unknown`.
    pub fn unknown(players: &[PlayerId]) -> Self {
        Self(players.iter().map(|&p| (p, Team::Unknown)).collect())
    }

    /// `re` members are re, every other listed player is kontra.
    pub fn with_re(players: &[PlayerId], re: [PlayerId; 2]) -> Self {
        Self(
            players
                .iter()
                .map(|&p| (p, if re.contains(&p) { Team::Re } else { Team::Kontra }))
                .collect(),
        )
    }

    pub fn team_of(&self, player: PlayerId) -> Team {
        self.0.get(&player).copied().unwrap_or(Team::Unknown)
    }

    pub fn members(&self, team: Team) -> Vec<PlayerId> {
        self.0
            .iter()
            .filter(|(_, t)| **t == team)
            .map(|(&p, _)| p)
            .collect()
    }

    /// Exactly two re, two kontra, nobody unknown.
    pub fn is_finalized(&self) -> bool {
        self.0.len() == PLAYERS
            && self.members(Team::Re).len() == 2
            && self.members(Team::Kontra).len() == 2
    }

    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, Team)> + '_ {
        self.0.iter().map(|(&p, &t)| (p, t))
    }

    /// Put `player` on re, swapping a re member onto kontra if needed.
    /// Keeps the two-per-team split intact.
    pub(crate) fn move_to_re(&mut self, player: PlayerId) {
        if self.team_of(player) == Team::Re {
            return;
        }
        // Prefer the lowest id for a deterministic swap.
        if let Some(&displaced) = self.members(Team::Re).first() {
            self.0.insert(displaced, Team::Kontra);
        }
        self.0.insert(player, Team::Re);
    }
}

/// Pick two of the four players uniformly at random for re.
pub fn assign_teams<R: Rng + ?Sized>(
    players: &[PlayerId],
    rng: &mut R,
) -> Result<TeamAssignment, DomainError> {
    if players.len() != PLAYERS {
        return Err(DomainError::InvalidPlayerCount {
            expected: PLAYERS,
            actual: players.len(),
        });
    }
    ensure_distinct(players)?;
    let picked = index::sample(rng, PLAYERS, 2);
    let re = [players[picked.index(0)], players[picked.index(1)]];
    Ok(TeamAssignment::with_re(players, re))
}

pub(crate) fn ensure_distinct(players: &[PlayerId]) -> Result<(), DomainError> {
    for (i, p) in players.iter().enumerate() {
        if players[..i].contains(p) {
            return Err(DomainError::DuplicatePlayer { player: *p });
        }
    }
    Ok(())
}
