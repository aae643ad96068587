//! Announcements (re, kontra and the no-X calls).
//!
//! An announcement is made by the player whose turn it is. `trick_number`
//! counts completed tricks at the time of the call.

use std::fmt;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::teams::Team;
use crate::domain::PlayerId;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnouncementKind {
    Re,
    Kontra,
    No90,
    No60,
    No30,
    Schwarz,
}

impl AnnouncementKind {
    pub const ALL: [AnnouncementKind; 6] = [
        AnnouncementKind::Re,
        AnnouncementKind::Kontra,
        AnnouncementKind::No90,
        AnnouncementKind::No60,
        AnnouncementKind::No30,
        AnnouncementKind::Schwarz,
    ];

    /// Last trick number at which this call is still allowed.
    pub const fn deadline(self) -> u8 {
        match self {
            AnnouncementKind::Re | AnnouncementKind::Kontra => 0,
            AnnouncementKind::No90 => 1,
            AnnouncementKind::No60 => 2,
            AnnouncementKind::No30 => 3,
            AnnouncementKind::Schwarz => 4,
        }
    }

    pub const fn is_team_call(self) -> bool {
        matches!(self, AnnouncementKind::Re | AnnouncementKind::Kontra)
    }

    /// Card-point limit the opponents must stay below, for no-X calls.
    pub const fn opponent_limit(self) -> Option<u16> {
        match self {
            AnnouncementKind::No90 => Some(90),
            AnnouncementKind::No60 => Some(60),
            AnnouncementKind::No30 => Some(30),
            _ => None,
        }
    }

    /// The call a team must already have made before this one.
    fn prerequisite(self, team: Team) -> Option<AnnouncementKind> {
        match self {
            AnnouncementKind::Re | AnnouncementKind::Kontra => None,
            AnnouncementKind::No90 => match team {
                Team::Kontra => Some(AnnouncementKind::Kontra),
                _ => Some(AnnouncementKind::Re),
            },
            AnnouncementKind::No60 => Some(AnnouncementKind::No90),
            AnnouncementKind::No30 => Some(AnnouncementKind::No60),
            AnnouncementKind::Schwarz => Some(AnnouncementKind::No30),
        }
    }

    /// Game points this call adds to the winner's tally.
    pub const fn bonus(self) -> u16 {
        if self.is_team_call() {
            2
        } else {
            1
        }
    }
}

impl fmt::Display for AnnouncementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AnnouncementKind::Re => "re",
            AnnouncementKind::Kontra => "kontra",
            AnnouncementKind::No90 => "no90",
            AnnouncementKind::No60 => "no60",
            AnnouncementKind::No30 => "no30",
            AnnouncementKind::Schwarz => "schwarz",
        })
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Announcement {
    pub player: PlayerId,
    pub team: Team,
    #[serde(rename = "type")]
    pub kind: AnnouncementKind,
    pub trick_number: u8,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

/// Check a call against the round's earlier announcements.
///
/// Returns the reason on rejection; the caller attaches player context.
pub fn check_announcement(
    kind: AnnouncementKind,
    team: Team,
    trick_number: u8,
    prior: &[Announcement],
) -> Result<(), &'static str> {
    let team_call = match team {
        Team::Re => AnnouncementKind::Re,
        Team::Kontra => AnnouncementKind::Kontra,
        Team::Unknown => return Err("team not yet known"),
    };
    if kind.is_team_call() && kind != team_call {
        return Err("call belongs to the other team");
    }
    if trick_number > kind.deadline() {
        return Err("too late in the round");
    }
    let made = |k: AnnouncementKind| prior.iter().any(|a| a.team == team && a.kind == k);
    if made(kind) {
        return Err("already announced");
    }
    if let Some(required) = kind.prerequisite(team) {
        if !made(required) {
            return Err("previous announcement missing");
        }
    }
    Ok(())
}

/// Calls `team` could make right now.
pub fn eligible_announcements(
    team: Team,
    trick_number: u8,
    prior: &[Announcement],
) -> Vec<AnnouncementKind> {
    AnnouncementKind::ALL
        .into_iter()
        .filter(|&k| check_announcement(k, team, trick_number, prior).is_ok())
        .collect()
}

/// Strongest no-X call made by `team`, if any.
pub fn strongest_claim(team: Team, announcements: &[Announcement]) -> Option<AnnouncementKind> {
    announcements
        .iter()
        .filter(|a| a.team == team && !a.kind.is_team_call())
        .map(|a| a.kind)
        .max_by_key(|k| k.deadline())
}
