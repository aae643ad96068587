use serde::{Deserialize, Serialize};

use crate::domain::announcements::{strongest_claim, Announcement, AnnouncementKind};
use crate::domain::rules::HALF_CARD_POINTS;
use crate::domain::teams::{Team, TeamAssignment};
use crate::domain::tricks::Trick;

/// Points per team; used for both card points and game points.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TeamPoints {
    pub re: u16,
    pub kontra: u16,
}

impl TeamPoints {
    pub fn get(&self, team: Team) -> u16 {
        match team {
            Team::Re => self.re,
            Team::Kontra => self.kontra,
            Team::Unknown => 0,
        }
    }

    fn add(&mut self, team: Team, points: u16) {
        match team {
            Team::Re => self.re += points,
            Team::Kontra => self.kontra += points,
            Team::Unknown => {}
        }
    }

    pub fn total(&self) -> u16 {
        self.re + self.kontra
    }
}

/// Card points and trick counts collected by each team.
pub fn card_points(tricks: &[Trick], teams: &TeamAssignment) -> (TeamPoints, TeamPoints) {
    let mut points = TeamPoints::default();
    let mut won = TeamPoints::default();
    for trick in tricks {
        let team = teams.team_of(trick.winner);
        points.add(team, trick.points());
        won.add(team, 1);
    }
    (points, won)
}

/// Whether `team` met the goal implied by its announcements.
fn requirement_met(
    team: Team,
    points: TeamPoints,
    tricks_won: TeamPoints,
    announcements: &[Announcement],
) -> bool {
    let opponent = team.opponent();
    match strongest_claim(team, announcements) {
        Some(AnnouncementKind::Schwarz) => tricks_won.get(opponent) == 0,
        Some(claim) => match claim.opponent_limit() {
            Some(limit) => points.get(opponent) < limit,
            None => false,
        },
        None if team == Team::Re => points.re > HALF_CARD_POINTS,
        None => points.kontra >= HALF_CARD_POINTS,
    }
}

/// Winner and game points of a finished round.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RoundResult {
    pub winner: Option<Team>,
    pub game_points: TeamPoints,
}

pub fn evaluate(
    points: TeamPoints,
    tricks_won: TeamPoints,
    announcements: &[Announcement],
) -> RoundResult {
    let winner = [Team::Re, Team::Kontra]
        .into_iter()
        .find(|&t| requirement_met(t, points, tricks_won, announcements));

    let mut game_points = TeamPoints::default();
    if let Some(team) = winner {
        let loser = team.opponent();
        let loser_points = points.get(loser);
        let mut total = 1;
        if team == Team::Kontra {
            total += 1;
        }
        total += [90, 60, 30]
            .into_iter()
            .filter(|&limit| loser_points < limit)
            .count() as u16;
        if tricks_won.get(loser) == 0 {
            total += 1;
        }
        total += announcements.iter().map(|a| a.kind.bonus()).sum::<u16>();
        game_points.add(team, total);
    }
    RoundResult {
        winner,
        game_points,
    }
}
