use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::announcements::{Announcement, AnnouncementKind};
use crate::domain::scoring::{card_points, evaluate, TeamPoints};
use crate::domain::teams::{Team, TeamAssignment};
use crate::domain::test_state_helpers::card;
use crate::domain::tricks::{Play, Trick};

fn pts(re: u16, kontra: u16) -> TeamPoints {
    TeamPoints { re, kontra }
}

fn call(team: Team, kind: AnnouncementKind) -> Announcement {
    Announcement {
        player: Uuid::nil(),
        team,
        kind,
        trick_number: 0,
        timestamp: OffsetDateTime::UNIX_EPOCH,
    }
}

#[test]
fn re_needs_more_than_half() {
    let result = evaluate(pts(121, 119), pts(6, 4), &[]);
    assert_eq!(result.winner, Some(Team::Re));
    assert_eq!(result.game_points, pts(1, 0));
}

#[test]
fn kontra_wins_a_tie_against_the_old_ones() {
    let result = evaluate(pts(120, 120), pts(5, 5), &[]);
    assert_eq!(result.winner, Some(Team::Kontra));
    assert_eq!(result.game_points, pts(0, 2));
}

#[test]
fn shutout_collects_every_bonus() {
    let result = evaluate(pts(240, 0), pts(10, 0), &[]);
    assert_eq!(result.winner, Some(Team::Re));
    // win + below 90/60/30 + no trick
    assert_eq!(result.game_points, pts(5, 0));
}

#[test]
fn announcements_add_to_the_winner() {
    let calls = [
        call(Team::Re, AnnouncementKind::Re),
        call(Team::Kontra, AnnouncementKind::Kontra),
    ];
    let result = evaluate(pts(150, 90), pts(7, 3), &calls);
    assert_eq!(result.game_points, pts(5, 0));
}

#[test]
fn failed_no_call_leaves_nobody_winning() {
    let calls = [
        call(Team::Re, AnnouncementKind::Re),
        call(Team::Re, AnnouncementKind::No90),
    ];
    let result = evaluate(pts(140, 100), pts(6, 4), &calls);
    assert_eq!(result.winner, None);
    assert_eq!(result.game_points, pts(0, 0));
}

#[test]
fn schwarz_requires_every_trick() {
    let calls = [
        call(Team::Kontra, AnnouncementKind::Kontra),
        call(Team::Kontra, AnnouncementKind::No90),
        call(Team::Kontra, AnnouncementKind::No60),
        call(Team::Kontra, AnnouncementKind::No30),
        call(Team::Kontra, AnnouncementKind::Schwarz),
    ];
    // Re took one trick worth nothing.
    let missed = evaluate(pts(0, 240), pts(1, 9), &calls);
    assert_eq!(missed.winner, None);

    let made = evaluate(pts(0, 240), pts(0, 10), &calls);
    assert_eq!(made.winner, Some(Team::Kontra));
    // 1 + 1 against re + 3 thresholds + no trick + 2 + 4 announcements
    assert_eq!(made.game_points, pts(0, 12));
}

#[test]
fn card_points_follow_trick_winners() {
    let (a, b, c, d) = (
        Uuid::from_u128(1),
        Uuid::from_u128(2),
        Uuid::from_u128(3),
        Uuid::from_u128(4),
    );
    let teams = TeamAssignment::with_re(&[a, b, c, d], [a, c]);
    let trick = |winner, cards: [&str; 4]| Trick {
        plays: [a, b, c, d]
            .into_iter()
            .zip(cards)
            .map(|(player, t)| Play {
                player,
                card: card(t),
            })
            .collect(),
        winner,
    };
    let tricks = [
        trick(a, ["AH", "TH", "KH", "QH"]),
        trick(b, ["JS", "QS", "KS", "AS"]),
    ];
    let (points, won) = card_points(&tricks, &teams);
    assert_eq!(points, pts(28, 20));
    assert_eq!(won, pts(1, 1));
}
