use crate::domain::announcements::AnnouncementKind;
use crate::domain::state::Round;
use crate::domain::teams::Team;
use crate::domain::test_state_helpers::{pass_all, round_with, suited_deal};
use crate::domain::PlayerId;
use crate::errors::domain::DomainError;

/// Playing round; P1 + P2 re, P1 leads.
fn playing_round() -> (Round, [PlayerId; 4]) {
    let (mut round, ids) = round_with(suited_deal(), 0, [0, 1]);
    pass_all(&mut round);
    (round, ids)
}

fn play_trick(round: &mut Round) {
    for _ in 0..4 {
        let p = round.current_player();
        let c = round.eligible_cards()[0];
        round.play_card(p, c).unwrap();
    }
}

#[test]
fn re_member_announces_re_before_first_trick() {
    let (mut round, [p1, p2, ..]) = playing_round();
    round.announce(p1, AnnouncementKind::Re).unwrap();
    let made = &round.announcements()[0];
    assert_eq!(made.player, p1);
    assert_eq!(made.trick_number, 0);

    // Only the player on turn may announce.
    assert!(matches!(
        round.announce(p2, AnnouncementKind::No90),
        Err(DomainError::NotYourTurn { .. })
    ));
    // Same team cannot repeat.
    assert!(matches!(
        round.announce(p1, AnnouncementKind::Re),
        Err(DomainError::IneligibleAnnouncement { .. })
    ));
    round.announce(p1, AnnouncementKind::No90).unwrap();
    assert_eq!(round.announcements().len(), 2);
}

#[test]
fn kontra_is_not_for_re_players() {
    let (mut round, [p1, ..]) = playing_round();
    let err = round.announce(p1, AnnouncementKind::Kontra).unwrap_err();
    assert_eq!(
        err,
        DomainError::IneligibleAnnouncement {
            player: p1,
            kind: AnnouncementKind::Kontra,
            trick_no: 0,
            reason: "call belongs to the other team",
        }
    );
    assert!(round.announcements().is_empty());
}

#[test]
fn team_calls_close_after_the_first_trick() {
    let (mut round, _) = playing_round();
    play_trick(&mut round);
    let leader = round.current_player();
    let own_call = match round.player_teams().team_of(leader) {
        Team::Re => AnnouncementKind::Re,
        _ => AnnouncementKind::Kontra,
    };
    assert_eq!(
        round.announce(leader, own_call).unwrap_err(),
        DomainError::IneligibleAnnouncement {
            player: leader,
            kind: own_call,
            trick_no: 1,
            reason: "too late in the round",
        }
    );
    assert!(round.eligible_announcements(leader).is_empty());
}
