use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::announcements::AnnouncementKind;
use crate::domain::rules::{DECK_SIZE, HAND_SIZE, PLAYERS, TOTAL_CARD_POINTS, TRICKS_PER_ROUND};
use crate::domain::state::{Phase, Round};
use crate::domain::teams::{Team, TeamAssignment};
use crate::domain::test_state_helpers::{
    card, ids, pass_all, round_with, seated_players, suited_deal,
};
use crate::domain::variants::{GameMode, VariantBid};
use crate::errors::domain::DomainError;

/// Play the first eligible card until the round ends.
fn play_out(round: &mut Round) {
    while round.phase() == Phase::Playing {
        let player = round.current_player();
        let next = round.eligible_cards()[0];
        round.play_card(player, next).unwrap();
        assert_eq!(round.card_count(), DECK_SIZE);
    }
}

#[test]
fn start_deals_ten_cards_each_and_assigns_teams() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let round = Round::start(&seated_players(), &mut rng).unwrap();

    assert_eq!(round.phase(), Phase::Variant);
    assert_eq!(round.current_player(), round.first_player());
    for player in round.player_ids() {
        assert_eq!(round.hand(player).len(), HAND_SIZE);
    }
    assert!(round.player_teams().is_finalized());
    assert_eq!(round.card_count(), DECK_SIZE);
    assert!(round.eligible_cards().is_empty());
}

#[test]
fn same_seed_same_round() {
    let players = seated_players();
    let a = Round::start(&players, &mut ChaCha8Rng::seed_from_u64(7)).unwrap();
    let b = Round::start(&players, &mut ChaCha8Rng::seed_from_u64(7)).unwrap();
    assert_eq!(a.hands(), b.hands());
    assert_eq!(a.first_player(), b.first_player());
    assert_eq!(a.player_teams(), b.player_teams());
}

#[test]
fn start_rejects_bad_player_lists() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut players = seated_players();
    players.pop();
    assert_eq!(
        Round::start(&players, &mut rng).unwrap_err(),
        DomainError::InvalidPlayerCount {
            expected: PLAYERS,
            actual: 3
        }
    );
    let mut players = seated_players();
    players[3].uuid = players[0].uuid;
    assert!(matches!(
        Round::start(&players, &mut rng),
        Err(DomainError::DuplicatePlayer { .. })
    ));
}

#[test]
fn with_deal_rejects_incomplete_decks() {
    let mut deal = suited_deal();
    deal[0][0] = card("AH");
    let players = seated_players();
    let ids = ids(&players);
    let teams = TeamAssignment::with_re(&ids, [ids[0], ids[1]]);
    assert!(matches!(
        Round::with_deal(&players, deal, 0, teams),
        Err(DomainError::InvalidDeal { .. })
    ));
}

#[test]
fn nominations_go_round_the_table() {
    let (mut round, [p1, p2, p3, p4]) = round_with(suited_deal(), 2, [0, 1]);
    assert_eq!(round.current_player(), p3);
    assert!(matches!(
        round.nominate_variant(p1, VariantBid::Pass),
        Err(DomainError::NotYourTurn { .. })
    ));
    for p in [p3, p4, p1] {
        round.nominate_variant(p, VariantBid::Normal).unwrap();
        assert_eq!(round.phase(), Phase::Variant);
    }
    round.nominate_variant(p2, VariantBid::Pass).unwrap();
    assert_eq!(round.phase(), Phase::Playing);
    assert_eq!(round.mode(), GameMode::Normal);
    // First player leads trick one.
    assert_eq!(round.current_player(), p3);
    assert_eq!(round.eligible_cards().len(), HAND_SIZE);
}

#[test]
fn solo_moves_soloist_to_re_and_leads() {
    // P3 and P4 start as kontra.
    let (mut round, [p1, p2, p3, p4]) = round_with(suited_deal(), 0, [0, 1]);
    round.nominate_variant(p1, VariantBid::Pass).unwrap();
    round.nominate_variant(p2, VariantBid::Normal).unwrap();
    round.nominate_variant(p3, VariantBid::Solo).unwrap();
    round.nominate_variant(p4, VariantBid::Solo).unwrap();

    assert_eq!(round.mode(), GameMode::Solo);
    assert_eq!(round.player_teams().team_of(p3), Team::Re);
    assert_eq!(round.player_teams().members(Team::Re).len(), 2);
    assert_eq!(round.player_teams().members(Team::Kontra).len(), 2);
    assert_eq!(round.current_player(), p3);
}

#[test]
fn armut_needs_few_trumps() {
    // P4 holds ten trumps.
    let (mut round, [.., p4]) = round_with(suited_deal(), 3, [0, 1]);
    let err = round.nominate_variant(p4, VariantBid::Armut).unwrap_err();
    assert!(matches!(err, DomainError::IneligibleVariant { .. }));
    assert!(round.variant_nominations().is_empty());
    assert_eq!(round.current_player(), p4);
}

#[test]
fn operations_in_the_wrong_phase_are_rejected() {
    let (mut round, [p1, ..]) = round_with(suited_deal(), 0, [0, 1]);
    assert_eq!(
        round.play_card(p1, card("QC")).unwrap_err(),
        DomainError::PhaseMismatch {
            operation: "play_card",
            phase: Phase::Variant
        }
    );
    assert!(matches!(
        round.announce(p1, AnnouncementKind::Re),
        Err(DomainError::PhaseMismatch { .. })
    ));
    assert!(matches!(
        round.respond_to_poverty(p1, true),
        Err(DomainError::PhaseMismatch { .. })
    ));
}

#[test]
fn full_round_scores_and_freezes() {
    let (mut round, [p1, ..]) = round_with(suited_deal(), 0, [0, 1]);
    pass_all(&mut round);
    round.announce(p1, AnnouncementKind::Re).unwrap();
    play_out(&mut round);

    assert_eq!(round.phase(), Phase::Complete);
    assert_eq!(round.tricks().len(), TRICKS_PER_ROUND);
    for trick in round.tricks() {
        assert_eq!(trick.plays.len(), PLAYERS);
        let mut who: Vec<_> = trick.plays.iter().map(|p| p.player).collect();
        who.sort();
        who.dedup();
        assert_eq!(who.len(), PLAYERS);
    }
    assert_eq!(round.tricks()[0].leader(), Some(p1));
    for pair in round.tricks().windows(2) {
        assert_eq!(pair[1].leader(), Some(pair[0].winner));
    }
    assert!(round.hands().values().all(Vec::is_empty));
    assert_eq!(round.score().total(), TOTAL_CARD_POINTS);
    assert!(round.end_time().is_some());
    assert!(round.eligible_cards().is_empty());

    let frozen = round.clone();
    assert_eq!(
        round.play_card(p1, card("QC")).unwrap_err(),
        DomainError::RoundAlreadyComplete
    );
    assert_eq!(
        round.nominate_variant(p1, VariantBid::Pass).unwrap_err(),
        DomainError::RoundAlreadyComplete
    );
    assert_eq!(
        round.announce(p1, AnnouncementKind::No90).unwrap_err(),
        DomainError::RoundAlreadyComplete
    );
    assert_eq!(
        round.hand_over_poverty_cards(p1, &[]).unwrap_err(),
        DomainError::RoundAlreadyComplete
    );
    assert_eq!(
        round.respond_to_poverty(p1, true).unwrap_err(),
        DomainError::RoundAlreadyComplete
    );
    assert_eq!(
        round.return_poverty_cards(p1, &[]).unwrap_err(),
        DomainError::RoundAlreadyComplete
    );
    assert_eq!(round, frozen);
}

#[test]
fn solo_round_scores_with_soloist_on_re() {
    // P1 and P2 start as re; P3's solo displaces P1.
    let (mut round, [p1, p2, p3, p4]) = round_with(suited_deal(), 0, [0, 1]);
    for (p, bid) in [
        (p1, VariantBid::Pass),
        (p2, VariantBid::Pass),
        (p3, VariantBid::Solo),
        (p4, VariantBid::Pass),
    ] {
        round.nominate_variant(p, bid).unwrap();
    }
    assert_eq!(round.current_player(), p3);
    play_out(&mut round);

    assert_eq!(round.phase(), Phase::Complete);
    assert_eq!(round.mode(), GameMode::Solo);
    assert_eq!(round.player_teams().members(Team::Re), vec![p2, p3]);
    assert_eq!(round.player_teams().members(Team::Kontra), vec![p1, p4]);
    assert_eq!(round.tricks()[0].leader(), Some(p3));

    let re_points: u16 = round
        .tricks()
        .iter()
        .filter(|t| round.player_teams().team_of(t.winner) == Team::Re)
        .map(|t| t.points())
        .sum();
    let score = round.score();
    assert_eq!(score.re, re_points);
    assert_eq!(score.total(), TOTAL_CARD_POINTS);

    let winner = if score.re > TOTAL_CARD_POINTS / 2 {
        Team::Re
    } else {
        Team::Kontra
    };
    assert_eq!(round.winner(), Some(winner));
    let game_points = round.final_score();
    assert!(game_points.get(winner) >= 1);
    assert_eq!(game_points.get(winner.opponent()), 0);
}

#[test]
fn deserializing_rejects_inconsistent_rounds() {
    let (mut round, [p1, ..]) = round_with(suited_deal(), 0, [0, 1]);
    pass_all(&mut round);
    round.play_card(p1, card("QC")).unwrap();
    let json = serde_json::to_value(&round).unwrap();

    let mut rewound = json.clone();
    rewound["phase"] = "variant".into();
    assert!(serde_json::from_value::<Round>(rewound).is_err());

    let mut lopsided = json.clone();
    for id in round.player_ids() {
        lopsided["player_teams"][id.to_string()] = "re".into();
    }
    assert!(serde_json::from_value::<Round>(lopsided).is_err());

    let mut short = json;
    short["hands"][p1.to_string()]
        .as_array_mut()
        .unwrap()
        .pop();
    let err = serde_json::from_value::<Round>(short).unwrap_err();
    assert!(err.to_string().contains("cards in play"), "{err}");
}

#[test]
fn round_serializes_with_card_tokens() {
    let (mut round, [p1, ..]) = round_with(suited_deal(), 0, [0, 1]);
    pass_all(&mut round);
    round.play_card(p1, card("QC")).unwrap();

    let json = serde_json::to_value(&round).unwrap();
    assert_eq!(json["phase"], "playing");
    assert_eq!(json["mode"], "normal");
    assert_eq!(json["hands"][p1.to_string()].as_array().unwrap().len(), 9);
    assert_eq!(json["current_trick"][0]["card"]["rank"], "queen");
    assert_eq!(json["player_teams"][p1.to_string()], "re");

    let back: Round = serde_json::from_value(json).unwrap();
    assert_eq!(back.hands(), round.hands());
    assert_eq!(back.current_trick(), round.current_trick());
    assert_eq!(back.player_teams(), round.player_teams());
    assert_eq!(back.eligible_cards(), round.eligible_cards());
}
