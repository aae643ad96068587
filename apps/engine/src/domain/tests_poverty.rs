use crate::domain::poverty::PovertyStage;
use crate::domain::rules::{DECK_SIZE, HAND_SIZE};
use crate::domain::state::{Phase, Round};
use crate::domain::teams::Team;
use crate::domain::test_state_helpers::{hand, round_with, suited_deal};
use crate::domain::variants::{GameMode, VariantBid};
use crate::domain::PlayerId;
use crate::errors::domain::DomainError;

/// P1 (two trumps) calls armut, everyone else passes. Re starts as P1 + P2.
fn armut_round() -> (Round, [PlayerId; 4]) {
    let (mut round, ids) = round_with(suited_deal(), 0, [0, 1]);
    let [p1, p2, p3, p4] = ids;
    round.nominate_variant(p1, VariantBid::Armut).unwrap();
    for p in [p2, p3, p4] {
        round.nominate_variant(p, VariantBid::Pass).unwrap();
    }
    (round, ids)
}

#[test]
fn armut_opens_the_exchange() {
    let (round, [p1, ..]) = armut_round();
    assert_eq!(round.phase(), Phase::Armut);
    assert_eq!(round.mode(), GameMode::Armut);
    assert_eq!(round.current_player(), p1);
    let exchange = round.poverty().unwrap();
    assert_eq!(exchange.poor, p1);
    assert_eq!(exchange.stage, PovertyStage::AwaitingCards);
}

#[test]
fn hand_over_must_contain_all_trumps() {
    let (mut round, [p1, ..]) = armut_round();
    let err = round
        .hand_over_poverty_cards(p1, &hand("QC AC TC"))
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidExchange { player, .. } if player == p1));
    assert_eq!(round.hand(p1).len(), HAND_SIZE);

    assert!(round.hand_over_poverty_cards(p1, &hand("QC QC")).is_err());
    assert_eq!(round.poverty().unwrap().stage, PovertyStage::AwaitingCards);
}

#[test]
fn first_acceptor_partners_the_poor_player() {
    let (mut round, [p1, p2, p3, p4]) = armut_round();
    round.hand_over_poverty_cards(p1, &hand("QC QC JC")).unwrap();
    assert_eq!(round.hand(p1).len(), HAND_SIZE - 3);
    assert_eq!(round.card_count(), DECK_SIZE);
    assert_eq!(round.current_player(), p2);

    assert!(matches!(
        round.respond_to_poverty(p4, true),
        Err(DomainError::NotYourTurn { .. })
    ));
    round.respond_to_poverty(p2, false).unwrap();
    round.respond_to_poverty(p3, true).unwrap();
    assert_eq!(round.hand(p3).len(), HAND_SIZE + 3);
    assert_eq!(round.current_player(), p3);
    assert_eq!(round.poverty().unwrap().stage, PovertyStage::AwaitingReturn);

    assert!(matches!(
        round.return_poverty_cards(p3, &hand("TS TS")),
        Err(DomainError::InvalidExchange { .. })
    ));
    round.return_poverty_cards(p3, &hand("TS TS QC")).unwrap();

    assert_eq!(round.phase(), Phase::Playing);
    assert_eq!(round.hand(p1).len(), HAND_SIZE);
    assert_eq!(round.hand(p3).len(), HAND_SIZE);
    assert_eq!(round.player_teams().team_of(p1), Team::Re);
    assert_eq!(round.player_teams().team_of(p3), Team::Re);
    assert_eq!(round.player_teams().team_of(p2), Team::Kontra);
    assert_eq!(round.current_player(), p1);
    assert_eq!(round.poverty().unwrap().stage, PovertyStage::Accepted);
    assert_eq!(round.card_count(), DECK_SIZE);
}

#[test]
fn all_declines_fall_back_to_normal() {
    let (mut round, [p1, p2, p3, p4]) = armut_round();
    let before = round.hand(p1).to_vec();
    round.hand_over_poverty_cards(p1, &hand("QC QC JC")).unwrap();
    for p in [p2, p3, p4] {
        round.respond_to_poverty(p, false).unwrap();
    }

    assert_eq!(round.mode(), GameMode::Normal);
    assert_eq!(round.phase(), Phase::Playing);
    assert_eq!(round.poverty().unwrap().stage, PovertyStage::Declined);
    let mut after = round.hand(p1).to_vec();
    let mut expected = before;
    after.sort();
    expected.sort();
    assert_eq!(after, expected);
    // Original teams stand.
    assert_eq!(round.player_teams().team_of(p2), Team::Re);
    assert_eq!(round.current_player(), round.first_player());
}
