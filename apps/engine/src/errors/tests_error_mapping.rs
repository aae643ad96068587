// Error category and code mapping for domain errors.
use uuid::Uuid;

use crate::domain::state::Phase;
use crate::domain::Card;
use crate::errors::{DomainError, ErrorCategory, ErrorCode};

#[test]
fn maps_turn_discipline() {
    let player = Uuid::new_v4();
    let card: Card = "QC".parse().unwrap();

    let err = DomainError::NotYourTurn {
        player,
        expected: Uuid::new_v4(),
    };
    assert_eq!(err.category(), ErrorCategory::TurnDiscipline);
    assert_eq!(err.code(), ErrorCode::OutOfTurn);

    let err = DomainError::IneligibleCard {
        player,
        card,
        trick_no: 2,
    };
    assert_eq!(err.category(), ErrorCategory::TurnDiscipline);
    assert_eq!(err.code().as_str(), "MUST_FOLLOW_SUIT");
    assert!(err.to_string().contains("QC"));
}

#[test]
fn maps_protocol_sequencing() {
    let err = DomainError::PhaseMismatch {
        operation: "play_card",
        phase: Phase::Variant,
    };
    assert_eq!(err.category(), ErrorCategory::ProtocolSequencing);
    assert_eq!(err.to_string(), "play_card is not allowed in phase variant");
    assert_eq!(
        DomainError::RoundAlreadyComplete.code().to_string(),
        "ROUND_ALREADY_COMPLETE"
    );
}

#[test]
fn maps_construction_and_invariants() {
    assert_eq!(
        DomainError::InvalidRoundCount.category(),
        ErrorCategory::Construction
    );
    assert_eq!(
        DomainError::InvalidPlayerCount {
            expected: 4,
            actual: 3
        }
        .to_string(),
        "expected 4 players, got 3"
    );
    let err = DomainError::InvariantViolation("cards lost".into());
    assert_eq!(err.category(), ErrorCategory::Invariant);
    assert_eq!(err.code(), ErrorCode::InvariantViolation);
}
