//! Stable error codes for engine failures.
//!
//! Every [`DomainError`](super::DomainError) maps to exactly one code. The
//! strings are SCREAMING_SNAKE_CASE and are what the simulator writes into
//! its records when a table aborts.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Construction
    InvalidDeal,
    InvalidPlayerCount,
    DuplicatePlayer,
    InvalidRoundCount,
    TableFull,
    AlreadySeated,
    TableClosed,
    ParseCard,

    // Turn discipline
    /// Acting player is not the one whose turn it is
    OutOfTurn,
    CardNotInHand,
    /// Card does not follow the led suit although the hand could
    MustFollowSuit,
    IneligibleVariant,
    InvalidExchange,
    IneligibleAnnouncement,

    // Protocol sequencing
    RoundAlreadyComplete,
    PhaseMismatch,

    // Invariants
    HandExhausted,
    InvariantViolation,

    /// A player strategy failed to produce a decision
    StrategyFailed,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidDeal => "INVALID_DEAL",
            Self::InvalidPlayerCount => "INVALID_PLAYER_COUNT",
            Self::DuplicatePlayer => "DUPLICATE_PLAYER",
            Self::InvalidRoundCount => "INVALID_ROUND_COUNT",
            Self::TableFull => "TABLE_FULL",
            Self::AlreadySeated => "ALREADY_SEATED",
            Self::TableClosed => "TABLE_CLOSED",
            Self::ParseCard => "PARSE_CARD",
            Self::OutOfTurn => "OUT_OF_TURN",
            Self::CardNotInHand => "CARD_NOT_IN_HAND",
            Self::MustFollowSuit => "MUST_FOLLOW_SUIT",
            Self::IneligibleVariant => "INELIGIBLE_VARIANT",
            Self::InvalidExchange => "INVALID_EXCHANGE",
            Self::IneligibleAnnouncement => "INELIGIBLE_ANNOUNCEMENT",
            Self::RoundAlreadyComplete => "ROUND_ALREADY_COMPLETE",
            Self::PhaseMismatch => "PHASE_MISMATCH",
            Self::HandExhausted => "HAND_EXHAUSTED",
            Self::InvariantViolation => "INVARIANT_VIOLATION",
            Self::StrategyFailed => "STRATEGY_FAILED",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
