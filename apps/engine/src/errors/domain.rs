//! Domain-level error type shared by every engine module.
//!
//! Every rejected operation leaves the state it was called on unchanged.

use thiserror::Error;

use super::error_code::ErrorCode;
use crate::domain::announcements::AnnouncementKind;
use crate::domain::state::Phase;
use crate::domain::variants::VariantBid;
use crate::domain::{Card, PlayerId};

/// Coarse grouping of [`DomainError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Bad input while building a deck, round or table.
    Construction,
    /// A player acted out of turn or made an illegal move.
    TurnDiscipline,
    /// An operation arrived in the wrong phase, or too late for its kind.
    ProtocolSequencing,
    /// Internal consistency broke. Indicates an engine bug.
    Invariant,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("invalid deal: {detail}")]
    InvalidDeal { detail: String },
    #[error("expected {expected} players, got {actual}")]
    InvalidPlayerCount { expected: usize, actual: usize },
    #[error("player {player} appears more than once")]
    DuplicatePlayer { player: PlayerId },
    #[error("a table needs at least one round")]
    InvalidRoundCount,
    #[error("table {table} already has four players")]
    TableFull { table: String },
    #[error("player {player} is already seated at table {table}")]
    AlreadySeated { table: String, player: PlayerId },
    #[error("table {table} is closed")]
    TableClosed { table: String },
    #[error("not the turn of {player}, waiting for {expected}")]
    NotYourTurn { player: PlayerId, expected: PlayerId },
    #[error("player {player} does not hold {card}")]
    CardNotInHand { player: PlayerId, card: Card },
    #[error("player {player} may not play {card} in trick {trick_no}")]
    IneligibleCard {
        player: PlayerId,
        card: Card,
        trick_no: u8,
    },
    #[error("player {player} may not nominate {bid}: {reason}")]
    IneligibleVariant {
        player: PlayerId,
        bid: VariantBid,
        reason: &'static str,
    },
    #[error("invalid poverty exchange by {player}: {reason}")]
    InvalidExchange { player: PlayerId, reason: String },
    #[error("player {player} may not announce {kind} after {trick_no} tricks: {reason}")]
    IneligibleAnnouncement {
        player: PlayerId,
        kind: AnnouncementKind,
        trick_no: u8,
        reason: &'static str,
    },
    #[error("round is already complete")]
    RoundAlreadyComplete,
    #[error("{operation} is not allowed in phase {phase}")]
    PhaseMismatch {
        operation: &'static str,
        phase: Phase,
    },
    #[error("player {player} has no card left for trick {trick_no}")]
    HandExhausted { player: PlayerId, trick_no: u8 },
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
    #[error("cannot parse card: {0}")]
    ParseCard(String),
}

impl DomainError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidDeal { .. }
            | Self::InvalidPlayerCount { .. }
            | Self::DuplicatePlayer { .. }
            | Self::InvalidRoundCount
            | Self::TableFull { .. }
            | Self::AlreadySeated { .. }
            | Self::TableClosed { .. }
            | Self::ParseCard(_) => ErrorCategory::Construction,
            Self::NotYourTurn { .. }
            | Self::CardNotInHand { .. }
            | Self::IneligibleCard { .. }
            | Self::IneligibleVariant { .. }
            | Self::InvalidExchange { .. } => ErrorCategory::TurnDiscipline,
            Self::IneligibleAnnouncement { .. }
            | Self::RoundAlreadyComplete
            | Self::PhaseMismatch { .. } => ErrorCategory::ProtocolSequencing,
            Self::HandExhausted { .. } | Self::InvariantViolation(_) => ErrorCategory::Invariant,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidDeal { .. } => ErrorCode::InvalidDeal,
            Self::InvalidPlayerCount { .. } => ErrorCode::InvalidPlayerCount,
            Self::DuplicatePlayer { .. } => ErrorCode::DuplicatePlayer,
            Self::InvalidRoundCount => ErrorCode::InvalidRoundCount,
            Self::TableFull { .. } => ErrorCode::TableFull,
            Self::AlreadySeated { .. } => ErrorCode::AlreadySeated,
            Self::TableClosed { .. } => ErrorCode::TableClosed,
            Self::ParseCard(_) => ErrorCode::ParseCard,
            Self::NotYourTurn { .. } => ErrorCode::OutOfTurn,
            Self::CardNotInHand { .. } => ErrorCode::CardNotInHand,
            Self::IneligibleCard { .. } => ErrorCode::MustFollowSuit,
            Self::IneligibleVariant { .. } => ErrorCode::IneligibleVariant,
            Self::InvalidExchange { .. } => ErrorCode::InvalidExchange,
            Self::IneligibleAnnouncement { .. } => ErrorCode::IneligibleAnnouncement,
            Self::RoundAlreadyComplete => ErrorCode::RoundAlreadyComplete,
            Self::PhaseMismatch { .. } => ErrorCode::PhaseMismatch,
            Self::HandExhausted { .. } => ErrorCode::HandExhausted,
            Self::InvariantViolation(_) => ErrorCode::InvariantViolation,
        }
    }
}
