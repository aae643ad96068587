use thiserror::Error;

use crate::ai::AiError;
use crate::domain::PlayerId;
use crate::errors::{DomainError, ErrorCode};

/// Error type of the orchestration layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("strategy for player {player} failed: {source}")]
    Strategy {
        player: PlayerId,
        #[source]
        source: AiError,
    },
}

impl EngineError {
    pub fn strategy(player: PlayerId, source: AiError) -> Self {
        Self::Strategy { player, source }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            EngineError::Domain(err) => err.code(),
            EngineError::Strategy { .. } => ErrorCode::StrategyFailed,
        }
    }

    /// The domain error behind this failure, if it came from the rules.
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            EngineError::Domain(err) => Some(err),
            EngineError::Strategy { .. } => None,
        }
    }
}
