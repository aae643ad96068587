//! Players as seen by the engine: identity only, never mutated by a round.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable player identity across rounds and tables.
pub type PlayerId = Uuid;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    Human,
    Computer,
}

#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Player {
    /// Transport session of the current connection (opaque to the engine).
    pub session: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PlayerKind,
    pub uuid: PlayerId,
}

impl Player {
    pub fn new(session: impl Into<String>, name: impl Into<String>, kind: PlayerKind) -> Self {
        Self {
            session: session.into(),
            name: name.into(),
            kind,
            uuid: Uuid::new_v4(),
        }
    }

    pub fn with_uuid(mut self, uuid: PlayerId) -> Self {
        self.uuid = uuid;
        self
    }

    pub fn is_computer(&self) -> bool {
        self.kind == PlayerKind::Computer
    }
}
