use std::fmt;

use serde::{Serialize, Deserialize};
use uuid::Uuid;

/// Opaque bearer token identifying a participant.
///
/// Issued once per client and never parsed; any string the client presents is taken
/// at face value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(String);

impl ParticipantId {
    /// Issue a fresh, globally unique participant id.
    pub fn issue() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl From<String> for ParticipantId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for ParticipantId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a match, issued by the queue coordinator when two participants pair.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(String);

impl MatchId {
    pub fn issue() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MatchId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
