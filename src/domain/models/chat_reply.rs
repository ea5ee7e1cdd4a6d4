use serde::{Deserialize, Serialize};

/// Outcome of a chat turn. Serialized as either `{"reply": ...}` or
/// `{"error": ...}`, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatReply {
    Success { reply: String },
    Failure { error: String },
}

impl ChatReply {
    pub fn success(reply: impl Into<String>) -> Self {
        Self::Success {
            reply: reply.into(),
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure {
            error: error.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn reply(&self) -> Option<&str> {
        match self {
            Self::Success { reply } => Some(reply),
            Self::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error } => Some(error),
        }
    }
}
