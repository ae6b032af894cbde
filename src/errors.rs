use thiserror::Error;

/// Prefix of every locally synthesized failure message shown in the transcript.
pub const ERROR_PREFIX: &str = "Error: Could not connect to AI.";

/// Failures of a single chat exchange.
///
/// None of these escape the controller: each is turned into a bot message
/// via [`ChatError::user_facing`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChatError {
    // ── Protocol ─────────────────────────────────────────────────────────────
    #[error("HTTP error! status: {status}")]
    Status { status: u16 },

    // ── Transport ────────────────────────────────────────────────────────────
    #[error("{0}")]
    Transport(String),

    // ── Payload ──────────────────────────────────────────────────────────────
    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("Response did not contain an answer")]
    MissingAnswer,

    // ── Configuration ────────────────────────────────────────────────────────
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ChatError {
    /// Text of the bot message that stands in for this failure.
    pub fn user_facing(&self) -> String {
        format!("{ERROR_PREFIX} {self}")
    }

    pub fn is_status(&self) -> bool {
        matches!(self, ChatError::Status { .. })
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ChatError::Transport(_))
    }
}
