//! Error types for character creation.

/// Errors that can occur while creating a character.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CharacterError {
    /// The name contains something other than letters, or is empty.
    #[error("invalid name \"{0}\": names may only contain letters")]
    InvalidName(String),

    /// The input matched neither a menu number nor a candidate name.
    #[error("invalid choice: \"{0}\"")]
    InvalidChoice(String),

    /// The input stream ended while a prompt was waiting for an answer.
    #[error("input aborted: no more input available")]
    InputAborted,
}

impl CharacterError {
    /// Returns true if no retry can recover from this error.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::InputAborted)
    }
}

/// Convenience result type for character operations.
pub type CharacterResult<T> = Result<T, CharacterError>;
