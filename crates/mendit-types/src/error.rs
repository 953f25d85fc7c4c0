use thiserror::Error;

/// Errors from the key-value storage boundary.
///
/// Stores in `mendit-core` catch these, log them and fall back to a safe
/// default; they never reach the user.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage read failed: {0}")]
    Read(String),

    #[error("storage write failed: {0}")]
    Write(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialization(err.to_string())
    }
}

/// Errors raised when capturing a healing reflection.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HealingError {
    #[error("reflection journal is empty")]
    EmptyJournal,

    #[error("unknown mood: '{0}'")]
    UnknownMood(String),
}

/// Errors related to live session operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("participant '{0}' is not in this session")]
    UnknownParticipant(String),

    #[error("session {0} is already resolved")]
    AlreadyResolved(String),
}

/// Errors from the conflict-style quiz.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("quiz incomplete: {answered} of {expected} questions answered")]
    Incomplete { answered: usize, expected: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_display() {
        let err = StorageError::Write("quota exceeded".to_string());
        assert_eq!(err.to_string(), "storage write failed: quota exceeded");
    }

    #[test]
    fn test_storage_error_from_serde() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: StorageError = parse.into();
        assert!(matches!(err, StorageError::Serialization(_)));
    }

    #[test]
    fn test_session_error_display() {
        let err = SessionError::MissingField("name");
        assert_eq!(err.to_string(), "missing required field: name");
    }

    #[test]
    fn test_quiz_error_display() {
        let err = QuizError::Incomplete {
            answered: 3,
            expected: 5,
        };
        assert!(err.to_string().contains("3 of 5"));
    }
}
