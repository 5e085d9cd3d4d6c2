use thiserror::Error;

use models::errors::ModelError;

/// Business errors for clip workflows
#[derive(Debug, Error)]
pub enum ClipError {
    #[error("user not found: {0}")]
    UserNotFound(String),
    #[error("clip {clip_id} not found for user {user_name}")]
    ClipNotFound { user_name: String, clip_id: String },
    #[error("malformed clip identifier: {0:?}")]
    MalformedIdentifier(String),
    #[error("user already exists: {0}")]
    UserExists(String),
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("repository error: {0}")]
    Repository(String),
}

impl ClipError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ClipError::UserNotFound(_) => 2001,
            ClipError::ClipNotFound { .. } => 2002,
            ClipError::MalformedIdentifier(_) => 2003,
            ClipError::UserExists(_) => 2004,
            ClipError::Validation(_) => 2005,
            ClipError::Repository(_) => 2100,
        }
    }
}

impl From<ModelError> for ClipError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => ClipError::Validation(msg),
            // callers that know which key collided map it themselves
            ModelError::Conflict(msg) | ModelError::Db(msg) => ClipError::Repository(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_distinct() {
        let all = [
            ClipError::UserNotFound("a".into()),
            ClipError::ClipNotFound { user_name: "a".into(), clip_id: "b".into() },
            ClipError::MalformedIdentifier("x".into()),
            ClipError::UserExists("a".into()),
            ClipError::Validation("v".into()),
            ClipError::Repository("r".into()),
        ];
        let mut codes: Vec<u16> = all.iter().map(ClipError::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), all.len());
    }

    #[test]
    fn clip_not_found_message_names_user_and_id() {
        let e = ClipError::ClipNotFound { user_name: "alice".into(), clip_id: "abc".into() };
        assert_eq!(e.to_string(), "clip abc not found for user alice");
    }

    #[test]
    fn model_errors_map_by_kind() {
        assert!(matches!(ClipError::from(ModelError::Validation("bad".into())), ClipError::Validation(_)));
        assert!(matches!(ClipError::from(ModelError::Db("down".into())), ClipError::Repository(_)));
        assert!(matches!(ClipError::from(ModelError::Conflict("dup".into())), ClipError::Repository(_)));
    }
}
