use thiserror::Error;

/// Failures surfaced by the student record store. Each variant is a stable
/// signal the HTTP layer branches on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Missing or malformed required input.
    #[error("validation error: {0}")]
    Validation(String),
    /// No record for the id (including ids that do not parse), or a search with no hits.
    #[error("{0}")]
    NotFound(String),
    /// Backing store unreachable or failed.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn student_not_found() -> Self {
        Self::NotFound("Student not found".into())
    }

    pub fn no_name_matches() -> Self {
        Self::NotFound("No students found with the given name".into())
    }

    pub fn missing_fields(fields: &[&str]) -> Self {
        Self::Validation(format!("missing required fields: {}", fields.join(", ")))
    }

    pub fn unavailable(e: impl std::fmt::Display) -> Self {
        Self::Unavailable(e.to_string())
    }
}

impl From<models::errors::ModelError> for StoreError {
    fn from(e: models::errors::ModelError) -> Self {
        match e {
            models::errors::ModelError::Validation(msg) => Self::Validation(msg),
            models::errors::ModelError::Db(msg) => Self::Unavailable(msg),
        }
    }
}
