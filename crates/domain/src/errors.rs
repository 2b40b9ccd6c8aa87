use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Caller-correctable input problem; never retried.
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Customer not found with id: {0}")]
    CustomerNotFound(String),

    #[error("Email already in use: {0}")]
    DuplicateEmail(String),

    #[error("Persistence error: {0}")]
    PersistenceError(String),
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::ValidationError(message.into())
    }

    pub fn persistence(err: impl std::fmt::Display) -> Self {
        DomainError::PersistenceError(err.to_string())
    }
}
