use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    /// The bare validation message, without the error-kind prefixes.
    pub fn validation_message(&self) -> Option<&str> {
        match self {
            Self::Validation(msg) | Self::Model(models::errors::ModelError::Validation(msg)) => Some(msg),
            _ => None,
        }
    }

    /// True for errors caused by the caller's input rather than the backend.
    pub fn is_validation(&self) -> bool {
        self.validation_message().is_some()
    }
}
