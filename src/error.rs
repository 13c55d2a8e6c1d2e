use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServiceError>;

/// The two failure kinds the services can produce. Everything is terminal
/// for the triggering action; callers surface it as a toast and move on.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("file not found: {id}")]
    NotFound { id: String },

    #[error("export failed: {0}")]
    Export(String),
}

impl ServiceError {
    pub fn not_found(id: impl Into<String>) -> Self {
        ServiceError::NotFound { id: id.into() }
    }
}
