use thiserror::Error;

/// Errors surfaced by the domain layer.
///
/// `Validation` is raised at construction time and names the offending field;
/// `Processing` is raised when matching or aggregation fails at runtime. An
/// empty match result is never reported through this type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid {field}: {message}")]
    Validation { field: String, message: String },

    #[error("processing failed: {0}")]
    Processing(String),
}

impl CoreError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        CoreError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn processing(message: impl Into<String>) -> Self {
        CoreError::Processing(message.into())
    }
}
