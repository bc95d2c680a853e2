//! Application-level errors (wraps domain errors)

use thiserror::Error;

use crate::domain::DomainError;

/// Application errors wrap domain errors and add application-level context.
///
/// The two not-found variants are the only user-facing failures of the query
/// operations; their messages name the raw input that could not be resolved.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("No menu has been found with this id or slug: `{0}`. Please ensure you passed an existing menu ID, menu slug, location ID or location slug.")]
    MenuNotFound(String),

    #[error("No location has been found with this id or slug: `{0}`. Please ensure you passed an existing location ID or location slug.")]
    LocationNotFound(String),

    #[error("config error: {message}")]
    Config { message: String },

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ApplicationError {
    /// Whether this is a resolution failure rather than an internal fault.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::MenuNotFound(_) | Self::LocationNotFound(_))
    }

    /// HTTP-equivalent status for transport layers.
    pub fn status(&self) -> u16 {
        if self.is_not_found() {
            404
        } else {
            500
        }
    }
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
