//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent business logic violations.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("duplicate entry id in menu: {0}")]
    DuplicateEntry(u64),

    #[error("invalid slug: `{0}` (expected [A-Za-z0-9_-]+)")]
    InvalidSlug(String),
}
