//! Domain layer: entities and business logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod builder;
pub mod entities;
pub mod error;

pub use builder::{build_forest, Forest, TreeResult};
pub use entities::{locations_to_json, path_only, Entry, ExtraFields, Location, Menu};
pub use error::DomainError;

use regex::Regex;
use std::sync::OnceLock;

/// Validate a menu or location slug against the accepted pattern.
pub fn validate_slug(slug: &str) -> Result<(), DomainError> {
    static SLUG_RE: OnceLock<Regex> = OnceLock::new();
    let re = SLUG_RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("valid regex"));
    if re.is_match(slug) {
        Ok(())
    } else {
        Err(DomainError::InvalidSlug(slug.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_valid_slugs_when_validating_then_accepted() {
        for slug in ["main", "footer-menu", "nav_2", "A1"] {
            assert!(validate_slug(slug).is_ok(), "{slug} should be valid");
        }
    }

    #[test]
    fn given_invalid_slugs_when_validating_then_rejected() {
        for slug in ["", "has space", "slash/menu", "uté"] {
            assert!(validate_slug(slug).is_err(), "{slug} should be invalid");
        }
    }
}
