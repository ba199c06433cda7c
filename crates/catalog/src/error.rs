//! Error types for the catalog crate.
//!
//! The query operations themselves never fail (absence is `Option`, an empty
//! result set is a normal outcome); errors here cover catalog construction,
//! where the invariants on the static dataset are enforced.

use thiserror::Error;

/// Errors that can occur while validating a catalog at construction time.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Two reels share an id; ids must be globally unique within the catalog.
    #[error("Duplicate reel id: {id}")]
    DuplicateId { id: String },

    /// A required field on a reel was empty or malformed.
    #[error("Invalid value for {field} on reel {id}: {reason}")]
    InvalidField {
        id: String,
        field: &'static str,
        reason: String,
    },
}

/// Convenience type alias for Results in this crate.
pub type Result<T> = std::result::Result<T, CatalogError>;
