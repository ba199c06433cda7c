//! Core trait for recommendation strategies.
//!
//! A strategy derives a small recommended subset from reels that have
//! already been fetched; it never reaches back into the catalog.

use catalog::Reel;

/// A rule for deriving recommendations from an already-fetched reel set.
///
/// ## Design Note
/// - `Send + Sync` allows strategies to be used in concurrent contexts
/// - Strategies borrow the input and return owned clones of the picks
/// - Stability matters: ties must keep the input's relative order
pub trait Strategy: Send + Sync {
    /// Returns the name of this strategy (for logging/debugging)
    fn name(&self) -> &str;

    /// Derive up to `limit` recommendations from `reels`.
    fn derive(&self, reels: &[Reel], limit: usize) -> Vec<Reel>;
}
