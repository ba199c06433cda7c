//! The Recommender picks a strategy per search and applies it.
//!
//! Recommendations are always derived from already-fetched data: the result
//! set of the search that just resolved (which, for an empty query, is the
//! entire catalog). No extra catalog query is ever issued here.

use catalog::Reel;
use tracing::debug;

use crate::strategies::{InstagramFirst, TopByLikes, TopByViews};
use crate::traits::Strategy;

/// Maximum number of recommended reels per derivation.
pub const RECOMMENDATION_LIMIT: usize = 3;

/// Dispatches to the right strategy for a resolved search.
///
/// ## Rules
/// - empty query: top reels by likes across the full catalog
/// - non-empty query with an Instagram reel among the results: the first
///   Instagram results, in order
/// - non-empty query, results but none from Instagram: top results by views
/// - non-empty query with no results: nothing to recommend
pub struct Recommender {
    instagram_first: InstagramFirst,
    top_views: TopByViews,
    top_likes: TopByLikes,
}

impl Recommender {
    pub fn new() -> Self {
        Self {
            instagram_first: InstagramFirst,
            top_views: TopByViews,
            top_likes: TopByLikes,
        }
    }

    /// Derive recommendations for a resolved search.
    ///
    /// `results` is exactly what the search returned; for the empty query
    /// that is the full catalog, which is what makes the like-based default
    /// read the whole collection without a second fetch.
    pub fn derive(&self, query: &str, results: &[Reel]) -> Vec<Reel> {
        let strategy: &dyn Strategy = if query.is_empty() {
            &self.top_likes
        } else if results.is_empty() {
            return Vec::new();
        } else if results.iter().any(Reel::is_instagram) {
            &self.instagram_first
        } else {
            &self.top_views
        };

        let picks = strategy.derive(results, RECOMMENDATION_LIMIT);
        debug!(
            strategy = strategy.name(),
            input = results.len(),
            picked = picks.len(),
            "derived recommendations"
        );
        picks
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new()
    }
}
