//! Strategy that ranks by like count.
//!
//! The default for an empty query (initial load or cleared search), where
//! the result set is the entire catalog.

use catalog::Reel;

use crate::traits::Strategy;

/// Picks the `limit` most-liked reels from the input, stable on ties.
pub struct TopByLikes;

impl Strategy for TopByLikes {
    fn name(&self) -> &str {
        "TopByLikes"
    }

    fn derive(&self, reels: &[Reel], limit: usize) -> Vec<Reel> {
        let mut ranked = reels.to_vec();
        ranked.sort_by(|a, b| b.likes.cmp(&a.likes));
        ranked.truncate(limit);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::CatalogStore;

    #[test]
    fn top_liked_across_the_sample_catalog() {
        // Instagram reels are part of the catalog, so they are eligible:
        // ig1 (15632) > 5 (8901) > ig2 (7845).
        let store = CatalogStore::with_sample_data().unwrap();
        let picks = TopByLikes.derive(store.reels(), 3);
        let ids: Vec<&str> = picks.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["ig1", "5", "ig2"]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(TopByLikes.derive(&[], 3).is_empty());
    }
}
