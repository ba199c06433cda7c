//! Strategy that surfaces Instagram-sourced results.
//!
//! Applied when a search result set contains at least one Instagram reel:
//! the external content is what gets recommended, in result order.

use catalog::Reel;

use crate::traits::Strategy;

/// Picks the first `limit` Instagram reels from the input.
///
/// ## Algorithm
/// 1. Filter to reels with `source = Instagram`
/// 2. Preserve the input order
/// 3. Truncate to `limit`
pub struct InstagramFirst;

impl Strategy for InstagramFirst {
    fn name(&self) -> &str {
        "InstagramFirst"
    }

    fn derive(&self, reels: &[Reel], limit: usize) -> Vec<Reel> {
        reels
            .iter()
            .filter(|reel| reel.is_instagram())
            .take(limit)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::CatalogStore;

    #[test]
    fn keeps_only_instagram_reels_in_order() {
        let store = CatalogStore::with_sample_data().unwrap();
        let picks = InstagramFirst.derive(store.reels(), 3);
        let ids: Vec<&str> = picks.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["ig1", "ig2", "ig3"]);
    }

    #[test]
    fn truncates_to_limit() {
        let store = CatalogStore::with_sample_data().unwrap();
        let picks = InstagramFirst.derive(store.reels(), 2);
        assert_eq!(picks.len(), 2);
        assert_eq!(picks[0].id, "ig1");
    }

    #[test]
    fn empty_when_no_instagram_reels_present() {
        let store = CatalogStore::with_sample_data().unwrap();
        let locals = store.filter("fitness");
        assert!(InstagramFirst.derive(&locals, 3).is_empty());
    }
}
