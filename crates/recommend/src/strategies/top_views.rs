//! Strategy that ranks a result set by view count.
//!
//! Applied to search results that contain no Instagram reels.

use catalog::Reel;

use crate::traits::Strategy;

/// Picks the `limit` most-viewed reels from the input.
///
/// The sort is stable: reels with equal view counts keep their original
/// relative order.
pub struct TopByViews;

impl Strategy for TopByViews {
    fn name(&self) -> &str {
        "TopByViews"
    }

    fn derive(&self, reels: &[Reel], limit: usize) -> Vec<Reel> {
        let mut ranked = reels.to_vec();
        ranked.sort_by(|a, b| b.views.cmp(&a.views));
        ranked.truncate(limit);
        ranked
    }
}
