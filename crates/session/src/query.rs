//! The query seam between the session and whatever answers it.
//!
//! The search state machine only needs the two catalog operations, so it is
//! written against this trait; the real [`CatalogStore`] implements it, and
//! tests substitute scripted doubles (including ones that fail, which the
//! real store never does).

use std::future::Future;

use anyhow::Result;
use catalog::{CatalogStore, Reel};

/// The two catalog operations the presentation layer consumes.
pub trait ReelQuery {
    /// Search by username/caption substring; empty query means everything.
    fn search_reels(&self, query: &str) -> impl Future<Output = Result<Vec<Reel>>> + Send;

    /// Exact-id lookup; absence is `Ok(None)`, never an error.
    fn reel_by_id(&self, id: &str) -> impl Future<Output = Result<Option<Reel>>> + Send;
}

impl ReelQuery for CatalogStore {
    async fn search_reels(&self, query: &str) -> Result<Vec<Reel>> {
        Ok(CatalogStore::search_reels(self, query).await)
    }

    async fn reel_by_id(&self, id: &str) -> Result<Option<Reel>> {
        Ok(self.get_reel_by_id(id).await)
    }
}
