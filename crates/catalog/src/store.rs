//! The catalog store: an immutable in-memory reel collection and its two
//! query operations.
//!
//! Queries are asynchronous only to model the latency of a real backend (a
//! timer-based deferred completion, never a busy wait); they perform no I/O
//! and never fail. Each query produces a fresh filtered view; the backing
//! collection is never mutated after construction.

use std::collections::HashSet;
use std::time::Duration;

use tracing::debug;

use crate::error::{CatalogError, Result};
use crate::types::{Reel, ReelSource};

/// Simulated latency of a search query.
pub const SEARCH_LATENCY: Duration = Duration::from_millis(500);

/// Simulated latency of a single-reel lookup.
pub const LOOKUP_LATENCY: Duration = Duration::from_millis(300);

/// Owns the static reel collection and answers query requests.
///
/// Constructed once at process start; validation enforces the catalog
/// invariants (unique ids, populated variant fields) up front so queries can
/// stay infallible.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    reels: Vec<Reel>,
}

impl CatalogStore {
    /// Build a store over the given reels, validating catalog invariants.
    pub fn new(reels: Vec<Reel>) -> Result<Self> {
        let mut seen = HashSet::new();
        for reel in &reels {
            if !seen.insert(reel.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: reel.id.clone(),
                });
            }
            if let ReelSource::Instagram {
                instagram_url,
                instagram_id,
            } = &reel.source
            {
                if instagram_url.is_empty() {
                    return Err(CatalogError::InvalidField {
                        id: reel.id.clone(),
                        field: "instagram_url",
                        reason: "must not be empty".to_string(),
                    });
                }
                if instagram_id.is_empty() {
                    return Err(CatalogError::InvalidField {
                        id: reel.id.clone(),
                        field: "instagram_id",
                        reason: "must not be empty".to_string(),
                    });
                }
            }
        }
        Ok(Self { reels })
    }

    /// Build a store over the built-in sample dataset.
    pub fn with_sample_data() -> Result<Self> {
        Self::new(crate::data::sample_reels())
    }

    /// All reels in declaration order.
    pub fn reels(&self) -> &[Reel] {
        &self.reels
    }

    pub fn len(&self) -> usize {
        self.reels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reels.is_empty()
    }

    /// The synchronous matching core of `search_reels`.
    ///
    /// An exactly-empty query (no trimming) returns the whole catalog in
    /// declaration order. Otherwise a reel matches when `query` is a
    /// case-insensitive substring of its `username` or its `caption`; no
    /// tokenization, no fuzziness. Order is preserved as filtered.
    pub fn filter(&self, query: &str) -> Vec<Reel> {
        if query.is_empty() {
            return self.reels.clone();
        }
        let needle = query.to_lowercase();
        let matched: Vec<Reel> = self
            .reels
            .iter()
            .filter(|reel| {
                reel.username.to_lowercase().contains(&needle)
                    || reel.caption.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();
        debug!(query, hits = matched.len(), "filtered catalog");
        matched
    }

    /// Search the catalog by username or caption substring.
    ///
    /// Never fails; a no-match query resolves to an empty vec. Completes
    /// after ~500 ms of simulated latency.
    pub async fn search_reels(&self, query: &str) -> Vec<Reel> {
        tokio::time::sleep(SEARCH_LATENCY).await;
        self.filter(query)
    }

    /// Look up a single reel by exact id.
    ///
    /// Linear scan, first match wins; absence is `None`, not an error.
    /// Completes after ~300 ms of simulated latency.
    pub async fn get_reel_by_id(&self, id: &str) -> Option<Reel> {
        tokio::time::sleep(LOOKUP_LATENCY).await;
        self.reels.iter().find(|reel| reel.id == id).cloned()
    }
}
