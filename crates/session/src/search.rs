//! The search session: explicit state machine over the catalog queries.
//!
//! Transitions: `Idle -> Loading -> { Results | Empty }`. `Loading` is
//! entered synchronously when a search is dispatched and exited only when
//! that search's response is applied. A query error is swallowed (logged)
//! and lands in `Empty` with no recommendations; nothing is retried.
//!
//! Overlapping searches are resolved with generation tokens: every dispatch
//! takes a fresh generation, and a response is applied only while its
//! generation is still the latest. A stale response is discarded, so a
//! slow early search can never overwrite the results of a later one.

use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Result;
use catalog::Reel;
use recommend::Recommender;
use tracing::{debug, info, warn};

use crate::query::ReelQuery;

/// Where the search flow currently is.
///
/// `Empty` (a search resolved with no hits) is distinct from `Idle` (no
/// search dispatched yet); the two render differently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchState {
    Idle,
    Loading,
    Results(Vec<Reel>),
    Empty,
}

/// Everything the presentation layer reads per frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchView {
    pub state: SearchState,
    pub query: String,
    pub recommendations: Vec<Reel>,
}

/// Drives the search flow against any [`ReelQuery`] backend.
///
/// Shared-reference API: dispatching takes `&self`, so overlapping searches
/// are possible and the generation discipline below is what keeps the
/// displayed state coherent.
pub struct SearchSession<Q> {
    catalog: Q,
    recommender: Recommender,
    generation: AtomicU64,
    view: Mutex<SearchView>,
    selected: Mutex<Option<Reel>>,
}

impl<Q: ReelQuery> SearchSession<Q> {
    pub fn new(catalog: Q) -> Self {
        Self {
            catalog,
            recommender: Recommender::new(),
            generation: AtomicU64::new(0),
            view: Mutex::new(SearchView {
                state: SearchState::Idle,
                query: String::new(),
                recommendations: Vec::new(),
            }),
            selected: Mutex::new(None),
        }
    }

    /// Snapshot of the current view state.
    pub fn view(&self) -> SearchView {
        self.view.lock().expect("session state lock poisoned").clone()
    }

    pub fn state(&self) -> SearchState {
        self.view().state
    }

    /// Initial load: the empty search that populates the default grid.
    pub async fn mount(&self) {
        self.search("").await;
    }

    /// Dispatch a search and apply its outcome unless it gets superseded.
    pub async fn search(&self, query: &str) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        // Loading is entered synchronously, before the query call
        {
            let mut view = self.view.lock().expect("session state lock poisoned");
            view.state = SearchState::Loading;
            view.query = query.to_string();
        }
        debug!(query, generation, "search dispatched");

        let outcome = self.catalog.search_reels(query).await;

        let mut view = self.view.lock().expect("session state lock poisoned");
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(query, generation, "discarding stale search response");
            return;
        }

        match outcome {
            Ok(results) => {
                info!(query, hits = results.len(), "search resolved");
                view.recommendations = self.recommender.derive(query, &results);
                view.state = if results.is_empty() {
                    SearchState::Empty
                } else {
                    SearchState::Results(results)
                };
            }
            Err(err) => {
                // Swallowed: logged for diagnostics, never retried
                warn!(query, "search failed: {err:#}");
                view.recommendations.clear();
                view.state = SearchState::Empty;
            }
        }
    }

    /// Open a reel in the player. Resolves through the catalog lookup;
    /// an unknown id clears the selection and reports `None`.
    pub async fn select_reel(&self, id: &str) -> Result<Option<Reel>> {
        let reel = self.catalog.reel_by_id(id).await?;
        let mut selected = self.selected.lock().expect("session state lock poisoned");
        *selected = reel.clone();
        Ok(reel)
    }

    /// Close the player.
    pub fn close_player(&self) {
        let mut selected = self.selected.lock().expect("session state lock poisoned");
        *selected = None;
    }

    pub fn selected(&self) -> Option<Reel> {
        self.selected
            .lock()
            .expect("session state lock poisoned")
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::CatalogStore;

    fn session() -> SearchSession<CatalogStore> {
        SearchSession::new(CatalogStore::with_sample_data().unwrap())
    }

    #[test]
    fn starts_idle_with_no_recommendations() {
        let session = session();
        let view = session.view();
        assert_eq!(view.state, SearchState::Idle);
        assert!(view.recommendations.is_empty());
        assert!(session.selected().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn mount_loads_the_full_catalog_with_top_liked_recommendations() {
        let session = session();
        session.mount().await;

        let view = session.view();
        let SearchState::Results(results) = &view.state else {
            panic!("expected results, got {:?}", view.state);
        };
        let ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6", "ig1", "ig2", "ig3"]);

        let recs: Vec<&str> = view.recommendations.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(recs, ["ig1", "5", "ig2"]);
    }

    #[tokio::test(start_paused = true)]
    async fn zero_match_search_lands_in_empty_not_loading() {
        let session = session();
        session.search("zzzzzz").await;

        let view = session.view();
        assert_eq!(view.state, SearchState::Empty);
        assert_eq!(view.query, "zzzzzz");
        assert!(view.recommendations.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn fitness_search_recommends_its_single_result() {
        let session = session();
        session.search("fitness").await;

        let view = session.view();
        let SearchState::Results(results) = &view.state else {
            panic!("expected results, got {:?}", view.state);
        };
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "1");
        // No Instagram reel in the result set, so top-by-views applies to
        // the one-entry set
        assert_eq!(view.recommendations.len(), 1);
        assert_eq!(view.recommendations[0].id, "1");
    }

    #[tokio::test(start_paused = true)]
    async fn selection_follows_lookup_outcome() {
        let session = session();

        let reel = session.select_reel("2").await.unwrap();
        assert_eq!(reel.unwrap().username, "bakewithme");
        assert_eq!(session.selected().unwrap().id, "2");

        let missing = session.select_reel("nonexistent").await.unwrap();
        assert!(missing.is_none());
        assert!(session.selected().is_none());

        let _ = session.select_reel("2").await.unwrap();
        session.close_player();
        assert!(session.selected().is_none());
    }
}
