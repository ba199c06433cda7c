//! Presentation-facing orchestration for the reel gallery.
//!
//! This crate ties the catalog and the recommender together behind the
//! search state machine, and carries the player-side action surface:
//!
//! - **query**: the `ReelQuery` seam the session is written against
//! - **search**: `SearchSession`, the `Idle -> Loading -> {Results | Empty}`
//!   state machine with stale-response discard
//! - **player**: playback control (autoplay fallback, mute) and the
//!   optimistic like
//! - **actions**: share and download, dispatched on the reel variant
//! - **format**: compact counter formatting

pub mod actions;
pub mod format;
pub mod player;
pub mod query;
pub mod search;

// Re-export main types
pub use actions::{DownloadAction, ShareOutcome, ShareRequest, ShareTarget, download_action, share_reel};
pub use format::compact_count;
pub use player::{PlaybackController, PlaybackState, PlayerPanel, VideoSurface};
pub use query::ReelQuery;
pub use search::{SearchSession, SearchState, SearchView};
