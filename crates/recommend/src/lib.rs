//! Recommendation derivation for the reel catalog.
//!
//! This crate provides:
//! - Strategy trait and implementations for deriving recommendations
//! - Recommender for picking the strategy a resolved search calls for
//!
//! ## Architecture
//! A search resolves to an ordered result set; the Recommender inspects the
//! query and the results, picks one strategy, and derives up to three
//! recommendations from data that is already in hand.
//!
//! ## Example Usage
//! ```ignore
//! use recommend::Recommender;
//!
//! let recommender = Recommender::new();
//! let picks = recommender.derive(query, &results);
//! ```

pub mod recommender;
pub mod strategies;
pub mod traits;

// Re-export main types
pub use recommender::{Recommender, RECOMMENDATION_LIMIT};
pub use strategies::{InstagramFirst, TopByLikes, TopByViews};
pub use traits::Strategy;
