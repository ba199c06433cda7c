//! # Catalog Crate
//!
//! This crate owns the static reel collection and answers query requests.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Reel, ReelSource)
//! - **data**: The built-in sample dataset
//! - **store**: CatalogStore with the search and lookup operations
//! - **error**: Construction-time validation errors
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::CatalogStore;
//!
//! let store = CatalogStore::with_sample_data()?;
//!
//! // Query data
//! let results = store.search_reels("fitness").await;
//! let reel = store.get_reel_by_id("2").await;
//! ```
//!
//! The collection is immutable after construction, so queries are pure reads
//! and no locking discipline is needed anywhere in the crate.

// Public modules
pub mod data;
pub mod error;
pub mod store;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use store::{CatalogStore, LOOKUP_LATENCY, SEARCH_LATENCY};
pub use types::{Reel, ReelId, ReelSource};
