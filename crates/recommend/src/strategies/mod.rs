//! Strategy implementations for recommendation derivation.
//!
//! Each strategy lives in its own module:
//! - `instagram_first`: surface Instagram results ahead of anything else
//! - `top_views`: highest view counts from the result set
//! - `top_likes`: highest like counts, used for the empty-query default

pub mod instagram_first;
pub mod top_likes;
pub mod top_views;

pub use instagram_first::InstagramFirst;
pub use top_likes::TopByLikes;
pub use top_views::TopByViews;
