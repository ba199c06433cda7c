//! Core domain types for the reel catalog.
//!
//! This module defines the fundamental data structures used throughout the
//! system:
//! - `Reel`, the single catalog entry type
//! - `ReelSource`, a tagged union over the two hosting variants
//!
//! The variant is a proper sum type rather than a bundle of optional fields,
//! so every consumption site (search, rendering, share/download) matches on
//! it exhaustively.

use serde::{Deserialize, Serialize};

/// Unique identifier for a reel. Opaque, stable for the process lifetime.
pub type ReelId = String;

// =============================================================================
// Reel
// =============================================================================

/// A short vertical video catalog entry.
///
/// `likes` and `views` are immutable in the backing store; the optimistic
/// "like" shown in the player is display-layer state only (see
/// `Reel::display_likes`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reel {
    pub id: ReelId,
    pub thumbnail_url: String,
    /// Display handle of the content owner. Searchable.
    pub username: String,
    /// Free-text description. Searchable.
    pub caption: String,
    pub likes: u64,
    pub views: u64,
    #[serde(flatten)]
    pub source: ReelSource,
}

/// Where a reel is hosted, and the variant-specific fields that come with it.
///
/// Serializes with a `"source"` discriminator of `"local"` or `"instagram"`,
/// matching the wire shape of the catalog records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum ReelSource {
    /// Hosted as a direct video file; `video_url` is authoritative and
    /// playable without any external collaborator.
    #[serde(rename_all = "camelCase")]
    Local { video_url: String },

    /// Embedded from Instagram. There is no direct video URL; playback is
    /// delegated entirely to the embed widget.
    #[serde(rename_all = "camelCase")]
    Instagram {
        /// Canonical link to the post on Instagram.
        instagram_url: String,
        /// Post identifier used to build the embed locator.
        instagram_id: String,
    },
}

impl Reel {
    /// Directly playable video URL, if this reel has one.
    ///
    /// Returns `None` for Instagram reels: their playback goes through the
    /// embed widget, never through a video element of ours.
    pub fn video_url(&self) -> Option<&str> {
        match &self.source {
            ReelSource::Local { video_url } => Some(video_url),
            ReelSource::Instagram { .. } => None,
        }
    }

    pub fn is_instagram(&self) -> bool {
        matches!(self.source, ReelSource::Instagram { .. })
    }

    /// Like count as the display layer shows it: the stored count plus the
    /// optimistic local +1 when the viewer has liked this reel.
    pub fn display_likes(&self, liked: bool) -> u64 {
        self.likes + u64::from(liked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local_reel() -> Reel {
        Reel {
            id: "1".to_string(),
            thumbnail_url: "https://example.com/thumb.jpg".to_string(),
            username: "fitness_lover".to_string(),
            caption: "Morning run #fitness".to_string(),
            likes: 1203,
            views: 5789,
            source: ReelSource::Local {
                video_url: "https://example.com/run.mp4".to_string(),
            },
        }
    }

    fn instagram_reel() -> Reel {
        Reel {
            id: "ig1".to_string(),
            thumbnail_url: "https://example.com/thumb.jpg".to_string(),
            username: "chefstories".to_string(),
            caption: "One-pan pasta magic".to_string(),
            likes: 15632,
            views: 98765,
            source: ReelSource::Instagram {
                instagram_url: "https://www.instagram.com/reel/C4xKp2QrLmN/".to_string(),
                instagram_id: "C4xKp2QrLmN".to_string(),
            },
        }
    }

    #[test]
    fn video_url_is_variant_dependent() {
        assert_eq!(local_reel().video_url(), Some("https://example.com/run.mp4"));
        assert_eq!(instagram_reel().video_url(), None);
    }

    #[test]
    fn display_likes_adds_optimistic_increment() {
        let reel = local_reel();
        assert_eq!(reel.display_likes(false), 1203);
        assert_eq!(reel.display_likes(true), 1204);
        // The backing value itself never moves
        assert_eq!(reel.likes, 1203);
    }

    #[test]
    fn serializes_with_source_discriminator() {
        let json = serde_json::to_value(instagram_reel()).unwrap();
        assert_eq!(json["source"], "instagram");
        assert_eq!(json["instagramId"], "C4xKp2QrLmN");
        assert!(json.get("videoUrl").is_none());

        let json = serde_json::to_value(local_reel()).unwrap();
        assert_eq!(json["source"], "local");
        assert_eq!(json["videoUrl"], "https://example.com/run.mp4");
    }

    #[test]
    fn roundtrips_through_json() {
        let reel = instagram_reel();
        let json = serde_json::to_string(&reel).unwrap();
        let back: Reel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, reel);
    }
}
