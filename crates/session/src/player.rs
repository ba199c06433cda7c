//! Player-side display state: the optimistic like and playback control for
//! locally hosted reels.
//!
//! Playback talks to a [`VideoSurface`], the native playback handle. Play is
//! fallible (runtimes block autoplay); pause and mute are not. An autoplay
//! rejection is caught here and degrades to a paused, user-initiated-play
//! state instead of propagating.

use std::future::Future;

use anyhow::Result;
use catalog::Reel;
use tracing::warn;

/// The native playback handle behind the player for local reels.
pub trait VideoSurface {
    /// Start playback. Errors when the runtime refuses, autoplay policies
    /// being the usual reason.
    fn play(&self) -> impl Future<Output = Result<()>> + Send;

    fn pause(&self);

    fn set_muted(&self, muted: bool);
}

/// Whether the video element is currently playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Playing,
    Paused,
}

/// Play/pause/mute toggle over a [`VideoSurface`].
///
/// Starts muted and paused; `on_ready` attempts autoplay once the surface
/// reports it can play.
pub struct PlaybackController<S> {
    surface: S,
    state: PlaybackState,
    muted: bool,
}

impl<S: VideoSurface> PlaybackController<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            state: PlaybackState::Paused,
            muted: true,
        }
    }

    /// Called when the surface becomes ready to play: attempt autoplay,
    /// falling back to paused when the runtime blocks it.
    pub async fn on_ready(&mut self) {
        match self.surface.play().await {
            Ok(()) => self.state = PlaybackState::Playing,
            Err(err) => {
                warn!("autoplay blocked, waiting for user gesture: {err:#}");
                self.state = PlaybackState::Paused;
            }
        }
    }

    pub async fn toggle_play(&mut self) {
        match self.state {
            PlaybackState::Playing => {
                self.surface.pause();
                self.state = PlaybackState::Paused;
            }
            PlaybackState::Paused => match self.surface.play().await {
                Ok(()) => self.state = PlaybackState::Playing,
                Err(err) => {
                    warn!("play request rejected: {err:#}");
                }
            },
        }
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
        self.surface.set_muted(self.muted);
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }
}

/// Per-reel display state in the open player.
///
/// The like is optimistic and local: toggling it changes what the panel
/// shows, never the backing store.
pub struct PlayerPanel {
    reel: Reel,
    liked: bool,
}

impl PlayerPanel {
    pub fn new(reel: Reel) -> Self {
        Self { reel, liked: false }
    }

    pub fn toggle_like(&mut self) {
        self.liked = !self.liked;
    }

    pub fn liked(&self) -> bool {
        self.liked
    }

    /// Like count as displayed: stored count plus the local increment.
    pub fn display_likes(&self) -> u64 {
        self.reel.display_likes(self.liked)
    }

    pub fn reel(&self) -> &Reel {
        &self.reel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::ReelSource;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, Ordering};

    /// Surface double that records calls and can refuse to play.
    struct FakeSurface {
        allow_play: AtomicBool,
        calls: Mutex<Vec<&'static str>>,
    }

    impl FakeSurface {
        fn new(allow_play: bool) -> Self {
            Self {
                allow_play: AtomicBool::new(allow_play),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl VideoSurface for &FakeSurface {
        async fn play(&self) -> Result<()> {
            self.calls.lock().unwrap().push("play");
            if self.allow_play.load(Ordering::SeqCst) {
                Ok(())
            } else {
                Err(anyhow::anyhow!("NotAllowedError: autoplay blocked"))
            }
        }

        fn pause(&self) {
            self.calls.lock().unwrap().push("pause");
        }

        fn set_muted(&self, muted: bool) {
            self.calls
                .lock()
                .unwrap()
                .push(if muted { "mute" } else { "unmute" });
        }
    }

    fn local_reel() -> Reel {
        Reel {
            id: "1".to_string(),
            thumbnail_url: String::new(),
            username: "fitness_lover".to_string(),
            caption: "Morning run".to_string(),
            likes: 1203,
            views: 5789,
            source: ReelSource::Local {
                video_url: "https://example.com/run.mp4".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn autoplay_success_transitions_to_playing() {
        let surface = FakeSurface::new(true);
        let mut controller = PlaybackController::new(&surface);
        assert_eq!(controller.state(), PlaybackState::Paused);

        controller.on_ready().await;
        assert_eq!(controller.state(), PlaybackState::Playing);
    }

    #[tokio::test]
    async fn blocked_autoplay_falls_back_to_paused() {
        let surface = FakeSurface::new(false);
        let mut controller = PlaybackController::new(&surface);

        controller.on_ready().await;
        assert_eq!(controller.state(), PlaybackState::Paused);

        // A later user gesture can still start playback
        surface.allow_play.store(true, Ordering::SeqCst);
        controller.toggle_play().await;
        assert_eq!(controller.state(), PlaybackState::Playing);
    }

    #[tokio::test]
    async fn toggle_play_pauses_a_playing_surface() {
        let surface = FakeSurface::new(true);
        let mut controller = PlaybackController::new(&surface);
        controller.on_ready().await;

        controller.toggle_play().await;
        assert_eq!(controller.state(), PlaybackState::Paused);
        assert_eq!(surface.calls(), ["play", "pause"]);
    }

    #[tokio::test]
    async fn mute_toggle_flips_and_forwards() {
        let surface = FakeSurface::new(true);
        let mut controller = PlaybackController::new(&surface);
        assert!(controller.is_muted());

        controller.toggle_mute();
        assert!(!controller.is_muted());
        controller.toggle_mute();
        assert!(controller.is_muted());
        assert_eq!(surface.calls(), ["unmute", "mute"]);
    }

    #[test]
    fn like_is_optimistic_and_reversible() {
        let mut panel = PlayerPanel::new(local_reel());
        assert_eq!(panel.display_likes(), 1203);

        panel.toggle_like();
        assert_eq!(panel.display_likes(), 1204);
        // The backing reel is untouched
        assert_eq!(panel.reel().likes, 1203);

        panel.toggle_like();
        assert_eq!(panel.display_likes(), 1203);
    }
}
