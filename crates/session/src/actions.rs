//! Share and download affordances, dispatched exhaustively on the reel
//! variant.
//!
//! Local reels go through the runtime's native share capability with a
//! clipboard fallback, and can be downloaded directly. Instagram reels never
//! touch native share, clipboard, or download: sharing opens the canonical
//! post URL, downloading is refused with a notice.

use std::future::Future;

use anyhow::Result;
use catalog::{Reel, ReelSource};
use tracing::warn;

/// Payload for the runtime's native share capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    pub title: String,
    pub text: String,
    pub url: String,
}

/// Runtime surface the share action drives.
pub trait ShareTarget {
    /// Native share sheet. Errors when the capability is absent or the
    /// runtime rejects the request.
    fn share(&self, request: &ShareRequest) -> impl Future<Output = Result<()>> + Send;

    /// Copy plain text to the clipboard.
    fn copy_to_clipboard(&self, text: &str) -> Result<()>;

    /// Open a URL in a new browsing context.
    fn open_external(&self, url: &str);
}

/// What a share attempt ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    CopiedToClipboard,
    OpenedExternal,
}

/// Share a reel through `target`.
///
/// Local: native share `{title, text, url}`; on rejection, fall back to
/// copying a constructed line to the clipboard. Instagram: open the
/// canonical post URL, nothing else.
pub async fn share_reel<T: ShareTarget>(target: &T, reel: &Reel) -> Result<ShareOutcome> {
    match &reel.source {
        ReelSource::Instagram { instagram_url, .. } => {
            target.open_external(instagram_url);
            Ok(ShareOutcome::OpenedExternal)
        }
        ReelSource::Local { video_url } => {
            let request = ShareRequest {
                title: format!("Reel by @{}", reel.username),
                text: reel.caption.clone(),
                url: video_url.clone(),
            };
            match target.share(&request).await {
                Ok(()) => Ok(ShareOutcome::Shared),
                Err(err) => {
                    warn!("native share unavailable, copying to clipboard: {err:#}");
                    let line =
                        format!("Check out this reel by @{}: {}", reel.username, video_url);
                    target.copy_to_clipboard(&line)?;
                    Ok(ShareOutcome::CopiedToClipboard)
                }
            }
        }
    }
}

/// What the download affordance should do for a reel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadAction {
    /// Trigger a browser download of `url`, saved under `file_name`.
    Save { url: String, file_name: String },
    /// Refused; `notice` is shown to the user.
    Refused { notice: String },
}

/// Resolve the download affordance for a reel.
pub fn download_action(reel: &Reel) -> DownloadAction {
    match &reel.source {
        ReelSource::Local { video_url } => DownloadAction::Save {
            url: video_url.clone(),
            file_name: format!("reel-{}.mp4", reel.id),
        },
        ReelSource::Instagram { .. } => DownloadAction::Refused {
            notice: "This reel is hosted on Instagram. Open it there to save it.".to_string(),
        },
    }
}
