//! Client for the Instagram embed widget, the one external collaborator in
//! the system.
//!
//! This crate handles:
//! - Building the embed locator for a post identifier
//! - Loading the third-party embed script exactly once per process
//! - Invoking the widget's "process embeds" entry point after new embed
//!   markup is inserted
//! - Bounding the script load with a timeout so a failed load surfaces as an
//!   error instead of a perpetual loading placeholder
//!
//! The actual document/runtime is abstracted behind the [`ScriptHost`]
//! trait, so the loading discipline is testable without a browser.

use std::future::Future;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

/// URL of the third-party embed script.
pub const EMBED_SCRIPT_URL: &str = "https://www.instagram.com/embed.js";

/// Default upper bound on how long a script load may take.
pub const DEFAULT_LOAD_TIMEOUT: Duration = Duration::from_secs(10);

/// Build the embed locator for an Instagram post identifier.
///
/// Fixed URL template; the id is the post identifier carried by an
/// Instagram-sourced reel.
pub fn embed_url(instagram_id: &str) -> String {
    format!("https://www.instagram.com/p/{instagram_id}/embed/")
}

/// Errors that can occur when interacting with the embed widget.
#[derive(Error, Debug)]
pub enum EmbedError {
    #[error("Embed script failed to load: {0}")]
    ScriptLoad(String),

    #[error("Embed script did not load within {0:?}")]
    LoadTimeout(Duration),

    #[error("Embed script has not been loaded yet")]
    NotLoaded,
}

/// The runtime surface the loader drives.
///
/// A production implementation injects a `<script>` element into the
/// document and exposes the widget's global entry point; tests script it.
pub trait ScriptHost {
    /// Insert the script element for `url` into the document. The future
    /// resolves when the script has loaded, or errors when the load fails.
    fn inject_script(&self, url: &str) -> impl Future<Output = anyhow::Result<()>> + Send;

    /// Invoke the widget's entry point that scans the document for embed
    /// markup and upgrades it to the native player.
    fn process_embeds(&self);
}

/// Process-wide loader for the embed script.
///
/// Init-once and idempotent: concurrent and repeated calls to
/// [`ensure_loaded`](Self::ensure_loaded) inject the script at most once.
/// A failed or timed-out load leaves the loader unset, so the next viewer
/// retries instead of inheriting a dead placeholder.
pub struct EmbedScriptLoader {
    loaded: OnceCell<()>,
    timeout: Duration,
}

impl EmbedScriptLoader {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_LOAD_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            loaded: OnceCell::new(),
            timeout,
        }
    }

    /// Load the embed script if it has not been loaded yet.
    ///
    /// Guards against double-injection: only the first caller actually
    /// injects; everyone else waits on the same initialization.
    pub async fn ensure_loaded<H: ScriptHost>(&self, host: &H) -> Result<(), EmbedError> {
        self.loaded
            .get_or_try_init(|| async {
                info!(url = EMBED_SCRIPT_URL, "injecting embed script");
                match tokio::time::timeout(self.timeout, host.inject_script(EMBED_SCRIPT_URL)).await
                {
                    Ok(Ok(())) => {
                        info!("embed script loaded");
                        Ok(())
                    }
                    Ok(Err(err)) => {
                        warn!("embed script failed to load: {err:#}");
                        Err(EmbedError::ScriptLoad(err.to_string()))
                    }
                    Err(_) => {
                        warn!(timeout = ?self.timeout, "embed script load timed out");
                        Err(EmbedError::LoadTimeout(self.timeout))
                    }
                }
            })
            .await?;
        Ok(())
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.initialized()
    }

    /// Ask the widget to process freshly inserted embed markup.
    ///
    /// Must be called after every insertion of embed markup; calling it
    /// before a successful load is an error, not a silent no-op.
    pub fn process_embeds<H: ScriptHost>(&self, host: &H) -> Result<(), EmbedError> {
        if !self.is_loaded() {
            return Err(EmbedError::NotLoaded);
        }
        debug!("processing embed markup");
        host.process_embeds();
        Ok(())
    }
}

impl Default for EmbedScriptLoader {
    fn default() -> Self {
        Self::new()
    }
}
