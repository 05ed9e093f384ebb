//! Link-dispatch bridge: async channel from the panels to the open-link
//! collaborator.
//!
//! The UI thread uses `try_send` (non-blocking); the collaborator receives
//! on its own runtime and opens the URL externally. Dispatch never blocks
//! rendering, and a dropped message only costs the click.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// Which card action produced the link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkKind {
    /// Open the paper's landing page.
    View,
    /// Open the rewritten direct-download URL.
    Download,
}

/// Message from a panel to the link-opening collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkRequest {
    pub url: String,
    pub kind: LinkKind,
}

impl LinkRequest {
    pub fn view(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            kind: LinkKind::View,
        }
    }

    pub fn download(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            kind: LinkKind::Download,
        }
    }
}

/// Sender half of the panel → collaborator channel.
pub type LinkSender = mpsc::Sender<LinkRequest>;

/// Receiver half; drain it on a runtime thread and open each URL.
pub type LinkReceiver = mpsc::Receiver<LinkRequest>;

/// Creates a bounded channel for link requests.
/// Give the sender to a panel's `with_bridge(sender)`; drain the receiver
/// wherever the external browser lives.
pub fn vitrine_link_channel(capacity: usize) -> (LinkSender, LinkReceiver) {
    mpsc::channel(capacity)
}

/// Non-blocking dispatch. A full or closed channel drops the request with
/// a warning; the panel keeps rendering either way.
pub fn try_dispatch(sender: &LinkSender, request: LinkRequest) {
    if let Err(e) = sender.try_send(request) {
        tracing::warn!("link dispatch dropped: {}", e);
    }
}
