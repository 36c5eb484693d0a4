//! Async fetch bridge: the one network operation per run.
//!
//! The fetch is spawned onto the tokio runtime and its result is delivered
//! exactly once over the channel; the UI thread drains the channel from its
//! event loop. No retries, no cancellation.

use std::sync::mpsc::Sender;

use ninedays_feed::{FeedBulletin, FeedClient, FeedError};

/// Messages sent from async operations back to the UI thread.
#[derive(Debug)]
pub enum FeedMessage {
    /// Result of fetching the forecast bulletin.
    FetchDone(Result<FeedBulletin, FeedError>),
}

/// Kick off the bulletin fetch. Sends `FetchDone` on the channel when the
/// request settles, success or failure.
pub fn request_fetch(
    tx: &Sender<FeedMessage>,
    client: FeedClient,
    handle: &tokio::runtime::Handle,
) {
    let tx = tx.clone();
    handle.spawn(async move {
        let result = client.fetch_bulletin().await;
        if let Err(e) = &result {
            tracing::warn!(error = %e, "forecast fetch failed");
        }
        // The receiver going away just means the UI quit before the fetch
        // settled; nothing to do with the result then.
        let _ = tx.send(FeedMessage::FetchDone(result));
    });
}
