//! Snapshot subscriptions
//!
//! A subscription lives as long as the screen (or SSE connection) that
//! holds it; dropping it unsubscribes.

use futures::Stream;
use serde_json::Value;
use shared::message::FeedChange;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;

use super::path::FeedPath;
use super::store::FeedStore;

pub struct FeedSubscription {
    store: FeedStore,
    path: FeedPath,
    rx: broadcast::Receiver<FeedChange>,
    primed: bool,
}

impl FeedSubscription {
    pub(crate) fn new(store: FeedStore, path: FeedPath, rx: broadcast::Receiver<FeedChange>) -> Self {
        Self {
            store,
            path,
            rx,
            primed: false,
        }
    }

    pub fn path(&self) -> &FeedPath {
        &self.path
    }

    /// Next full snapshot of the subscribed path
    ///
    /// Returns `None` once the store is gone.
    pub async fn next(&mut self) -> Option<Value> {
        if !self.primed {
            self.primed = true;
            return Some(self.store.get_at(&self.path));
        }

        loop {
            match self.rx.recv().await {
                Ok(change) => {
                    let touched = match FeedPath::parse(&change.path) {
                        Ok(changed) => changed.overlaps(&self.path),
                        Err(_) => true,
                    };
                    if touched {
                        return Some(self.store.get_at(&self.path));
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    // Missed notices; the snapshot is still authoritative
                    tracing::warn!(path = %self.path, skipped, "Feed subscription lagged");
                    return Some(self.store.get_at(&self.path));
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// Adapt into a stream of snapshots
    pub fn into_stream(self) -> impl Stream<Item = Value> + Send {
        futures::stream::unfold(self, |mut sub| async move {
            sub.next().await.map(|snapshot| (snapshot, sub))
        })
    }
}

impl std::fmt::Debug for FeedSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedSubscription")
            .field("path", &self.path.to_string())
            .field("primed", &self.primed)
            .finish()
    }
}
