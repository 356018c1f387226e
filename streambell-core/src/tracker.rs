// File: streambell-core/src/tracker.rs

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use futures_util::future::join_all;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use streambell_common::models::{LiveEvent, LiveStream};
use streambell_common::Error;

use crate::platforms::StreamSource;

/// Upper bound on one status fetch, including the adapter's own timeouts.
const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Tracks which channels of one streaming platform are currently believed
/// live, and turns raw poll results into at most one "went live" event per
/// transition.
///
/// The map is keyed by the configured channel id so that the offline path can
/// always clear the same entry the live path created; the stored value is the
/// canonical live key (platform-assigned user id when available). The tracker
/// is the only writer of its map; callers serialize access to it.
pub struct LiveStateTracker {
    source: Arc<dyn StreamSource>,
    live: HashMap<String, String>,
}

impl LiveStateTracker {
    pub fn new(source: Arc<dyn StreamSource>) -> Self {
        Self {
            source,
            live: HashMap::new(),
        }
    }

    /// Polls every channel in the batch and returns the "became live"
    /// transitions, in input order.
    ///
    /// Fetches are issued concurrently, each bounded by [`FETCH_TIMEOUT`];
    /// state mutation happens serially afterwards. A failed fetch is "no
    /// event for this channel this cycle": it is warn-logged, leaves the live
    /// state untouched, and never aborts the rest of the batch.
    pub async fn check_streams(&mut self, channels: &[String]) -> Vec<LiveEvent> {
        let fetches = channels.iter().map(|channel| {
            let source = self.source.clone();
            async move { timeout(FETCH_TIMEOUT, source.fetch_live_status(channel)).await }
        });
        let statuses = join_all(fetches).await;

        let mut events = Vec::new();
        for (channel, status) in channels.iter().zip(statuses) {
            let status: Result<Option<LiveStream>, Error> = match status {
                Ok(inner) => inner,
                Err(elapsed) => Err(elapsed.into()),
            };

            match status {
                Ok(Some(stream)) => {
                    if self.live.contains_key(channel) {
                        debug!("Channel '{}' still live, no new event", channel);
                        continue;
                    }
                    let key = stream.canonical_key(channel);
                    info!("Channel '{}' went live (key={})", channel, key);
                    self.live.insert(channel.clone(), key);
                    events.push(LiveEvent {
                        channel: channel.clone(),
                        stream,
                    });
                }
                Ok(None) => {
                    if self.live.remove(channel).is_some() {
                        info!("Channel '{}' went offline", channel);
                    }
                }
                Err(e) => {
                    warn!("Status check for channel '{}' failed: {}", channel, e);
                }
            }
        }
        events
    }

    /// Number of channels currently believed live.
    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}
