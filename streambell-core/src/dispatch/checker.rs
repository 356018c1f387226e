// File: streambell-core/src/dispatch/checker.rs

use std::collections::HashMap;

use tokio::sync::Mutex;
use tracing::debug;

use streambell_common::models::{LiveEvent, StreamingPlatform};
use streambell_common::Error;

use crate::tracker::LiveStateTracker;

/// Routes a batch of channels to the live-state tracker for the matching
/// streaming platform.
///
/// The platform→tracker map is resolved once at startup. Exactly one tracker
/// may be registered per platform; a second registration is a programming or
/// configuration error and fails fast. A platform with no tracker degrades to
/// "no events" at dispatch time, so a configured-but-unimplemented platform
/// can never crash a cycle.
pub struct CheckerDispatcher {
    trackers: HashMap<StreamingPlatform, Mutex<LiveStateTracker>>,
}

impl CheckerDispatcher {
    pub fn new() -> Self {
        Self {
            trackers: HashMap::new(),
        }
    }

    /// Registers the tracker for one platform. Startup-only.
    pub fn register(
        &mut self,
        platform: StreamingPlatform,
        tracker: LiveStateTracker,
    ) -> Result<(), Error> {
        if self.trackers.contains_key(&platform) {
            return Err(Error::Config(format!(
                "a live-state tracker is already registered for platform '{}'",
                platform
            )));
        }
        self.trackers.insert(platform, Mutex::new(tracker));
        Ok(())
    }

    /// Forwards the batch to the matching tracker and returns its "went
    /// live" events. The mutex serializes all mutations of one platform's
    /// live set (single writer per tracker).
    pub async fn dispatch(
        &self,
        platform: StreamingPlatform,
        channels: &[String],
    ) -> Vec<LiveEvent> {
        let Some(tracker) = self.trackers.get(&platform) else {
            debug!("No tracker registered for platform '{}', skipping {} channel(s)",
                platform, channels.len());
            return Vec::new();
        };
        tracker.lock().await.check_streams(channels).await
    }
}

impl Default for CheckerDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
