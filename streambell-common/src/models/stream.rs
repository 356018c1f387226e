// File: streambell-common/src/models/stream.rs

use serde::{Deserialize, Serialize};

/// Snapshot of one live channel at one poll instant.
///
/// `user_id` is the platform-assigned id when the platform reports one; it is
/// preferred over the configured channel name as the canonical identity of a
/// live broadcast.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct LiveStream {
    pub user_id: Option<String>,
    pub user_name: String,
    pub title: String,
    pub game_name: String,
}

impl LiveStream {
    /// Canonical dedup key: platform user id when available, otherwise the
    /// configured channel id the snapshot was fetched for.
    pub fn canonical_key(&self, channel: &str) -> String {
        self.user_id
            .clone()
            .unwrap_or_else(|| channel.to_string())
    }
}

/// A single offline→online transition observed for one configured channel.
///
/// Carries the configured channel id so the poll cycle can route the event
/// back to that channel's notification destinations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveEvent {
    pub channel: String,
    pub stream: LiveStream,
}
