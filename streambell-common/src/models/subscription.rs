// File: streambell-common/src/models/subscription.rs

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Error;
use crate::models::platform::{NotificationPlatform, StreamingPlatform};

/// Delimiter between the fields of a channel entry.
pub const ENTRY_DELIMITER: char = '|';

/// One watched channel and where its live notifications go.
///
/// Parsed from a delimited entry of the form
/// `"<channel> | <streaming platform> | <notification platform> [| ...]"`.
/// Identity is `(channel, streaming_platform)`; the same channel may fan out
/// to several notification platforms.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ChannelSubscription {
    pub channel: String,
    pub streaming_platform: StreamingPlatform,
    pub notification_platforms: BTreeSet<NotificationPlatform>,
}

impl ChannelSubscription {
    /// Parses a single delimited entry.
    ///
    /// Unknown platform tokens and entries with fewer than three fields are
    /// an `Error::Parse` for this entry only; callers decide whether to drop
    /// or propagate.
    pub fn parse(entry: &str) -> Result<Self, Error> {
        let parts: Vec<&str> = entry.split(ENTRY_DELIMITER).map(str::trim).collect();
        if parts.len() < 3 {
            return Err(Error::Parse(format!(
                "channel entry '{}' has {} field(s), expected at least 3",
                entry,
                parts.len()
            )));
        }

        let channel = parts[0].to_string();
        if channel.is_empty() {
            return Err(Error::Parse(format!("channel entry '{}' has an empty id", entry)));
        }

        let streaming_platform: StreamingPlatform =
            parts[1].parse().map_err(Error::Parse)?;

        let mut notification_platforms = BTreeSet::new();
        for token in &parts[2..] {
            let platform: NotificationPlatform = token.parse().map_err(Error::Parse)?;
            notification_platforms.insert(platform);
        }

        Ok(Self {
            channel,
            streaming_platform,
            notification_platforms,
        })
    }

    /// Parses a batch of raw entries.
    ///
    /// Blank entries and entries without the delimiter are silently skipped;
    /// entries that fail to parse are warn-logged and dropped, never failing
    /// the rest of the batch.
    pub fn parse_all(entries: &[String]) -> Vec<ChannelSubscription> {
        entries
            .iter()
            .filter(|e| !e.trim().is_empty())
            .filter(|e| e.contains(ENTRY_DELIMITER))
            .filter_map(|entry| match ChannelSubscription::parse(entry) {
                Ok(sub) => Some(sub),
                Err(e) => {
                    warn!("Skipping channel entry: {}", e);
                    None
                }
            })
            .collect()
    }
}
