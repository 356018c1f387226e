// File: streambell-common/src/models/platform.rs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Streaming platforms we can poll for live status.
///
/// The lowercase string form is the canonical one used in channel entries
/// and must round-trip exactly through `Display`/`FromStr`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum StreamingPlatform {
    Twitch,
    VkPlay,
}

impl fmt::Display for StreamingPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamingPlatform::Twitch => write!(f, "twitch"),
            StreamingPlatform::VkPlay => write!(f, "vk"),
        }
    }
}

impl FromStr for StreamingPlatform {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "twitch" => Ok(StreamingPlatform::Twitch),
            "vk" => Ok(StreamingPlatform::VkPlay),
            _ => Err(format!("Unknown streaming platform: {}", s)),
        }
    }
}

/// Messaging destinations a live notification can be fanned out to.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum NotificationPlatform {
    Telegram,
    Discord,
}

impl fmt::Display for NotificationPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationPlatform::Telegram => write!(f, "telegram"),
            NotificationPlatform::Discord => write!(f, "discord"),
        }
    }
}

impl FromStr for NotificationPlatform {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "telegram" => Ok(NotificationPlatform::Telegram),
            "discord" => Ok(NotificationPlatform::Discord),
            _ => Err(format!("Unknown notification platform: {}", s)),
        }
    }
}
