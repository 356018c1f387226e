// File: src/platforms/mod.rs

use async_trait::async_trait;

use streambell_common::models::LiveStream;
use streambell_common::Error;

/// Query contract for one streaming platform: fetch the current live status
/// of one channel. `Ok(None)` means the channel is offline; an error means
/// the status could not be determined this cycle (not that the channel is
/// offline).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StreamSource: Send + Sync {
    async fn fetch_live_status(&self, channel: &str) -> Result<Option<LiveStream>, Error>;
}

// Re-export submodules
pub mod twitch;

pub use twitch::TwitchSource;
