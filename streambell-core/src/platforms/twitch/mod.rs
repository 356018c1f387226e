// File: src/platforms/twitch/mod.rs

pub mod client;
pub mod stream;

pub use client::TwitchHelixClient;

use async_trait::async_trait;

use streambell_common::models::LiveStream;
use streambell_common::Error;

use crate::platforms::StreamSource;

/// Twitch implementation of [`StreamSource`], backed by the Helix
/// "Get Streams" endpoint.
pub struct TwitchSource {
    client: TwitchHelixClient,
}

impl TwitchSource {
    pub fn new(client: TwitchHelixClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StreamSource for TwitchSource {
    async fn fetch_live_status(&self, channel: &str) -> Result<Option<LiveStream>, Error> {
        stream::fetch_live_status(&self.client, channel).await
    }
}
