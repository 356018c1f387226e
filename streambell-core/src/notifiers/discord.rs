// File: streambell-core/src/notifiers/discord.rs

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;
use twilight_http::Client as HttpClient;
use twilight_model::id::marker::ChannelMarker;
use twilight_model::id::Id;

use streambell_common::models::NotificationPlatform;
use streambell_common::Error;

use crate::notifiers::Notifier;

/// Discord send primitive: REST-only client posting into one fixed channel.
/// No gateway connection is needed for outbound messages.
pub struct DiscordNotifier {
    http: Arc<HttpClient>,
    channel_id: Id<ChannelMarker>,
}

impl DiscordNotifier {
    pub fn new(token: &str, channel_id: &str) -> Result<Self, Error> {
        let channel_id_u64: u64 = channel_id.parse().map_err(|_| {
            Error::Config(format!("invalid Discord channel id: {}", channel_id))
        })?;
        Ok(Self {
            http: Arc::new(HttpClient::new(token.to_string())),
            channel_id: Id::<ChannelMarker>::new(channel_id_u64),
        })
    }
}

#[async_trait]
impl Notifier for DiscordNotifier {
    fn platform(&self) -> NotificationPlatform {
        NotificationPlatform::Discord
    }

    async fn send(&self, message: &str) -> Result<(), Error> {
        self.http
            .create_message(self.channel_id)
            .content(message)
            .await
            .map_err(|e| Error::Notify(format!("Discord send failed: {e:?}")))?;
        debug!("Sent Discord notification to channel {}", self.channel_id);
        Ok(())
    }
}
