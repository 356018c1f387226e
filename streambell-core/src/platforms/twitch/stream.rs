// ========================================================
// File: streambell-core/src/platforms/twitch/stream.rs
// ========================================================
use serde::Deserialize;
use tracing::debug;

use streambell_common::models::LiveStream;
use streambell_common::Error;

use crate::platforms::twitch::client::TwitchHelixClient;

/// Response from the "Get Streams" endpoint.
#[derive(Debug, Deserialize)]
pub struct StreamsResponse {
    pub data: Vec<StreamData>,
}

/// Single stream data record. Only the fields the notifier renders are kept.
#[derive(Debug, Deserialize)]
pub struct StreamData {
    pub user_id: String,
    pub user_login: String,
    pub user_name: String,
    pub game_name: String,
    #[serde(rename = "type")]
    pub type_field: String, // e.g., "live"
    pub title: String,
}

/// Fetches the live status of one channel via the Helix "Get Streams"
/// endpoint. Returns `Ok(None)` when the channel is offline; a non-2xx
/// response or network failure is an error, never an offline result.
pub async fn fetch_live_status(
    client: &TwitchHelixClient,
    channel: &str,
) -> Result<Option<LiveStream>, Error> {
    let url = format!("https://api.twitch.tv/helix/streams?user_login={}", channel);
    let resp = client
        .http_client()
        .get(&url)
        .header("Client-Id", client.client_id())
        .header("Authorization", format!("Bearer {}", client.bearer_token()))
        .send()
        .await
        .map_err(|e| Error::Platform(format!("fetch_live_status network error: {}", e)))?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body_text = resp.text().await.unwrap_or_default();
        return Err(Error::Platform(format!(
            "fetch_live_status: HTTP {} => {}",
            status, body_text
        )));
    }

    let body = resp.text().await?;
    let streams: StreamsResponse = serde_json::from_str(&body)
        .map_err(|e| Error::Platform(format!("fetch_live_status parse error: {}", e)))?;

    let Some(stream) = streams.data.first() else {
        debug!("Channel '{}' is offline", channel);
        return Ok(None);
    };

    debug!(
        "Channel '{}' is live: user='{}', title='{}', game='{}'",
        channel, stream.user_login, stream.title, stream.game_name
    );

    Ok(Some(LiveStream {
        user_id: Some(stream.user_id.clone()),
        user_name: stream.user_name.clone(),
        title: stream.title.clone(),
        game_name: stream.game_name.clone(),
    }))
}
