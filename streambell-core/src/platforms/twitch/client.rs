// File: streambell-core/src/platforms/twitch/client.rs

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client as ReqwestClient;

use streambell_common::Error;

/// Upper bound on any single Helix request. A hung call must not stall the
/// polling loop.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// A small wrapper client for calling Helix endpoints.
///
/// Holds the pre-issued OAuth bearer token and client id from configuration;
/// the reqwest client carries a request timeout so every call is bounded.
pub struct TwitchHelixClient {
    http: Arc<ReqwestClient>,
    bearer_token: String,
    client_id: String,
}

impl TwitchHelixClient {
    /// Create a new `TwitchHelixClient`.
    ///
    /// - `bearer_token`: an OAuth token with the necessary scopes
    /// - `client_id`: the application client id the token was issued for
    pub fn new(bearer_token: &str, client_id: &str) -> Result<Self, Error> {
        let http = ReqwestClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http: Arc::new(http),
            bearer_token: bearer_token.to_string(),
            client_id: client_id.to_string(),
        })
    }

    pub fn bearer_token(&self) -> &str {
        &self.bearer_token
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Returns an `Arc<ReqwestClient>` reference for request construction.
    pub fn http_client(&self) -> Arc<ReqwestClient> {
        self.http.clone()
    }
}
