// File: streambell-common/src/config.rs

use std::env;
use std::time::Duration;

use crate::error::Error;

/// Environment prefix for all settings.
const ENV_PREFIX: &str = "STREAMBELL_";

/// Runtime configuration, loaded once at startup from environment variables.
///
/// Twitch credentials, the poll delay, the message template, and the channel
/// list are required. Telegram and Discord credentials are optional as a
/// pair; a destination with no credentials is simply not registered with the
/// notification router.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub twitch_client_id: String,
    pub twitch_oauth_token: String,
    pub telegram: Option<TelegramConfig>,
    pub discord: Option<DiscordConfig>,
    pub poll_delay: Duration,
    pub message_template: String,
    pub channels: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub token: String,
    pub chat_id: String,
}

#[derive(Debug, Clone)]
pub struct DiscordConfig {
    pub token: String,
    pub channel_id: String,
}

impl AppConfig {
    /// Loads configuration from `STREAMBELL_*` environment variables.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup. The production
    /// path is [`AppConfig::from_env`]; tests inject a map instead of
    /// mutating process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name));
        let require = |name: &str| {
            get(name).ok_or_else(|| {
                Error::Config(format!("missing required setting {}{}", ENV_PREFIX, name))
            })
        };

        let twitch_client_id = require("TWITCH_CLIENT_ID")?;
        let twitch_oauth_token = require("TWITCH_OAUTH_TOKEN")?;

        let delay_secs: u64 = require("POLL_DELAY_SECONDS")?.parse().map_err(|_| {
            Error::Config(format!(
                "{}POLL_DELAY_SECONDS must be a whole number of seconds",
                ENV_PREFIX
            ))
        })?;
        if delay_secs == 0 {
            return Err(Error::Config(format!(
                "{}POLL_DELAY_SECONDS must be greater than zero",
                ENV_PREFIX
            )));
        }

        let message_template = require("MESSAGE_TEMPLATE")?;

        let channels: Vec<String> = require("CHANNELS")?
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if channels.is_empty() {
            return Err(Error::Config(format!(
                "{}CHANNELS must contain at least one entry",
                ENV_PREFIX
            )));
        }

        let telegram = match (get("TELEGRAM_TOKEN"), get("TELEGRAM_CHAT_ID")) {
            (Some(token), Some(chat_id)) => Some(TelegramConfig { token, chat_id }),
            (None, None) => None,
            _ => {
                return Err(Error::Config(format!(
                    "{0}TELEGRAM_TOKEN and {0}TELEGRAM_CHAT_ID must be set together",
                    ENV_PREFIX
                )));
            }
        };

        let discord = match (get("DISCORD_TOKEN"), get("DISCORD_CHANNEL_ID")) {
            (Some(token), Some(channel_id)) => Some(DiscordConfig { token, channel_id }),
            (None, None) => None,
            _ => {
                return Err(Error::Config(format!(
                    "{0}DISCORD_TOKEN and {0}DISCORD_CHANNEL_ID must be set together",
                    ENV_PREFIX
                )));
            }
        };

        Ok(Self {
            twitch_client_id,
            twitch_oauth_token,
            telegram,
            discord,
            poll_delay: Duration::from_secs(delay_secs),
            message_template,
            channels,
        })
    }
}
